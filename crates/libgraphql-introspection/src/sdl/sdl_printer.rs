use crate::model::Directive;
use crate::model::EnumValue;
use crate::model::Field;
use crate::model::InputValue;
use crate::model::Schema;
use crate::model::Type;
use crate::model::TypeKind;
use crate::sdl::element_kind::ElementKind;
use crate::sdl::element_kind::IndentLevel;
use crate::sdl::literal;
use crate::sdl::sdl_writer::SdlWriter;
use crate::sdl::PrintOptions;
use crate::sdl::SdlRenderError;

type Result<T> = std::result::Result<T, SdlRenderError>;

const BUILTIN_SCALARS: [&str; 5] = ["String", "Boolean", "Int", "Float", "ID"];

/// Renders an introspected [`Schema`] (or individual parts of it) as SDL.
///
/// Descriptions are printed as `#` comments above the element they
/// describe. Every emitted line ends with `\n`, independent of platform.
#[derive(Clone, Copy, Debug)]
pub struct SdlPrinter<'a> {
    pub(crate) options: &'a PrintOptions,
    pub(crate) schema: &'a Schema,
}
impl<'a> SdlPrinter<'a> {
    pub fn new(schema: &'a Schema, options: &'a PrintOptions) -> Self {
        Self {
            options,
            schema,
        }
    }

    /// Renders a single directive declaration. Standard directives (`@skip`,
    /// `@include`, `@deprecated`) render as an empty string.
    pub fn render_directive(&self, directive: &Directive) -> String {
        let mut buffer = String::new();
        self.write_directive(&mut SdlWriter::new(&mut buffer, self.options.indent_size), directive);
        buffer
    }

    /// Renders the `schema { ... }` block, or an empty string when the block
    /// would carry no information.
    pub fn render_schema_definition(&self) -> String {
        let mut buffer = String::new();
        self.write_schema_definition(&mut SdlWriter::new(&mut buffer, self.options.indent_size));
        buffer
    }

    /// Renders a single top-level type definition. Omitted built-in scalars
    /// render as an empty string.
    pub fn render_type(&self, ty: &Type) -> Result<String> {
        let mut buffer = String::new();
        self.write_type(&mut SdlWriter::new(&mut buffer, self.options.indent_size), ty)?;
        Ok(buffer)
    }

    /// Writes a directive declaration block. Returns `false` (and writes
    /// nothing) for standard directives.
    pub(crate) fn write_directive(&self, out: &mut SdlWriter<'_>, directive: &Directive) -> bool {
        if directive.is_standard() {
            log::trace!("Not declaring standard directive `@{}`.", directive.name);
            return false;
        }

        out.begin_block();
        self.write_description(out, ElementKind::Directive, directive.description.as_deref());

        let on = if directive.is_repeatable { " repeatable on" } else { " on" };
        let args = directive.args.as_deref().unwrap_or_default();
        if args.iter().all(InputValue::is_plain) {
            // With no descriptions or directives on any argument, the whole
            // signature fits on one line.
            out.line(IndentLevel::Top, format_args!(
                "directive @{}{}{on}",
                directive.name,
                single_line_args(args),
            ));
        } else {
            out.line(IndentLevel::Top, format_args!("directive @{}(", directive.name));
            for arg in args {
                self.write_input_value(out, ElementKind::DirectiveArgument, arg);
            }
            out.line(IndentLevel::Top, format_args!("){on}"));
        }

        for location in directive.locations.iter().flatten() {
            out.line(IndentLevel::Member, format_args!("| {location}"));
        }
        true
    }

    /// Writes the `schema` block when [`has_schema_definition`] holds.
    ///
    /// [`has_schema_definition`]: Self::has_schema_definition
    pub(crate) fn write_schema_definition(&self, out: &mut SdlWriter<'_>) -> bool {
        if !self.has_schema_definition() {
            return false;
        }
        let schema = self.schema;

        out.begin_block();
        self.write_description(out, ElementKind::Schema, schema.description.as_deref());
        out.line(IndentLevel::Top, format_args!(
            "schema{} {{",
            self.render_directives(schema),
        ));
        let root_types = [
            ("query", &schema.query_type),
            ("mutation", &schema.mutation_type),
            ("subscription", &schema.subscription_type),
        ];
        for (operation, root_type) in root_types {
            if let Some(root_type) = root_type {
                out.line(IndentLevel::Member, format_args!("{operation}: {}", root_type.name));
            }
        }
        out.line(IndentLevel::Top, format_args!("}}"));
        true
    }

    /// Writes a top-level type definition block. Returns `Ok(false)` when
    /// the type is an omitted built-in scalar.
    pub(crate) fn write_type(&self, out: &mut SdlWriter<'_>, ty: &Type) -> Result<bool> {
        match &ty.kind {
            TypeKind::Enum => self.write_enum(out, ty),
            TypeKind::InputObject => self.write_input_object(out, ty),
            TypeKind::Interface => self.write_object_or_interface(out, "interface", ty),
            TypeKind::Object => self.write_object_or_interface(out, "type", ty),
            TypeKind::Scalar => return Ok(self.write_scalar(out, ty)),
            TypeKind::Union => self.write_union(out, ty),
            TypeKind::List | TypeKind::NonNull | TypeKind::Unknown(_) =>
                return Err(unsupported_type_kind(ty)),
        }
        Ok(true)
    }

    /// Whether the `schema` block carries any information: root operation
    /// types or (printed) applied directives. The default root type names
    /// (`Query`, `Mutation`, `Subscription`) are not inferred.
    pub(crate) fn has_schema_definition(&self) -> bool {
        let has_applied_directives =
            self.options.print_directives
                && self.schema.applied_directives.as_ref().is_some_and(|list| !list.is_empty());
        self.schema.has_root_operation_types() || has_applied_directives
    }

    pub(crate) fn omits_builtin_scalar(&self, ty: &Type) -> bool {
        let omitted =
            ty.kind == TypeKind::Scalar
                && self.options.omit_builtin_scalars
                && BUILTIN_SCALARS.contains(&ty.name.as_str());
        if omitted {
            log::trace!("Omitting built-in scalar `{}`.", ty.name);
        }
        omitted
    }

    fn write_scalar(&self, out: &mut SdlWriter<'_>, ty: &Type) -> bool {
        if self.omits_builtin_scalar(ty) {
            return false;
        }

        out.begin_block();
        self.write_description(out, ElementKind::Type, ty.description.as_deref());
        out.line(IndentLevel::Top, format_args!(
            "scalar {}{}",
            ty.name,
            self.render_directives(ty),
        ));
        true
    }

    fn write_enum(&self, out: &mut SdlWriter<'_>, ty: &Type) {
        let header = format!("enum {}{}", ty.name, self.render_directives(ty));
        self.write_block(out, ty, &header, ty.enum_values.as_deref(), |out, value| {
            self.write_enum_value(out, value)
        });
    }

    fn write_enum_value(&self, out: &mut SdlWriter<'_>, value: &EnumValue) {
        self.write_description(out, ElementKind::EnumValue, value.description.as_deref());
        out.line(IndentLevel::Member, format_args!(
            "{}{}",
            value.name,
            self.render_directives(value),
        ));
    }

    fn write_input_object(&self, out: &mut SdlWriter<'_>, ty: &Type) {
        let header = format!("input {}{}", ty.name, self.render_directives(ty));
        self.write_block(out, ty, &header, ty.input_fields.as_deref(), |out, field| {
            self.write_input_value(out, ElementKind::InputField, field)
        });
    }

    fn write_object_or_interface(&self, out: &mut SdlWriter<'_>, keyword: &str, ty: &Type) {
        let interfaces = ty.interfaces.as_deref().unwrap_or_default();
        let implements =
            if interfaces.is_empty() {
                String::new()
            } else {
                format!(
                    " implements {}",
                    interfaces.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" & "),
                )
            };
        let header = format!(
            "{keyword} {}{implements}{}",
            ty.name,
            self.render_directives(ty),
        );
        self.write_block(out, ty, &header, ty.fields.as_deref(), |out, field| {
            self.write_field(out, field)
        });
    }

    fn write_union(&self, out: &mut SdlWriter<'_>, ty: &Type) {
        out.begin_block();
        self.write_description(out, ElementKind::Type, ty.description.as_deref());

        let members = ty.possible_types.as_deref().unwrap_or_default();
        let directives = self.render_directives(ty);
        if members.is_empty() {
            out.line(IndentLevel::Top, format_args!("union {}{directives}", ty.name));
        } else {
            out.line(IndentLevel::Top, format_args!(
                "union {} = {}{directives}",
                ty.name,
                members.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" | "),
            ));
        }
    }

    /// Writes `header {`, one entry per item, and `}`. Types without any
    /// items are written as the bare header.
    fn write_block<T>(
        &self,
        out: &mut SdlWriter<'_>,
        ty: &Type,
        header: &str,
        items: Option<&[T]>,
        mut write_item: impl FnMut(&mut SdlWriter<'_>, &T),
    ) {
        out.begin_block();
        self.write_description(out, ElementKind::Type, ty.description.as_deref());

        match items {
            Some(items) if !items.is_empty() => {
                out.line(IndentLevel::Top, format_args!("{header} {{"));
                for item in items {
                    write_item(out, item);
                }
                out.line(IndentLevel::Top, format_args!("}}"));
            },
            _ => out.line(IndentLevel::Top, format_args!("{header}")),
        }
    }

    fn write_field(&self, out: &mut SdlWriter<'_>, field: &Field) {
        self.write_description(out, ElementKind::Field, field.description.as_deref());

        let directives = self.render_directives(field);
        let args = field.args.as_deref().unwrap_or_default();
        if args.iter().all(InputValue::is_plain) {
            // With no descriptions or directives on any argument, the whole
            // field signature fits on one line.
            out.line(IndentLevel::Member, format_args!(
                "{}{}: {}{directives}",
                field.name,
                single_line_args(args),
                field.type_ref,
            ));
        } else {
            out.line(IndentLevel::Member, format_args!("{}(", field.name));
            for arg in args {
                self.write_input_value(out, ElementKind::FieldArgument, arg);
            }
            out.line(IndentLevel::Member, format_args!("): {}{directives}", field.type_ref));
        }
    }

    fn write_input_value(&self, out: &mut SdlWriter<'_>, kind: ElementKind, value: &InputValue) {
        self.write_description(out, kind, value.description.as_deref());
        out.line(kind.indent(), format_args!(
            "{}: {}{}{}",
            value.name,
            value.type_ref,
            literal::format_default(value.default_value.as_deref()),
            self.render_directives(value),
        ));
    }

    /// Writes one `# ...` comment line per non-empty line of `description`.
    fn write_description(
        &self,
        out: &mut SdlWriter<'_>,
        kind: ElementKind,
        description: Option<&str>,
    ) {
        let Some(description) = description else {
            return;
        };
        if !kind.descriptions_enabled(self.options) {
            return;
        }

        for line in description.split(['\r', '\n']).filter(|line| !line.is_empty()) {
            out.line(kind.indent(), format_args!("# {}", literal::escape_string(line)));
        }
    }
}

pub(crate) fn unsupported_type_kind(ty: &Type) -> SdlRenderError {
    SdlRenderError::UnsupportedTypeKind {
        kind: ty.kind.to_string(),
        type_name: ty.name.to_owned(),
    }
}

/// `(name: Type = default, ...)` for a list of plain arguments, or an empty
/// string when there are none.
fn single_line_args(args: &[InputValue]) -> String {
    if args.is_empty() {
        return String::new();
    }

    format!(
        "({})",
        args.iter()
            .map(|arg| format!(
                "{}: {}{}",
                arg.name,
                arg.type_ref,
                literal::format_default(arg.default_value.as_deref()),
            ))
            .collect::<Vec<_>>()
            .join(", "),
    )
}
