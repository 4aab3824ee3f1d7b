use crate::model::AppliedDirective;
use crate::model::Directive;
use crate::model::EnumValue;
use crate::model::Field;
use crate::model::HasDirectives;
use crate::model::InputValue;
use crate::model::Schema;
use crate::model::Type;
use crate::model::TypeKind;
use crate::model::TypeRef;
use crate::sdl::element_kind::ElementKind;
use crate::sdl::literal;
use crate::sdl::sdl_printer::unsupported_type_kind;
use crate::sdl::PrintOptions;
use crate::sdl::SdlPrinter;
use crate::sdl::SdlRenderError;
use graphql_parser::Pos;
use graphql_parser::schema as ast;

type Result<T> = std::result::Result<T, SdlRenderError>;

/// An owned `graphql_parser` schema document.
pub type SchemaDocument = ast::Document<'static, String>;

/// Converts `schema` into a `graphql_parser` document using the given
/// [`PrintOptions`].
pub fn to_document(schema: &Schema, options: &PrintOptions) -> Result<SchemaDocument> {
    SdlPrinter::new(schema, options).to_document()
}

impl SdlPrinter<'_> {
    /// Converts the whole schema into a `graphql_parser` document.
    ///
    /// The document holds exactly the definitions [`print`](Self::print)
    /// renders, in the same order, and honors the same options: standard
    /// directives, introspection types, and omitted built-in scalars are left
    /// out, and descriptions and applied directives are only attached when
    /// enabled. Default values and applied-directive argument values are
    /// parsed into [`ast::Value`]s.
    ///
    /// Positions of all nodes are left at [`Pos::default()`].
    pub fn to_document(&self) -> Result<SchemaDocument> {
        let mut definitions = vec![];

        for directive in self.ordered_directives() {
            if let Some(definition) = self.to_directive_definition(directive)? {
                definitions.push(ast::Definition::DirectiveDefinition(definition));
            }
        }

        if let Some(definition) = self.to_schema_definition()? {
            definitions.push(ast::Definition::SchemaDefinition(definition));
        }

        for ty in self.ordered_types() {
            if let Some(definition) = self.to_type_definition(ty)? {
                definitions.push(ast::Definition::TypeDefinition(definition));
            }
        }

        log::debug!("Converted the schema into {} definitions.", definitions.len());
        Ok(ast::Document { definitions })
    }

    /// `None` for the standard directives (`@skip`, `@include`,
    /// `@deprecated`).
    pub fn to_directive_definition(
        &self,
        directive: &Directive,
    ) -> Result<Option<ast::DirectiveDefinition<'static, String>>> {
        if directive.is_standard() {
            return Ok(None);
        }

        let locations =
            directive.locations.iter()
                .flatten()
                .map(|location| {
                    location.as_str()
                        .parse::<ast::DirectiveLocation>()
                        .map_err(|_| SdlRenderError::UnsupportedDirectiveLocation {
                            directive_name: directive.name.to_owned(),
                            location: location.to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

        Ok(Some(ast::DirectiveDefinition {
            arguments: self.to_input_values(
                ElementKind::DirectiveArgument,
                directive.args.as_deref(),
            )?,
            description: self.to_description(ElementKind::Directive, directive.description.as_deref()),
            locations,
            name: directive.name.to_owned(),
            position: Pos::default(),
            repeatable: directive.is_repeatable,
        }))
    }

    /// `None` when the schema has neither root operation types nor (printed)
    /// applied directives.
    pub fn to_schema_definition(&self) -> Result<Option<ast::SchemaDefinition<'static, String>>> {
        if !self.has_schema_definition() {
            return Ok(None);
        }

        let schema = self.schema;
        Ok(Some(ast::SchemaDefinition {
            directives: self.to_directives(schema)?,
            mutation: schema.mutation_type.as_ref().map(|root| root.name.to_owned()),
            position: Pos::default(),
            query: schema.query_type.as_ref().map(|root| root.name.to_owned()),
            subscription: schema.subscription_type.as_ref().map(|root| root.name.to_owned()),
        }))
    }

    /// `None` for an omitted built-in scalar.
    pub fn to_type_definition(&self, ty: &Type) -> Result<Option<ast::TypeDefinition<'static, String>>> {
        if ty.kind.is_wrapper() || matches!(ty.kind, TypeKind::Unknown(_)) {
            return Err(unsupported_type_kind(ty));
        }
        if self.omits_builtin_scalar(ty) {
            return Ok(None);
        }

        let description = self.to_description(ElementKind::Type, ty.description.as_deref());
        let directives = self.to_directives(ty)?;
        let name = ty.name.to_owned();
        let position = Pos::default();
        let definition = match &ty.kind {
            TypeKind::Enum => ast::TypeDefinition::Enum(ast::EnumType {
                description,
                directives,
                name,
                position,
                values: ty.enum_values.iter()
                    .flatten()
                    .map(|value| self.to_enum_value(value))
                    .collect::<Result<Vec<_>>>()?,
            }),

            TypeKind::InputObject => ast::TypeDefinition::InputObject(ast::InputObjectType {
                description,
                directives,
                fields: self.to_input_values(ElementKind::InputField, ty.input_fields.as_deref())?,
                name,
                position,
            }),

            TypeKind::Interface => ast::TypeDefinition::Interface(ast::InterfaceType {
                description,
                directives,
                fields: self.to_fields(ty.fields.as_deref())?,
                implements_interfaces: named_types(ty.interfaces.as_deref()),
                name,
                position,
            }),

            TypeKind::Object => ast::TypeDefinition::Object(ast::ObjectType {
                description,
                directives,
                fields: self.to_fields(ty.fields.as_deref())?,
                implements_interfaces: named_types(ty.interfaces.as_deref()),
                name,
                position,
            }),

            TypeKind::Scalar => ast::TypeDefinition::Scalar(ast::ScalarType {
                description,
                directives,
                name,
                position,
            }),

            TypeKind::Union => ast::TypeDefinition::Union(ast::UnionType {
                description,
                directives,
                name,
                position,
                types: named_types(ty.possible_types.as_deref()),
            }),

            TypeKind::List | TypeKind::NonNull | TypeKind::Unknown(_) =>
                return Err(unsupported_type_kind(ty)),
        };
        Ok(Some(definition))
    }

    /// The applied directives of `element`, following the same rules as the
    /// text printer: a reported `appliedDirectives` list wins, otherwise a
    /// `@deprecated` directive is derived from the legacy deprecation fields.
    pub fn to_directives<T: HasDirectives + ?Sized>(
        &self,
        element: &T,
    ) -> Result<Vec<ast::Directive<'static, String>>> {
        if !self.options.print_directives {
            return Ok(vec![]);
        }

        if let Some(applied_directives) = element.applied_directives() {
            return applied_directives.iter()
                .map(|applied| self.to_applied_directive(applied))
                .collect();
        }

        Ok(match element.deprecation() {
            Some(deprecation) if deprecation.is_deprecated => vec![ast::Directive {
                arguments: deprecation.deprecation_reason.iter()
                    .map(|reason| ("reason".to_string(), ast::Value::String(reason.to_owned())))
                    .collect(),
                name: "deprecated".to_string(),
                position: Pos::default(),
            }],
            _ => vec![],
        })
    }

    fn to_applied_directive(
        &self,
        applied: &AppliedDirective,
    ) -> Result<ast::Directive<'static, String>> {
        let arguments =
            applied.args.iter()
                .flatten()
                .map(|arg| -> Result<(String, ast::Value<'static, String>)> {
                    let value = match arg.value.as_deref() {
                        None => ast::Value::Null,
                        Some(raw) if self.options.raw_directive_argument_values =>
                            parse_value(&literal::coerce_argument_value(
                                self.schema,
                                &applied.name,
                                &arg.name,
                                raw,
                            ))?,
                        Some(value) => parse_value(value)?,
                    };
                    Ok((arg.name.to_owned(), value))
                })
                .collect::<Result<Vec<_>>>()?;

        Ok(ast::Directive {
            arguments,
            name: applied.name.to_owned(),
            position: Pos::default(),
        })
    }

    fn to_fields(&self, fields: Option<&[Field]>) -> Result<Vec<ast::Field<'static, String>>> {
        fields.unwrap_or_default()
            .iter()
            .map(|field| -> Result<ast::Field<'static, String>> {
                Ok(ast::Field {
                    arguments: self.to_input_values(ElementKind::FieldArgument, field.args.as_deref())?,
                    description: self.to_description(ElementKind::Field, field.description.as_deref()),
                    directives: self.to_directives(field)?,
                    field_type: to_ast_type(&field.type_ref)?,
                    name: field.name.to_owned(),
                    position: Pos::default(),
                })
            })
            .collect()
    }

    fn to_input_values(
        &self,
        kind: ElementKind,
        values: Option<&[InputValue]>,
    ) -> Result<Vec<ast::InputValue<'static, String>>> {
        values.unwrap_or_default()
            .iter()
            .map(|value| -> Result<ast::InputValue<'static, String>> {
                Ok(ast::InputValue {
                    default_value: value.default_value.as_deref().map(parse_value).transpose()?,
                    description: self.to_description(kind, value.description.as_deref()),
                    directives: self.to_directives(value)?,
                    name: value.name.to_owned(),
                    position: Pos::default(),
                    value_type: to_ast_type(&value.type_ref)?,
                })
            })
            .collect()
    }

    fn to_enum_value(&self, value: &EnumValue) -> Result<ast::EnumValue<'static, String>> {
        Ok(ast::EnumValue {
            description: self.to_description(ElementKind::EnumValue, value.description.as_deref()),
            directives: self.to_directives(value)?,
            name: value.name.to_owned(),
            position: Pos::default(),
        })
    }

    fn to_description(&self, kind: ElementKind, description: Option<&str>) -> Option<String> {
        description
            .filter(|_| kind.descriptions_enabled(self.options))
            .map(str::to_string)
    }
}

/// `LIST`/`NON_NULL` wrappers become list/non-null types around their
/// `ofType`. Everything else is a reference by name.
pub(crate) fn to_ast_type(type_ref: &TypeRef) -> Result<ast::Type<'static, String>> {
    match (&type_ref.kind, type_ref.of_type.as_deref()) {
        (TypeKind::List, Some(inner)) =>
            Ok(ast::Type::ListType(Box::new(to_ast_type(inner)?))),
        (TypeKind::NonNull, Some(inner)) =>
            Ok(ast::Type::NonNullType(Box::new(to_ast_type(inner)?))),
        (TypeKind::List | TypeKind::NonNull, None) =>
            Err(SdlRenderError::IncompleteTypeRef {
                kind: type_ref.kind.to_string(),
            }),
        _ => Ok(ast::Type::NamedType(type_ref.name.clone().unwrap_or_default())),
    }
}

/// Parses a GraphQL value literal (as introspection reports default values
/// and applied-directive arguments) into an [`ast::Value`].
pub(crate) fn parse_value(text: &str) -> Result<ast::Value<'static, String>> {
    let invalid = |message: String| SdlRenderError::InvalidLiteral {
        literal: text.to_string(),
        message,
    };

    // `graphql_parser` only parses whole documents, so the literal goes in as
    // the only argument of a directive on a placeholder scalar.
    let source = format!("scalar Literal @literal(value: {text})");
    let document =
        ast::parse_schema::<String>(&source)
            .map_err(|err| invalid(err.to_string()))?;

    let directive = match document.definitions.as_slice() {
        [ast::Definition::TypeDefinition(ast::TypeDefinition::Scalar(scalar))] =>
            match scalar.directives.as_slice() {
                [directive] => Some(directive),
                _ => None,
            },
        _ => None,
    };
    match directive.map(|directive| directive.arguments.as_slice()) {
        Some([(_, value)]) => Ok(value.into_static()),
        _ => Err(invalid("expected a single value".to_string())),
    }
}

fn named_types(type_refs: Option<&[TypeRef]>) -> Vec<String> {
    type_refs.unwrap_or_default()
        .iter()
        .filter_map(|type_ref| type_ref.innermost()?.name.clone())
        .collect()
}
