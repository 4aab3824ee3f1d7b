use crate::model::Directive;
use crate::model::Type;
use std::cmp::Ordering;
use std::sync::Arc;

/// Decides the order in which directive declarations are printed.
///
/// Comparators may capture state (a priority table, say) and are shared, so
/// cloning a [`PrintOptions`] is cheap.
pub type DirectiveComparator = Arc<dyn Fn(&Directive, &Directive) -> Ordering + Send + Sync>;

/// Decides the order in which top-level types are printed.
pub type TypeComparator = Arc<dyn Fn(&Type, &Type) -> Ordering + Send + Sync>;

/// Output options for [`SdlPrinter`](crate::sdl::SdlPrinter).
///
/// The defaults print every description and directive, omit the built-in
/// scalars, sort directives and types by name (case-insensitively), and
/// indent by 2 spaces.
#[derive(Clone)]
pub struct PrintOptions {
    /// Print `#`-comments for `argument` descriptions of fields.
    pub argument_descriptions: bool,

    /// Print `#`-comments for directive declarations and their arguments.
    pub directive_descriptions: bool,

    /// Order of directive declarations. `None` keeps the order in which the
    /// schema lists them.
    pub directive_order: Option<DirectiveComparator>,

    /// Print `#`-comments for enum values.
    pub enum_value_descriptions: bool,

    /// Print `#`-comments for fields and input fields.
    pub field_descriptions: bool,

    /// Number of spaces per indentation level.
    pub indent_size: usize,

    /// Omit `String`, `Boolean`, `Int`, `Float`, and `ID` from the output.
    ///
    /// See [Scalars](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars).
    pub omit_builtin_scalars: bool,

    /// Global switch for all description comments. When `false` the
    /// per-category switches are ignored.
    pub print_descriptions: bool,

    /// Print applied directives (and the `@deprecated` fallback derived from
    /// legacy `isDeprecated`/`deprecationReason` fields).
    pub print_directives: bool,

    /// Treat applied-directive argument values as raw values that still need
    /// to be encoded as GraphQL literals, rather than as ready-made literals.
    pub raw_directive_argument_values: bool,

    /// Print `#`-comments for types and for the schema itself.
    pub type_descriptions: bool,

    /// Order of top-level types. `None` keeps the order in which the schema
    /// lists them.
    pub type_order: Option<TypeComparator>,
}
impl PrintOptions {
    /// Disables every kind of description comment.
    pub fn without_descriptions(mut self) -> Self {
        self.print_descriptions = false;
        self
    }

    /// Disables applied directives and the `@deprecated` fallback.
    pub fn without_directives(mut self) -> Self {
        self.print_directives = false;
        self
    }

    /// Keeps both directives and types in the order the schema lists them.
    pub fn unsorted(mut self) -> Self {
        self.directive_order = None;
        self.type_order = None;
        self
    }
}
impl std::default::Default for PrintOptions {
    fn default() -> Self {
        let directive_order: DirectiveComparator = Arc::new(compare_directives_by_name);
        let type_order: TypeComparator = Arc::new(compare_types_by_name);
        Self {
            argument_descriptions: true,
            directive_descriptions: true,
            directive_order: Some(directive_order),
            enum_value_descriptions: true,
            field_descriptions: true,
            indent_size: 2,
            omit_builtin_scalars: true,
            print_descriptions: true,
            print_directives: true,
            raw_directive_argument_values: false,
            type_descriptions: true,
            type_order: Some(type_order),
        }
    }
}
impl std::fmt::Debug for PrintOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintOptions")
            .field("argument_descriptions", &self.argument_descriptions)
            .field("directive_descriptions", &self.directive_descriptions)
            .field("directive_order", &self.directive_order.as_ref().map(|_| "<fn>"))
            .field("enum_value_descriptions", &self.enum_value_descriptions)
            .field("field_descriptions", &self.field_descriptions)
            .field("indent_size", &self.indent_size)
            .field("omit_builtin_scalars", &self.omit_builtin_scalars)
            .field("print_descriptions", &self.print_descriptions)
            .field("print_directives", &self.print_directives)
            .field("raw_directive_argument_values", &self.raw_directive_argument_values)
            .field("type_descriptions", &self.type_descriptions)
            .field("type_order", &self.type_order.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Compares two names case-insensitively, falling back to an ordinal
/// comparison so that names differing only by case still order
/// deterministically.
pub fn compare_names_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// The default [`DirectiveComparator`].
pub fn compare_directives_by_name(a: &Directive, b: &Directive) -> Ordering {
    compare_names_ignore_case(&a.name, &b.name)
}

/// The default [`TypeComparator`].
pub fn compare_types_by_name(a: &Type, b: &Type) -> Ordering {
    compare_names_ignore_case(&a.name, &b.name)
}
