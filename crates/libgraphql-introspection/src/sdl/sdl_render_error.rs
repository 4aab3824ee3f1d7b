/// Errors that abort rendering a schema as SDL (or converting it into a
/// `graphql_parser` document).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SdlRenderError {
    /// A `LIST`/`NON_NULL` type reference without the `ofType` it wraps.
    /// Only reported by [`to_document`](crate::sdl::to_document); the text
    /// printer renders such references as `[]`/`!` instead.
    #[error("`{kind}` type reference has no `ofType` to wrap")]
    IncompleteTypeRef {
        kind: String,
    },

    /// A default value or applied-directive argument value that isn't a
    /// GraphQL value literal.
    #[error("`{literal}` is not a valid GraphQL value: {message}")]
    InvalidLiteral {
        literal: String,
        message: String,
    },

    /// A directive declared with a location `graphql_parser` can't represent.
    #[error("Unsupported location `{location}` on directive `@{directive_name}`")]
    UnsupportedDirectiveLocation {
        directive_name: String,
        location: String,
    },

    /// A top-level type reported a kind that can't be declared in SDL: one of
    /// the `LIST`/`NON_NULL` wrappers or a kind this crate doesn't know.
    /// The error message is the raw kind value.
    #[error("{kind}")]
    UnsupportedTypeKind {
        kind: String,
        type_name: String,
    },
}
