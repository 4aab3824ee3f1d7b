/// Errors produced while turning an introspection JSON response into a
/// [`Schema`](crate::model::Schema).
#[derive(Debug, thiserror::Error)]
pub enum IntrospectionLoadError {
    #[error("Invalid introspection JSON at `{path}`: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("The introspection response doesn't contain a `__schema` object")]
    MissingSchema,

    #[error(
        "The introspection response reported errors instead of a schema: {}",
        .messages.join("; ")
    )]
    ServerErrors {
        messages: Vec<String>,
    },
}
