use crate::IntrospectionLoadError;
use crate::model::Schema;
use serde::de::DeserializeOwned;

type Result<T> = std::result::Result<T, IntrospectionLoadError>;

/// The JSON document returned for an introspection query.
///
/// Both the full GraphQL response envelope (`{"data": {"__schema": ...}}`)
/// and a bare `{"__schema": ...}` object are accepted.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct IntrospectionResponse {
    pub data: Option<IntrospectionData>,
    pub errors: Option<Vec<GraphQLError>>,

    #[serde(rename = "__schema")]
    pub schema: Option<Schema>,
}
impl IntrospectionResponse {
    pub fn from_json_str(json: &str) -> Result<Self> {
        deserialize_with_path(&mut serde_json::Deserializer::from_str(json))
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        deserialize_with_path(&mut serde_json::Deserializer::from_slice(json))
    }

    /// Extracts the [`Schema`] from whichever envelope carried it.
    ///
    /// Errors reported by the server are only surfaced when no schema came
    /// back alongside them.
    pub fn into_schema(self) -> Result<Schema> {
        let schema =
            self.data
                .and_then(|data| data.schema)
                .or(self.schema);

        match (schema, self.errors) {
            (Some(schema), _) => Ok(schema),
            (None, Some(errors)) if !errors.is_empty() =>
                Err(IntrospectionLoadError::ServerErrors {
                    messages: errors.into_iter()
                        .map(|error| error.message.unwrap_or_default())
                        .collect(),
                }),
            (None, _) => Err(IntrospectionLoadError::MissingSchema),
        }
    }
}

/// The `data` member of an [`IntrospectionResponse`].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: Option<Schema>,
}

/// An entry of the `errors` member of an [`IntrospectionResponse`].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GraphQLError {
    pub message: Option<String>,
}

/// Parses an introspection response (either envelope form) and returns its
/// [`Schema`].
pub fn schema_from_json_str(json: &str) -> Result<Schema> {
    IntrospectionResponse::from_json_str(json)?.into_schema()
}

/// Byte-slice flavor of [`schema_from_json_str`].
pub fn schema_from_json_slice(json: &[u8]) -> Result<Schema> {
    IntrospectionResponse::from_json_slice(json)?.into_schema()
}

fn deserialize_with_path<'de, R, T>(
    deserializer: &mut serde_json::Deserializer<R>,
) -> Result<T>
where
    R: serde_json::de::Read<'de>,
    T: DeserializeOwned,
{
    let value = serde_path_to_error::deserialize(&mut *deserializer).map_err(|err| {
        let path = err.path().to_string();
        IntrospectionLoadError::Json {
            path,
            source: err.into_inner(),
        }
    })?;

    // Only whitespace may follow the top-level value.
    deserializer.end().map_err(|source| IntrospectionLoadError::Json {
        path: ".".to_string(),
        source,
    })?;
    Ok(value)
}
