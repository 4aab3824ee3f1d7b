/// The legacy `isDeprecated`/`deprecationReason` pair reported by
/// introspection for fields, enum values, and (in newer servers) input values.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deprecation {
    pub deprecation_reason: Option<String>,
    pub is_deprecated: bool,
}
impl Deprecation {
    pub fn deprecated(reason: Option<&str>) -> Self {
        Self {
            deprecation_reason: reason.map(str::to_string),
            is_deprecated: true,
        }
    }
}
