use crate::model::AppliedDirective;
use crate::model::Deprecation;
use crate::model::HasDirectives;

/// One value of an enum type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumValue {
    pub applied_directives: Option<Vec<AppliedDirective>>,

    #[serde(flatten)]
    pub deprecation: Deprecation,

    pub description: Option<String>,
    pub name: String,
}
impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
impl HasDirectives for EnumValue {
    fn applied_directives(&self) -> Option<&[AppliedDirective]> {
        self.applied_directives.as_deref()
    }

    fn deprecation(&self) -> Option<&Deprecation> {
        Some(&self.deprecation)
    }
}
