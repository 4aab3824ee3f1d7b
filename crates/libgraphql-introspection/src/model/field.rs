use crate::model::AppliedDirective;
use crate::model::Deprecation;
use crate::model::HasDirectives;
use crate::model::InputValue;
use crate::model::TypeRef;

/// A field of an object or interface type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    pub applied_directives: Option<Vec<AppliedDirective>>,
    pub args: Option<Vec<InputValue>>,

    #[serde(flatten)]
    pub deprecation: Deprecation,

    pub description: Option<String>,
    pub name: String,

    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}
impl Field {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            ..Default::default()
        }
    }
}
impl HasDirectives for Field {
    fn applied_directives(&self) -> Option<&[AppliedDirective]> {
        self.applied_directives.as_deref()
    }

    fn deprecation(&self) -> Option<&Deprecation> {
        Some(&self.deprecation)
    }
}
