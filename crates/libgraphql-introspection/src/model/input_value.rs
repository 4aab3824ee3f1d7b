use crate::model::AppliedDirective;
use crate::model::Deprecation;
use crate::model::HasDirectives;
use crate::model::TypeRef;

/// A field argument, directive argument, or input-object field.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputValue {
    pub applied_directives: Option<Vec<AppliedDirective>>,

    /// A GraphQL-formatted literal (already escaped), emitted verbatim.
    pub default_value: Option<String>,

    #[serde(flatten)]
    pub deprecation: Deprecation,

    pub description: Option<String>,
    pub name: String,

    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}
impl InputValue {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            ..Default::default()
        }
    }

    /// Whether this input value can be printed inside a single-line argument
    /// list: it has no description and carries no directives (neither
    /// applied ones nor a legacy deprecation).
    pub(crate) fn is_plain(&self) -> bool {
        let has_directives = match &self.applied_directives {
            Some(applied_directives) => !applied_directives.is_empty(),
            None => self.deprecation.is_deprecated,
        };
        self.description.is_none() && !has_directives
    }
}
impl HasDirectives for InputValue {
    fn applied_directives(&self) -> Option<&[AppliedDirective]> {
        self.applied_directives.as_deref()
    }

    fn deprecation(&self) -> Option<&Deprecation> {
        Some(&self.deprecation)
    }
}
