use crate::model::DirectiveLocation;
use crate::model::InputValue;

/// A directive declared by the schema.
///
/// How the directive is used on schema elements is described separately by
/// [`AppliedDirective`](crate::model::AppliedDirective).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Directive {
    pub args: Option<Vec<InputValue>>,
    pub description: Option<String>,
    pub is_repeatable: bool,
    pub locations: Option<Vec<DirectiveLocation>>,
    pub name: String,
}
impl Directive {
    pub fn new(
        name: impl Into<String>,
        locations: impl IntoIterator<Item = DirectiveLocation>,
    ) -> Self {
        Self {
            locations: Some(locations.into_iter().collect()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Looks up a declared argument by name.
    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.as_deref()?.iter().find(|arg| arg.name == name)
    }

    /// `@skip`, `@include`, and `@deprecated` are implied by the language and
    /// are never declared explicitly in SDL.
    ///
    /// See <https://github.com/graphql/graphql-spec/issues/632>.
    pub fn is_standard(&self) -> bool {
        matches!(self.name.as_str(), "skip" | "include" | "deprecated")
    }
}
