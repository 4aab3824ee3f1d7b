use crate::model::Deprecation;

/// A directive applied to some element of the schema (as opposed to a
/// [`Directive`](crate::model::Directive) declaration).
///
/// Applied directives are not part of the official introspection schema yet;
/// servers that support them expose an `appliedDirectives` list on schema
/// elements.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppliedDirective {
    pub args: Option<Vec<AppliedDirectiveArgument>>,
    pub name: String,
}
impl AppliedDirective {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            args: None,
            name: name.into(),
        }
    }

    /// Append an argument. `value` is a GraphQL literal (e.g. `"\"text\""` or
    /// `42`) unless the printer is configured to treat values as raw.
    pub fn with_arg(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.args.get_or_insert_with(Vec::new).push(AppliedDirectiveArgument {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }
}

/// A single `name: value` pair of an [`AppliedDirective`].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppliedDirectiveArgument {
    pub name: String,
    pub value: Option<String>,
}

/// Implemented by every schema element that can carry directives.
///
/// `applied_directives()` distinguishes an absent list (`None`, the server
/// didn't report applied directives) from an empty one. Elements that also
/// carry the legacy deprecation pair expose it through `deprecation()`.
pub trait HasDirectives {
    fn applied_directives(&self) -> Option<&[AppliedDirective]>;

    fn deprecation(&self) -> Option<&Deprecation> {
        None
    }
}
