use crate::model::AppliedDirective;
use crate::model::Directive;
use crate::model::HasDirectives;
use crate::model::Type;

/// The `__schema` object of an introspection response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    pub applied_directives: Option<Vec<AppliedDirective>>,
    pub description: Option<String>,
    pub directives: Option<Vec<Directive>>,
    pub mutation_type: Option<RootOperationTypeRef>,
    pub query_type: Option<RootOperationTypeRef>,
    pub subscription_type: Option<RootOperationTypeRef>,
    pub types: Option<Vec<Type>>,
}
impl Schema {
    /// Looks up a declared directive by name.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.as_deref()?.iter().find(|directive| directive.name == name)
    }

    /// Looks up a type by name.
    pub fn type_by_name(&self, name: &str) -> Option<&Type> {
        self.types.as_deref()?.iter().find(|ty| ty.name == name)
    }

    /// Whether any of the query, mutation, or subscription root types is set.
    pub fn has_root_operation_types(&self) -> bool {
        self.query_type.is_some()
            || self.mutation_type.is_some()
            || self.subscription_type.is_some()
    }
}
impl HasDirectives for Schema {
    fn applied_directives(&self) -> Option<&[AppliedDirective]> {
        self.applied_directives.as_deref()
    }
}

/// The `{ name }` object used for `queryType`, `mutationType`, and
/// `subscriptionType`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RootOperationTypeRef {
    pub name: String,
}
impl RootOperationTypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
