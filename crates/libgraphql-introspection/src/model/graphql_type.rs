use crate::model::AppliedDirective;
use crate::model::EnumValue;
use crate::model::Field;
use crate::model::HasDirectives;
use crate::model::InputValue;
use crate::model::TypeDescriptor;
use crate::model::TypeKind;
use crate::model::TypeRef;
use inherent::inherent;

/// A top-level type reported in the `types` list of `__Schema`.
///
/// Which of the collections are populated depends on `kind`: `fields` and
/// `interfaces` for objects and interfaces, `input_fields` for input
/// objects, `enum_values` for enums, and `possible_types` for unions. Every
/// collection may be absent, but `kind` is required: a type whose kind is
/// missing fails to load rather than being guessed at.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub applied_directives: Option<Vec<AppliedDirective>>,
    pub description: Option<String>,
    pub enum_values: Option<Vec<EnumValue>>,
    pub fields: Option<Vec<Field>>,
    pub input_fields: Option<Vec<InputValue>>,
    pub interfaces: Option<Vec<TypeRef>>,
    pub kind: TypeKind,

    #[serde(default)]
    pub name: String,
    pub possible_types: Option<Vec<TypeRef>>,
}
impl Type {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ..Default::default()
        }
    }
}

#[inherent]
impl TypeDescriptor for Type {
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    pub fn is_introspection(&self) -> bool;
}

impl HasDirectives for Type {
    fn applied_directives(&self) -> Option<&[AppliedDirective]> {
        self.applied_directives.as_deref()
    }
}
