use crate::model::TypeDescriptor;
use crate::model::TypeKind;
use inherent::inherent;

/// A reference to a type from a field, argument, input field, interface list,
/// or union member list.
///
/// References are by name only. `LIST` and `NON_NULL` wrappers own the
/// reference they wrap through `of_type`, so `[Int!]!` is the chain
/// `NON_NULL -> LIST -> NON_NULL -> SCALAR("Int")`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}
impl TypeRef {
    /// A reference to a named (non-wrapper) type.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Follow `of_type` through any `LIST`/`NON_NULL` wrappers and return the
    /// named type at the end of the chain (if the chain has one).
    pub fn innermost(&self) -> Option<&TypeRef> {
        let mut current = self;
        while current.kind.is_wrapper() {
            current = current.of_type.as_deref()?;
        }
        Some(current)
    }
}

#[inherent]
impl TypeDescriptor for TypeRef {
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_introspection(&self) -> bool;
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, self.of_type.as_deref()) {
            (TypeKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (TypeKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            (TypeKind::List, None) | (TypeKind::NonNull, None) => {
                log::warn!(
                    "`{}` type reference has no `ofType` to wrap.",
                    self.kind,
                );
                if self.kind == TypeKind::List {
                    f.write_str("[]")
                } else {
                    f.write_str("!")
                }
            },
            _ => f.write_str(self.name.as_deref().unwrap_or_default()),
        }
    }
}
