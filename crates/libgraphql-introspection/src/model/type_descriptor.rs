use crate::model::TypeKind;

/// The shape shared by top-level [`Type`](crate::model::Type)s and the
/// [`TypeRef`](crate::model::TypeRef)s used to annotate fields and arguments:
/// a [`TypeKind`] plus a name (absent only for `LIST`/`NON_NULL` wrappers).
pub trait TypeDescriptor {
    fn kind(&self) -> &TypeKind;

    fn name(&self) -> Option<&str>;

    /// Types owned by the introspection system itself (`__Schema`,
    /// `__Type`, etc) are named with a leading `__`.
    fn is_introspection(&self) -> bool {
        self.name().is_some_and(|name| name.starts_with("__"))
    }
}
