/// The `__TypeKind` reported for a type by introspection.
///
/// Kinds are deserialized from their introspection spelling (e.g.
/// `"INPUT_OBJECT"`). A spelling this crate doesn't recognize is kept as
/// [`TypeKind::Unknown`] so that loading never fails on it; rendering such a
/// type as a top-level definition is an error instead.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    #[default]
    Object,
    Scalar,
    Union,
    Unknown(String),
}
impl TypeKind {
    /// The introspection spelling of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
            Self::Unknown(raw) => raw.as_str(),
        }
    }

    /// `LIST` and `NON_NULL` only ever wrap another type reference.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::convert::From<&str> for TypeKind {
    fn from(value: &str) -> Self {
        match value {
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            "OBJECT" => Self::Object,
            "SCALAR" => Self::Scalar,
            "UNION" => Self::Union,
            other => Self::Unknown(other.to_string()),
        }
    }
}
impl std::convert::From<String> for TypeKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
impl std::convert::From<TypeKind> for String {
    fn from(value: TypeKind) -> Self {
        value.as_str().to_string()
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
