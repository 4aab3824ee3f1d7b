/// A location at which a directive may be applied, as reported by the
/// `locations` list of a `__Directive`.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations).
/// Unrecognized spellings are kept verbatim in [`DirectiveLocation::Unknown`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    Unknown(String),
    VariableDefinition,
}
impl DirectiveLocation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::Unknown(raw) => raw.as_str(),
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }
}
impl std::convert::From<&str> for DirectiveLocation {
    fn from(value: &str) -> Self {
        match value {
            "ARGUMENT_DEFINITION" => Self::ArgumentDefinition,
            "ENUM" => Self::Enum,
            "ENUM_VALUE" => Self::EnumValue,
            "FIELD" => Self::Field,
            "FIELD_DEFINITION" => Self::FieldDefinition,
            "FRAGMENT_DEFINITION" => Self::FragmentDefinition,
            "FRAGMENT_SPREAD" => Self::FragmentSpread,
            "INLINE_FRAGMENT" => Self::InlineFragment,
            "INPUT_FIELD_DEFINITION" => Self::InputFieldDefinition,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "MUTATION" => Self::Mutation,
            "OBJECT" => Self::Object,
            "QUERY" => Self::Query,
            "SCALAR" => Self::Scalar,
            "SCHEMA" => Self::Schema,
            "SUBSCRIPTION" => Self::Subscription,
            "UNION" => Self::Union,
            "VARIABLE_DEFINITION" => Self::VariableDefinition,
            other => Self::Unknown(other.to_string()),
        }
    }
}
impl std::convert::From<String> for DirectiveLocation {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
impl std::convert::From<DirectiveLocation> for String {
    fn from(value: DirectiveLocation) -> Self {
        value.as_str().to_string()
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
