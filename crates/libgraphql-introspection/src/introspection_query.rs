//! Texts of the introspection queries whose responses this crate renders.
//!
//! See [Introspection](https://spec.graphql.org/October2021/#sec-Introspection).

macro_rules! type_ref_fragment {
    () => {
"fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"
    };
}

macro_rules! applied_directive_fragment {
    () => {
"fragment Info on __AppliedDirective {
  name
  args {
    name
    value
  }
}
"
    };
}

const CLASSIC: &str = concat!(
"query IntrospectionQuery {
  __schema {
    description
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}
fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}
fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}
",
    type_ref_fragment!(),
);

const CLASSIC_DRAFT: &str = concat!(
"query IntrospectionQuery {
  __schema {
    description
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args(includeDeprecated: true) {
        ...InputValue
      }
    }
  }
}
fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args(includeDeprecated: true) {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields(includeDeprecated: true) {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}
fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
  isDeprecated
  deprecationReason
}
",
    type_ref_fragment!(),
);

const MODERN: &str = concat!(
"query IntrospectionQuery {
  __schema {
    description
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
    appliedDirectives { ...Info }
  }
}
fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
    appliedDirectives { ...Info }
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
  appliedDirectives { ...Info }
}
fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
  appliedDirectives { ...Info }
}
",
    applied_directive_fragment!(),
    type_ref_fragment!(),
);

const MODERN_DRAFT: &str = concat!(
"query IntrospectionQuery {
  __schema {
    description
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args(includeDeprecated: true) {
        ...InputValue
      }
    }
    appliedDirectives { ...Info }
  }
}
fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args(includeDeprecated: true) {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
    appliedDirectives { ...Info }
  }
  inputFields(includeDeprecated: true) {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
  appliedDirectives { ...Info }
}
fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
  isDeprecated
  deprecationReason
  appliedDirectives { ...Info }
}
",
    applied_directive_fragment!(),
    type_ref_fragment!(),
);

/// Which introspection query to send.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum IntrospectionQueryVariant {
    /// Standard introspection. Deprecation is only reported through
    /// `isDeprecated`/`deprecationReason` on fields and enum values.
    #[default]
    Classic,

    /// [`Classic`](Self::Classic) plus deprecated arguments and input fields
    /// (<https://github.com/graphql/graphql-spec/pull/805>).
    ClassicDraft,

    /// [`Classic`](Self::Classic) plus `appliedDirectives` on the schema,
    /// types, fields, and input values.
    Modern,

    /// [`Modern`](Self::Modern) plus deprecated arguments and input fields.
    ModernDraft,
}
impl IntrospectionQueryVariant {
    pub fn query_text(&self) -> &'static str {
        match self {
            Self::Classic => CLASSIC,
            Self::ClassicDraft => CLASSIC_DRAFT,
            Self::Modern => MODERN,
            Self::ModernDraft => MODERN_DRAFT,
        }
    }
}
