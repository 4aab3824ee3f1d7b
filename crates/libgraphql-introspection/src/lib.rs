//! Turns the result of a GraphQL introspection query into Schema Definition
//! Language (SDL) text.
//!
//! ```
//! use libgraphql_introspection::sdl;
//!
//! let schema = libgraphql_introspection::schema_from_json_str(r#"{
//!     "data": {
//!         "__schema": {
//!             "queryType": { "name": "Query" },
//!             "types": [{
//!                 "kind": "OBJECT",
//!                 "name": "Query",
//!                 "fields": [{
//!                     "name": "hello",
//!                     "type": { "kind": "SCALAR", "name": "String" }
//!                 }]
//!             }]
//!         }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(sdl::print_schema(&schema).unwrap(), concat!(
//!     "schema {\n",
//!     "  query: Query\n",
//!     "}\n",
//!     "\n",
//!     "type Query {\n",
//!     "  hello: String\n",
//!     "}\n",
//! ));
//! ```

mod introspection_load_error;
mod introspection_query;
mod introspection_response;
pub mod model;
pub mod sdl;

pub use introspection_load_error::IntrospectionLoadError;
pub use introspection_query::IntrospectionQueryVariant;
pub use introspection_response::GraphQLError;
pub use introspection_response::IntrospectionData;
pub use introspection_response::IntrospectionResponse;
pub use introspection_response::schema_from_json_slice;
pub use introspection_response::schema_from_json_str;
