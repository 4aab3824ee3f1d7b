//! Plain data types mirroring the introspection schema (`__Schema`,
//! `__Type`, `__Field`, ...). Everything here is deserializable straight from
//! an introspection JSON response.

mod applied_directive;
mod deprecation;
mod directive;
mod directive_location;
mod enum_value;
mod field;
mod graphql_type;
mod input_value;
mod schema;
mod type_descriptor;
mod type_kind;
mod type_ref;

pub use applied_directive::AppliedDirective;
pub use applied_directive::AppliedDirectiveArgument;
pub use applied_directive::HasDirectives;
pub use deprecation::Deprecation;
pub use directive::Directive;
pub use directive_location::DirectiveLocation;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::Type;
pub use input_value::InputValue;
pub use schema::RootOperationTypeRef;
pub use schema::Schema;
pub use type_descriptor::TypeDescriptor;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
