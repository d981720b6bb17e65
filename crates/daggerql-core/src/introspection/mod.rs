//! In-memory model of a GraphQL schema as described by an
//! [introspection](https://spec.graphql.org/October2021/#sec-Introspection)
//! document.

mod enum_value;
mod field;
mod input_value;
mod introspection_query;
mod introspection_type;
#[allow(clippy::module_inception)]
mod schema;
mod schema_parse_error;
mod type_kind;
mod type_ref;

pub use enum_value::EnumValue;
pub use field::Field;
pub use input_value::InputValue;
pub use introspection_query::INTROSPECTION_QUERY;
pub use introspection_type::Type;
pub use schema::Schema;
pub use schema_parse_error::SchemaParseError;
pub use type_kind::TypeKind;
pub use type_ref::NamedTypeRef;
pub use type_ref::TypeRef;
pub use type_ref::TypeRefError;
pub use type_ref::TypeWrapper;

/// Introspection documents use `null` rather than `[]` for child lists that
/// do not apply to a given type kind.
pub(crate) fn null_as_default<'de, D, T>(
    deserializer: D,
) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests;
