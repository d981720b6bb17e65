use daggerql_core::encode::EncodeError;
use daggerql_core::introspection::TypeKind;
use daggerql_core::introspection::TypeRefError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CodegenError {
    #[error("`{runtime_path}` is not a valid runtime path: {message}")]
    InvalidRuntimePath { runtime_path: String, message: String },

    #[error("Generated bindings failed to parse as Rust: {0}")]
    InvalidOutput(String),

    #[error("Malformed type reference on `{type_name}.{field}`: {source}")]
    MalformedTypeRef {
        type_name: String,
        field: String,
        source: TypeRefError,
    },

    #[error(
        "Argument `{argument}` of `{type_name}.{field}` cannot be encoded: {source}"
    )]
    UnsupportedArgumentShape {
        type_name: String,
        field: String,
        argument: String,
        source: EncodeError,
    },

    #[error("`{type_name}.{field}` returns `{type_ref}`, which has no binding")]
    UnsupportedReturnShape {
        type_name: String,
        field: String,
        type_ref: String,
    },

    #[error("`{type_name}` is a {kind} type, which has no binding")]
    UnsupportedTypeKind { type_name: String, kind: TypeKind },

    #[error("`{name}` is referenced but not defined in the schema")]
    UnknownType { name: String },
}
