//! Encodes runtime values into wire literals by consulting the declared type
//! of the argument they are sent for.

use crate::introspection::Schema;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use crate::value::Value;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("Arguments of type `{type_ref}` cannot be encoded")]
    UnsupportedArgumentShape { type_ref: String },

    #[error("Expected a value for `{expected}` but found {found}")]
    ValueMismatch { expected: String, found: String },

    #[error("Input object `{name}` is not defined in the schema")]
    UnknownInputObject { name: String },

    #[error("Input object `{input_object}` requires its `{field}` field")]
    MissingInputField { input_object: String, field: String },
}

/// The encodable shape of a declared argument type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArgumentShape {
    Boolean,
    Float,
    Int,
    String,
    /// Any scalar other than the four above. These are sent as strings.
    Id(String),
    Enum(String),
    InputObject(String),
    List(Box<ArgumentShape>),
}
impl ArgumentShape {
    /// Classifies a declared argument type. NON_NULL wrappers do not affect
    /// the shape.
    pub fn of(type_ref: &TypeRef) -> Result<Self> {
        let type_ref = type_ref.nullable();
        let unsupported = || EncodeError::UnsupportedArgumentShape {
            type_ref: type_ref.to_string(),
        };

        if *type_ref.kind() == TypeKind::List {
            let item = type_ref.of_type().ok_or_else(unsupported)?;
            return Ok(Self::List(Box::new(Self::of(item)?)));
        }

        let name = type_ref.name().ok_or_else(unsupported)?.to_string();
        match type_ref.kind() {
            TypeKind::Scalar => Ok(match name.as_str() {
                "Boolean" => Self::Boolean,
                "Float" => Self::Float,
                "Int" => Self::Int,
                "String" => Self::String,
                _ => Self::Id(name),
            }),
            TypeKind::Enum => Ok(Self::Enum(name)),
            TypeKind::InputObject => Ok(Self::InputObject(name)),
            _ => Err(unsupported()),
        }
    }
}
impl std::fmt::Display for ArgumentShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => f.write_str("Boolean"),
            Self::Float => f.write_str("Float"),
            Self::Int => f.write_str("Int"),
            Self::String => f.write_str("String"),
            Self::Id(name) | Self::Enum(name) | Self::InputObject(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// Encodes JSON values for arguments whose types are only known at run time.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'schema> {
    schema: &'schema Schema,
}
impl<'schema> Encoder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub fn encode(&self, type_ref: &TypeRef, value: &serde_json::Value) -> Result<Value> {
        let shape = ArgumentShape::of(type_ref)?;
        self.encode_shape(&shape, value)
    }

    fn encode_shape(&self, shape: &ArgumentShape, value: &serde_json::Value) -> Result<Value> {
        use serde_json::Value as Json;

        match (shape, value) {
            (ArgumentShape::Boolean, Json::Bool(value)) => Ok(Value::Boolean(*value)),
            (ArgumentShape::Int, Json::Number(number)) if number.is_i64() => {
                Ok(Value::Int(number.as_i64().unwrap_or_default()))
            },
            (ArgumentShape::Float, Json::Number(number)) => match number.as_f64() {
                Some(float) => Ok(Value::Float(float)),
                None => Err(mismatch(shape, value)),
            },
            (ArgumentShape::String, Json::String(string))
            | (ArgumentShape::Id(_), Json::String(string))
            | (ArgumentShape::Enum(_), Json::String(string)) => {
                Ok(Value::String(string.clone()))
            },
            (ArgumentShape::InputObject(name), Json::Object(properties)) => {
                self.encode_input_object(name, properties)
            },
            (ArgumentShape::List(item_shape), Json::Array(items)) => items
                .iter()
                .map(|item| self.encode_shape(item_shape, item))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            _ => Err(mismatch(shape, value)),
        }
    }

    fn encode_input_object(
        &self,
        name: &str,
        properties: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Value> {
        let input_object = self
            .schema
            .get_type(name)
            .filter(|type_| *type_.kind() == TypeKind::InputObject)
            .ok_or_else(|| EncodeError::UnknownInputObject {
                name: name.to_string(),
            })?;

        let mut encoded = IndexMap::new();
        for field in input_object.input_fields() {
            match properties.get(field.name()).filter(|value| !value.is_null()) {
                Some(value) => {
                    encoded.insert(
                        field.name().to_string(),
                        self.encode(field.type_ref(), value)?,
                    );
                },
                None if field.type_ref().is_optional() => (),
                None => return Err(EncodeError::MissingInputField {
                    input_object: name.to_string(),
                    field: field.name().to_string(),
                }),
            }
        }
        Ok(Value::Object(encoded))
    }
}

fn mismatch(shape: &ArgumentShape, value: &serde_json::Value) -> EncodeError {
    let found = match value {
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Null => "null",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::Object(_) => "an object",
        serde_json::Value::String(_) => "a string",
    };
    EncodeError::ValueMismatch {
        expected: shape.to_string(),
        found: found.to_string(),
    }
}
