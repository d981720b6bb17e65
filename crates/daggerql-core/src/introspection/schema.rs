use crate::introspection::SchemaParseError;
use crate::introspection::Type;
use crate::introspection::TypeKind;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaParseError>;

const TYPES_PATH: [&str; 3] = ["data", "__schema", "types"];

/// An introspected schema: every named type, keyed by name, in the order the
/// introspection document listed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    types: IndexMap<String, Type>,
}
impl Schema {
    pub fn from_types(types: impl IntoIterator<Item = Type>) -> Self {
        Self {
            types: types
                .into_iter()
                .map(|type_| (type_.name().to_string(), type_))
                .collect(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            SchemaParseError::FileRead {
                path: path.to_path_buf(),
                source: Arc::new(err),
            }
        })?;
        Self::from_json_str(content.as_str())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(json)
            .map_err(|err| SchemaParseError::Json(Arc::new(err)))?;
        Self::from_json_value(document)
    }

    /// Loads the types listed under `data.__schema.types`.
    pub fn from_json_value(document: serde_json::Value) -> Result<Self> {
        let mut cursor = &document;
        for (depth, key) in TYPES_PATH.iter().enumerate() {
            cursor = cursor.get(key).filter(|value| !value.is_null()).ok_or_else(|| {
                SchemaParseError::MissingKey {
                    path: TYPES_PATH[..=depth].join("."),
                }
            })?;
        }

        let types = Vec::<Type>::deserialize(cursor)
            .map_err(|err| SchemaParseError::InvalidTypes(Arc::new(err)))?;
        log::debug!("Loaded {} types from introspection document.", types.len());
        Ok(Self::from_types(types))
    }

    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }

    pub fn get_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// The root `Query` object, if the schema defines one.
    pub fn query_type(&self) -> Option<&Type> {
        self.get_type("Query")
            .filter(|type_| *type_.kind() == TypeKind::Object)
    }

    pub fn scalars(&self) -> impl Iterator<Item = &Type> {
        self.types_of_kind(TypeKind::Scalar)
    }

    pub fn enums(&self) -> impl Iterator<Item = &Type> {
        self.types_of_kind(TypeKind::Enum)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Type> {
        self.types_of_kind(TypeKind::InputObject)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Type> {
        self.types_of_kind(TypeKind::Object)
    }

    fn types_of_kind(&self, kind: TypeKind) -> impl Iterator<Item = &Type> {
        self.types
            .values()
            .filter(move |type_| *type_.kind() == kind)
    }
}
