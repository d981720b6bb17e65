use crate::introspection::null_as_default;
use crate::introspection::EnumValue;
use crate::introspection::Field;
use crate::introspection::InputValue;
use crate::introspection::TypeKind;

/// A named type defined by the schema.
///
/// Only the child list that applies to the type's kind is populated:
/// `fields` for objects, `input_fields` for input objects and `enum_values`
/// for enums.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub(super) kind: TypeKind,
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) input_fields: Vec<InputValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) enum_values: Vec<EnumValue>,
}
impl Type {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            fields: vec![],
            input_fields: vec![],
            enum_values: vec![],
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_input_field(mut self, input_field: InputValue) -> Self {
        self.input_fields.push(input_field);
        self
    }

    pub fn with_enum_value(mut self, enum_value: EnumValue) -> Self {
        self.enum_values.push(enum_value);
        self
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Fields of an object type. Empty for every other kind.
    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    /// Looks up a field by its declared name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Fields of an input object type, in declaration order.
    pub fn input_fields(&self) -> &[InputValue] {
        self.input_fields.as_slice()
    }

    /// Members of an enum type, in declaration order.
    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_slice()
    }

    /// Names starting with `__` are reserved for the introspection system.
    pub fn is_introspection_type(&self) -> bool {
        self.name.starts_with("__")
    }

    /// `String`, `Int`, `Float`, `Boolean` and `ID`.
    pub fn is_builtin_scalar(&self) -> bool {
        self.kind == TypeKind::Scalar
            && matches!(self.name.as_str(), "Boolean" | "Float" | "ID" | "Int" | "String")
    }

    /// Identifier scalars are the scalars whose name ends in `ID`
    /// (`ContainerID`, `DirectoryID`, the built-in `ID`, ...).
    pub fn is_id(&self) -> bool {
        self.kind == TypeKind::Scalar && self.name.ends_with("ID")
    }
}
