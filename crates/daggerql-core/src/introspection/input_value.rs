use crate::introspection::TypeRef;

/// An argument of a field, or a field of an input object.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(rename = "type")]
    pub(super) type_ref: TypeRef,
    #[serde(default)]
    pub(super) default_value: Option<String>,
}
impl InputValue {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
            default_value: None,
        }
    }

    /// The argument or input field name as declared.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// The declared type, wrappers included.
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// The default as a GraphQL literal, exactly as introspection reports it.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Required means the declared type is NON_NULL. A default value does not
    /// make an argument optional here.
    pub fn is_required(&self) -> bool {
        !self.type_ref.is_optional()
    }
}
