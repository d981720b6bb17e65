use crate::introspection::null_as_default;
use crate::introspection::InputValue;
use crate::introspection::TypeRef;

/// Represents a field defined on an object type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(rename = "type")]
    pub(super) type_ref: TypeRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) args: Vec<InputValue>,
    #[serde(default)]
    pub(super) is_deprecated: bool,
    #[serde(default)]
    pub(super) deprecation_reason: Option<String>,
}
impl Field {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
            args: vec![],
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    /// Appends an argument. Declaration order is kept.
    pub fn with_arg(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `Some(reason)` marks the field deprecated.
    pub fn with_deprecation(mut self, reason: Option<String>) -> Self {
        self.is_deprecated = true;
        self.deprecation_reason = reason;
        self
    }

    /// The field name as declared, e.g. `withExec`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// The return type of this field.
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// All arguments in declaration order.
    pub fn args(&self) -> &[InputValue] {
        self.args.as_slice()
    }

    /// Arguments whose type is NON_NULL, in declaration order.
    pub fn required_args(&self) -> impl Iterator<Item = &InputValue> {
        self.args.iter().filter(|arg| arg.is_required())
    }

    /// Arguments that may be omitted, in declaration order.
    pub fn optional_args(&self) -> impl Iterator<Item = &InputValue> {
        self.args.iter().filter(|arg| !arg.is_required())
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    /// The reason given by the schema, if the field is deprecated and one was
    /// provided.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }
}
