/// Which function the host wants run, on what state, with which arguments.
///
/// An empty `parent_name` means the host is asking for the module's
/// description rather than invoking anything.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCallContext {
    pub function_name: String,
    pub parent_name: String,
    pub parent: serde_json::Value,
    pub input_args: Vec<(String, serde_json::Value)>,
}
impl FunctionCallContext {
    pub fn registration() -> Self {
        Self {
            function_name: String::new(),
            parent_name: String::new(),
            parent: serde_json::Value::Null,
            input_args: vec![],
        }
    }

    pub fn invocation(
        parent_name: impl Into<String>,
        function_name: impl Into<String>,
        parent: serde_json::Value,
        input_args: Vec<(String, serde_json::Value)>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            parent_name: parent_name.into(),
            parent,
            input_args,
        }
    }

    pub fn is_registration(&self) -> bool {
        self.parent_name.is_empty()
    }
}
