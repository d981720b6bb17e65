use crate::dispatch::DispatchError;
use serde::de::DeserializeOwned;

/// The raw JSON arguments of one call, in the order the host sent them.
#[derive(Clone, Debug, PartialEq)]
pub struct InputArgs {
    function: String,
    values: Vec<(String, serde_json::Value)>,
}
impl InputArgs {
    pub fn new(function: impl Into<String>, values: Vec<(String, serde_json::Value)>) -> Self {
        Self {
            function: function.into(),
            values,
        }
    }

    pub fn function(&self) -> &str {
        self.function.as_str()
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values
            .iter()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, value)| value)
    }

    /// Decodes the argument named `name`. An argument the host did not send
    /// decodes as `null`, so it is accepted only by parameter types that
    /// accept `null` (such as `Option<T>`).
    pub fn decode<T: DeserializeOwned>(&self, name: &str) -> Result<T, DispatchError> {
        let decode_error = |message: String| DispatchError::ArgumentDecode {
            function: self.function.clone(),
            argument: name.to_string(),
            message,
        };

        match self.get(name) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|err| decode_error(err.to_string())),
            None => serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| decode_error("missing required argument".to_string())),
        }
    }
}
