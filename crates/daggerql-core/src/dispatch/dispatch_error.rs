use crate::engine::ExecutionError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("Failed to decode argument `{argument}` of `{function}`: {message}")]
    ArgumentDecode {
        function: String,
        argument: String,
        message: String,
    },

    #[error("`{function}` failed: {message}")]
    FunctionFailed { function: String, message: String },

    #[error("Host request failed: {0}")]
    Host(#[from] ExecutionError),

    #[error("Host sent a malformed function call: {0}")]
    MalformedCall(String),

    #[error("Failed to restore the state of `{type_name}`: {message}")]
    ParentDecode { type_name: String, message: String },

    #[error("Failed to encode the result of `{function}`: {message}")]
    ResultEncode { function: String, message: String },

    #[error("`{type_name}` has no function named `{function}`")]
    UnknownFunction { type_name: String, function: String },
}
