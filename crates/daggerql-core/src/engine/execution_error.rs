use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionError {
    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Response data has no `{field}` field")]
    MissingField { field: String },

    #[error("Argument `{argument}` is NaN or infinite and cannot be sent")]
    NonFiniteFloat { argument: String },

    #[error("Query failed: {}", messages.join("; "))]
    Query { messages: Vec<String> },

    #[error("Endpoint responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request could not be sent: {0}")]
    Transport(String),
}
