use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum SchemaParseError {
    #[error("Failure while trying to read the introspection file `{path}`: {source}")]
    FileRead {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    #[error("Introspection document is not valid JSON: {0}")]
    Json(Arc<serde_json::Error>),

    #[error("Introspection document has no `{path}` key")]
    MissingKey { path: String },

    #[error("Failed to decode the types listed at `data.__schema.types`: {0}")]
    InvalidTypes(Arc<serde_json::Error>),
}
