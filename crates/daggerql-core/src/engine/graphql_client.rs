use crate::engine::ExecutionError;
use std::sync::Arc;

/// Anything that can answer a GraphQL request document with the raw JSON
/// response body (`{"data": ..., "errors": ...}`).
#[async_trait::async_trait]
pub trait GraphQLClient: std::fmt::Debug + Send + Sync {
    async fn request(&self, query: &str) -> Result<serde_json::Value, ExecutionError>;
}

pub type DynClient = Arc<dyn GraphQLClient>;
