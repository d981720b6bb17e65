use crate::engine::ExecutionError;
use crate::engine::GraphQLClient;
use std::sync::Mutex;
use std::sync::PoisonError;

type Responder = dyn Fn(&str) -> Result<serde_json::Value, ExecutionError> + Send + Sync;

/// A [`GraphQLClient`] that records every request document and answers it
/// with a canned response.
pub struct MockClient {
    requests: Mutex<Vec<String>>,
    responder: Box<Responder>,
}
impl MockClient {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> serde_json::Value + Send + Sync + 'static,
    {
        Self::fallible(move |query| Ok(responder(query)))
    }

    pub fn fallible<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<serde_json::Value, ExecutionError> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(vec![]),
            responder: Box::new(responder),
        }
    }

    /// Answers every request with `{"data": data}`.
    pub fn with_data(data: serde_json::Value) -> Self {
        Self::new(move |_| serde_json::json!({ "data": data.clone() }))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
impl std::fmt::Debug for MockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockClient")
            .field("requests", &self.requests())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl GraphQLClient for MockClient {
    async fn request(&self, query: &str) -> Result<serde_json::Value, ExecutionError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.to_string());
        (self.responder)(query)
    }
}
