use crate::dispatch::DispatchError;
use crate::dispatch::InputArgs;
use futures::future::BoxFuture;
use serde::Serialize;
use std::sync::Arc;

pub type FunctionFuture = BoxFuture<'static, Result<serde_json::Value, DispatchError>>;

type Handler<T> = dyn Fn(T, InputArgs) -> FunctionFuture + Send + Sync;

/// One exposed function of a [`ModuleObject`](crate::dispatch::ModuleObject).
///
/// The handler receives the restored parent and the call's arguments. It is
/// expected to decode every argument before invoking anything and to encode
/// the result as JSON.
pub struct FunctionSpec<T> {
    name: String,
    args: Vec<String>,
    description: Option<String>,
    handler: Arc<Handler<T>>,
}
impl<T> FunctionSpec<T> {
    pub fn new<F>(name: &str, args: &[&str], handler: F) -> Self
    where
        F: Fn(T, InputArgs) -> FunctionFuture + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            description: None,
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn args(&self) -> &[String] {
        self.args.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn handler(&self) -> Arc<Handler<T>> {
        self.handler.clone()
    }
}
impl<T> std::fmt::Debug for FunctionSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub fn encode_result<R: Serialize>(
    function: &str,
    result: R,
) -> Result<serde_json::Value, DispatchError> {
    serde_json::to_value(result).map_err(|err| DispatchError::ResultEncode {
        function: function.to_string(),
        message: err.to_string(),
    })
}

pub fn function_failed(function: &str, error: impl std::fmt::Display) -> DispatchError {
    DispatchError::FunctionFailed {
        function: function.to_string(),
        message: error.to_string(),
    }
}
