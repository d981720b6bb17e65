use crate::dispatch::DispatchError;
use crate::dispatch::FunctionCallContext;
use crate::module::ModuleDef;

/// The process that hands this module its function call and collects the
/// result.
#[async_trait::async_trait]
pub trait FunctionHost: Send + Sync {
    async fn current_call(&self) -> Result<FunctionCallContext, DispatchError>;

    /// Registers `module` and returns the JSON to report as the result of the
    /// registration call (the module's id).
    async fn register_module(&self, module: &ModuleDef) -> Result<serde_json::Value, DispatchError>;

    async fn return_value(&self, value: &serde_json::Value) -> Result<(), DispatchError>;

    async fn return_error(&self, message: &str) -> Result<(), DispatchError>;
}
