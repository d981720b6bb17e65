use crate::dispatch::DispatchError;
use crate::dispatch::FunctionHost;
use crate::dispatch::Outcome;
use crate::dispatch::Registry;

/// Serves the host's one function call.
///
/// Failures are reported to the host through `return_error` and then
/// returned to the caller so the process can exit unsuccessfully.
pub async fn run(registry: &Registry, host: &dyn FunctionHost) -> Result<(), DispatchError> {
    let context = host.current_call().await?;

    let result = match registry.dispatch(context).await {
        Ok(Outcome::Register(module)) => host.register_module(&module).await,
        Ok(Outcome::Return(value)) => Ok(value),
        Err(err) => Err(err),
    };

    match result {
        Ok(value) => host.return_value(&value).await,
        Err(err) => {
            log::error!("Function call failed: {err}");
            host.return_error(err.to_string().as_str()).await?;
            Err(err)
        },
    }
}
