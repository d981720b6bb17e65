use crate::dispatch::run;
use crate::dispatch::EngineHost;
use crate::dispatch::Registry;
use crate::engine::shared_client;
use std::process::ExitCode;

/// Entry point of a module binary: answers the engine's one function call
/// for this process using `registry`.
///
/// ```no_run
/// use daggerql::dispatch::Registry;
/// # #[derive(Default, daggerql::serde::Deserialize, daggerql::serde::Serialize)]
/// # #[serde(crate = "daggerql::serde")]
/// # struct Greeter;
/// # #[daggerql::macros::object]
/// # impl Greeter {}
///
/// fn main() -> std::process::ExitCode {
///     daggerql::serve(Registry::new().object::<Greeter>())
/// }
/// ```
pub fn serve(registry: Registry) -> ExitCode {
    crate::setup_logger(false);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("Failed to start the async runtime: {err}");
            return ExitCode::FAILURE;
        },
    };

    runtime.block_on(async move {
        let client = match shared_client() {
            Ok(client) => client,
            Err(err) => {
                log::error!("Failed to connect to the engine session: {err}");
                return ExitCode::FAILURE;
            },
        };

        match run(&registry, &EngineHost::new(client)).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        }
    })
}
