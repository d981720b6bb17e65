use crate::engine::ClientConfig;
use crate::engine::DynClient;
use crate::engine::ExecutionError;
use crate::engine::HttpClient;
use std::sync::Arc;
use std::sync::OnceLock;

static SHARED_CLIENT: OnceLock<DynClient> = OnceLock::new();

/// The process-wide client. The first call connects to the session described
/// by the environment; every later call returns the same client.
pub fn shared_client() -> Result<DynClient, ExecutionError> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client.clone());
    }

    let config = ClientConfig::from_env()?;
    log::debug!("Connecting to session endpoint `{}`.", config.endpoint());
    let client: DynClient = Arc::new(HttpClient::new(config)?);
    Ok(SHARED_CLIENT.get_or_init(|| client).clone())
}

/// Installs `client` as the process-wide client. Returns `false` (and drops
/// `client`) when one was already installed.
pub fn install_shared_client(client: DynClient) -> bool {
    SHARED_CLIENT.set(client).is_ok()
}
