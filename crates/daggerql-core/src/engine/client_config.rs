use crate::engine::ExecutionError;

pub const SESSION_PORT_ENV: &str = "DAGGER_SESSION_PORT";
pub const SESSION_TOKEN_ENV: &str = "DAGGER_SESSION_TOKEN";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    endpoint: String,
    session_token: Option<String>,
}
impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            session_token: None,
        }
    }

    /// Reads the coordinates of an already-established engine session from
    /// `DAGGER_SESSION_PORT` and `DAGGER_SESSION_TOKEN`.
    pub fn from_env() -> Result<Self, ExecutionError> {
        let port = std::env::var(SESSION_PORT_ENV).map_err(|_| {
            ExecutionError::Config(format!("`{SESSION_PORT_ENV}` is not set"))
        })?;
        let token = std::env::var(SESSION_TOKEN_ENV).ok();
        Self::for_session(port.as_str(), token)
    }

    pub fn for_session(port: &str, token: Option<String>) -> Result<Self, ExecutionError> {
        let port: u16 = port.trim().parse().map_err(|_| {
            ExecutionError::Config(format!(
                "`{SESSION_PORT_ENV}` must be a port number, found `{port}`",
            ))
        })?;

        let config = Self::new(format!("http://127.0.0.1:{port}/query"));
        Ok(match token {
            Some(token) => config.with_session_token(token),
            None => config,
        })
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}
