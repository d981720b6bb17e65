use crate::engine::ClientConfig;
use crate::engine::ExecutionError;
use crate::engine::GraphQLClient;

#[derive(serde::Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
}

/// Posts queries to an HTTP GraphQL endpoint. The session token, when
/// configured, is sent as the basic-auth user name.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}
impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ExecutionError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| ExecutionError::Transport(err.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl GraphQLClient for HttpClient {
    async fn request(&self, query: &str) -> Result<serde_json::Value, ExecutionError> {
        let mut request = self
            .client
            .post(self.config.endpoint())
            .json(&GraphQLRequest { query });
        if let Some(token) = self.config.session_token() {
            request = request.basic_auth(token, None::<&str>);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ExecutionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExecutionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| ExecutionError::Decode(err.to_string()))
    }
}
