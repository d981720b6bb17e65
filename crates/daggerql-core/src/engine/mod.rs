//! Sends finished queries to a GraphQL endpoint and decodes the responses.

mod client_config;
mod execute;
mod execution_error;
mod graphql_client;
mod http_client;
#[cfg(any(test, feature = "test-utils"))]
mod mock_client;
mod object;
mod shared_client;

pub use client_config::ClientConfig;
pub use client_config::SESSION_PORT_ENV;
pub use client_config::SESSION_TOKEN_ENV;
pub use execute::execute;
pub use execute::execute_list;
pub use execution_error::ExecutionError;
pub use graphql_client::DynClient;
pub use graphql_client::GraphQLClient;
pub use http_client::HttpClient;
#[cfg(any(test, feature = "test-utils"))]
pub use mock_client::MockClient;
pub use object::Object;
pub use object::ObjectList;
pub use shared_client::install_shared_client;
pub use shared_client::shared_client;

#[cfg(test)]
mod tests;
