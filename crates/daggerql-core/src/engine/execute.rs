use crate::engine::ExecutionError;
use crate::engine::GraphQLClient;
use crate::query_builder::QueryBuilder;
use serde::de::DeserializeOwned;

type Result<T> = std::result::Result<T, ExecutionError>;

/// Sends `query` and decodes the value found at the end of its selection
/// path.
pub async fn execute<T: DeserializeOwned>(
    client: &dyn GraphQLClient,
    query: &QueryBuilder,
) -> Result<T> {
    let data = execute_raw(client, query).await?;
    serde_json::from_value(data).map_err(|err| {
        ExecutionError::Decode(format!("`{}`: {err}", query.path().join(".")))
    })
}

/// Like [`execute()`], but a `null` list decodes as an empty `Vec`.
pub async fn execute_list<T: DeserializeOwned>(
    client: &dyn GraphQLClient,
    query: &QueryBuilder,
) -> Result<Vec<T>> {
    let items: Option<Vec<T>> = execute(client, query).await?;
    Ok(items.unwrap_or_default())
}

async fn execute_raw(client: &dyn GraphQLClient, query: &QueryBuilder) -> Result<serde_json::Value> {
    if let Some(argument) = query.non_finite_argument() {
        return Err(ExecutionError::NonFiniteFloat { argument });
    }
    let document = query.to_query_string();
    log::debug!("Executing `{document}`");

    let mut response = client.request(document.as_str()).await?;
    if let Some(errors) = response
        .get("errors")
        .and_then(|errors| errors.as_array())
        .filter(|errors| !errors.is_empty())
    {
        let messages = errors
            .iter()
            .map(|error| match error.get("message").and_then(|m| m.as_str()) {
                Some(message) => message.to_string(),
                None => error.to_string(),
            })
            .collect();
        return Err(ExecutionError::Query { messages });
    }

    let data = response
        .get_mut("data")
        .map(serde_json::Value::take)
        .unwrap_or_default();
    pluck(data, query.path().as_slice())
}

/// Walks `path` down from the response's `data`. Lists along the way are
/// mapped element-wise and `null` short-circuits.
fn pluck(value: serde_json::Value, path: &[&str]) -> Result<serde_json::Value> {
    let Some((field, rest)) = path.split_first() else {
        return Ok(value);
    };

    match value {
        serde_json::Value::Null => Ok(serde_json::Value::Null),
        serde_json::Value::Object(mut object) => {
            let child = object.remove(*field).ok_or_else(|| ExecutionError::MissingField {
                field: field.to_string(),
            })?;
            pluck(child, rest)
        },
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| pluck(item, path))
            .collect::<Result<Vec<_>>>()
            .map(serde_json::Value::Array),
        other => Err(ExecutionError::Decode(format!(
            "expected an object containing `{field}`, found `{other}`",
        ))),
    }
}
