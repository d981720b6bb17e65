use crate::engine::execute;
use crate::engine::execute_list;
use crate::engine::DynClient;
use crate::engine::ExecutionError;
use crate::engine::MockClient;
use crate::engine::Object;
use crate::engine::ObjectList;
use crate::query_builder::Argument;
use crate::query_builder::QueryBuilder;
use crate::value::ToValue;
use serde_json::json;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExecutionError>;

#[derive(Debug)]
struct EnvVariable {
    query: QueryBuilder,
    client: DynClient,
}
impl Object for EnvVariable {
    fn from_query(query: QueryBuilder, client: DynClient) -> Self {
        Self { query, client }
    }

    fn query(&self) -> &QueryBuilder {
        &self.query
    }

    fn client(&self) -> &DynClient {
        &self.client
    }
}

#[tokio::test]
async fn sends_one_request_and_plucks_the_leaf() -> Result<()> {
    let client = MockClient::with_data(json!({
        "container": {"from": {"id": "ctr-1"}},
    }));
    let query = QueryBuilder::new()
        .select("container")
        .select_with_args("from", vec![Argument::new("address", "alpine".to_value())])
        .select("id");

    let id: String = execute(&client, &query).await?;

    assert_eq!(id, "ctr-1");
    assert_eq!(client.requests(), vec![
        "query{container{from(address:\"alpine\"){id}}}".to_string(),
    ]);
    Ok(())
}

#[tokio::test]
async fn graphql_errors_become_query_errors() {
    let client = MockClient::new(|_| json!({
        "data": null,
        "errors": [
            {"message": "pull access denied", "path": ["container", "from"]},
            {"extensions": {"code": "X"}},
        ],
    }));
    let query = QueryBuilder::new().select("container").select("id");

    let result: Result<String> = execute(&client, &query).await;

    assert_eq!(result, Err(ExecutionError::Query {
        messages: vec![
            "pull access denied".to_string(),
            "{\"extensions\":{\"code\":\"X\"}}".to_string(),
        ],
    }));
}

#[tokio::test]
async fn empty_error_lists_are_ignored() -> Result<()> {
    let client = MockClient::new(|_| json!({"data": {"version": "v0.9"}, "errors": []}));

    let version: String = execute(&client, &QueryBuilder::new().select("version")).await?;

    assert_eq!(version, "v0.9");
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_reported() {
    let client = MockClient::with_data(json!({"container": {}}));
    let query = QueryBuilder::new().select("container").select("stdout");

    let result: Result<String> = execute(&client, &query).await;

    assert_eq!(result, Err(ExecutionError::MissingField {
        field: "stdout".to_string(),
    }));
}

#[tokio::test]
async fn null_parents_decode_as_absent_values() -> Result<()> {
    let client = MockClient::with_data(json!({"container": null}));
    let query = QueryBuilder::new().select("container").select("envVariable");

    let value: Option<String> = execute(&client, &query).await?;

    assert_eq!(value, None);
    Ok(())
}

#[tokio::test]
async fn undecodable_values_are_reported() {
    let client = MockClient::with_data(json!({"exitCode": "zero"}));
    let query = QueryBuilder::new().select("exitCode");

    let result: Result<i64> = execute(&client, &query).await;

    assert!(matches!(result, Err(ExecutionError::Decode(_))));
}

#[tokio::test]
async fn lists_are_plucked_element_wise() -> Result<()> {
    let client = MockClient::with_data(json!({
        "container": {"envVariables": [{"name": "A"}, {"name": "B"}]},
    }));
    let query = QueryBuilder::new()
        .select("container")
        .select("envVariables")
        .select("name");

    let names: Vec<String> = execute_list(&client, &query).await?;

    assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
    Ok(())
}

#[tokio::test]
async fn null_lists_are_empty() -> Result<()> {
    let client = MockClient::with_data(json!({"directory": {"entries": null}}));
    let query = QueryBuilder::new().select("directory").select("entries");

    let entries: Vec<String> = execute_list(&client, &query).await?;

    assert!(entries.is_empty());
    Ok(())
}

#[tokio::test]
async fn object_lists_resolve_through_their_ids() -> Result<()> {
    let client = Arc::new(MockClient::with_data(json!({
        "container": {"envVariables": [{"id": "env-1"}, {"id": "env-2"}]},
    })));
    let query = QueryBuilder::new()
        .select("container")
        .select_object_list("envVariables", vec![]);
    let list: ObjectList<EnvVariable> =
        ObjectList::new(query, client.clone(), "loadEnvVariableFromID");

    // Building the list sends nothing.
    assert!(client.requests().is_empty());

    let variables = list.resolve().await?;

    assert_eq!(client.requests(), vec!["query{container{envVariables{id}}}".to_string()]);
    let rendered: Vec<String> = variables
        .iter()
        .map(|variable| variable.query().render())
        .collect();
    assert_eq!(rendered, vec![
        "loadEnvVariableFromID(id:\"env-1\")".to_string(),
        "loadEnvVariableFromID(id:\"env-2\")".to_string(),
    ]);
    Ok(())
}

#[tokio::test]
async fn transport_failures_are_surfaced() {
    let client = MockClient::fallible(|_| {
        Err(ExecutionError::Transport("connection refused".to_string()))
    });

    let result: Result<String> = execute(&client, &QueryBuilder::new().select("version")).await;

    assert_eq!(result, Err(ExecutionError::Transport("connection refused".to_string())));
}

#[tokio::test]
async fn non_finite_float_arguments_are_rejected_before_sending() {
    let client = MockClient::with_data(json!({"container": {"withScale": {"id": "ctr-1"}}}));
    let query = QueryBuilder::new()
        .select("container")
        .select_with_args("withScale", vec![Argument::new("factor", f64::NAN.to_value())])
        .select("id");

    let result: Result<String> = execute(&client, &query).await;

    assert_eq!(result, Err(ExecutionError::NonFiniteFloat {
        argument: "withScale.factor".to_string(),
    }));
    assert!(client.requests().is_empty());
}
