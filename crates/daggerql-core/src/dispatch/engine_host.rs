use crate::dispatch::DispatchError;
use crate::dispatch::FunctionCallContext;
use crate::dispatch::FunctionHost;
use crate::engine::execute;
use crate::engine::execute_list;
use crate::engine::DynClient;
use crate::module::FunctionDef;
use crate::module::ModuleDef;
use crate::module::ObjectTypeDef;
use crate::module::TypeDef;
use crate::query_builder::Argument;
use crate::query_builder::QueryBuilder;
use crate::value::ToValue;
use crate::value::Value;

type Result<T> = std::result::Result<T, DispatchError>;

/// A [`FunctionHost`] reached through the engine's GraphQL API.
#[derive(Clone, Debug)]
pub struct EngineHost {
    client: DynClient,
}
impl EngineHost {
    pub fn new(client: DynClient) -> Self {
        Self { client }
    }

    fn current_function_call() -> QueryBuilder {
        QueryBuilder::new().select("currentFunctionCall")
    }

    async fn id(&self, query: QueryBuilder) -> Result<String> {
        Ok(execute(self.client.as_ref(), &query.select("id")).await?)
    }

    async fn type_def_id(&self, type_def: &TypeDef) -> Result<String> {
        let mut query = QueryBuilder::new().select("typeDef").select_with_args(
            "withKind",
            vec![Argument::new("kind", type_def.kind().as_str().to_value())],
        );
        if type_def.optional() {
            query = query.select_with_args("withOptional", vec![
                Argument::new("optional", true.to_value()),
            ]);
        }
        self.id(query).await
    }

    async fn function_id(&self, function: &FunctionDef) -> Result<String> {
        let return_type = self.type_def_id(function.return_type()).await?;
        let mut query = QueryBuilder::new().select_with_args("function", vec![
            Argument::new("name", function.name().to_value()),
            Argument::new("returnType", Value::String(return_type)),
        ]);
        if let Some(description) = function.description() {
            query = query.select_with_args("withDescription", vec![
                Argument::new("description", description.to_value()),
            ]);
        }
        for arg in function.args() {
            let type_def = self.type_def_id(arg.type_def()).await?;
            query = query.select_with_args("withArg", vec![
                Argument::new("name", arg.name().to_value()),
                Argument::new("typeDef", Value::String(type_def)),
            ]);
        }
        self.id(query).await
    }

    async fn object_id(&self, object: &ObjectTypeDef) -> Result<String> {
        let mut query = QueryBuilder::new().select("typeDef").select_with_args(
            "withObject",
            vec![Argument::new("name", object.name().to_value())],
        );
        for function in object.functions() {
            let function_id = self.function_id(function).await?;
            query = query.select_with_args("withFunction", vec![
                Argument::new("function", Value::String(function_id)),
            ]);
        }
        self.id(query).await
    }
}

#[async_trait::async_trait]
impl FunctionHost for EngineHost {
    async fn current_call(&self) -> Result<FunctionCallContext> {
        let call = Self::current_function_call();
        let client = self.client.as_ref();

        let parent_name: String = execute(client, &call.select("parentName")).await?;
        if parent_name.is_empty() {
            return Ok(FunctionCallContext::registration());
        }

        let function_name: String = execute(client, &call.select("name")).await?;
        let parent: Option<String> = execute(client, &call.select("parent")).await?;
        let arg_names: Vec<String> =
            execute_list(client, &call.select("inputArgs").select("name")).await?;
        let arg_values: Vec<String> =
            execute_list(client, &call.select("inputArgs").select("value")).await?;
        if arg_names.len() != arg_values.len() {
            return Err(DispatchError::MalformedCall(format!(
                "{} argument names but {} argument values",
                arg_names.len(),
                arg_values.len(),
            )));
        }

        let input_args = arg_names
            .into_iter()
            .zip(arg_values)
            .map(|(name, value)| Ok((name, parse_json_scalar(value.as_str())?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(FunctionCallContext::invocation(
            parent_name,
            function_name,
            parse_json_scalar(parent.unwrap_or_default().as_str())?,
            input_args,
        ))
    }

    async fn register_module(&self, module: &ModuleDef) -> Result<serde_json::Value> {
        let mut query = QueryBuilder::new().select("module");
        for object in module.objects() {
            let object_id = self.object_id(object).await?;
            query = query.select_with_args("withObject", vec![
                Argument::new("object", Value::String(object_id)),
            ]);
        }
        Ok(serde_json::Value::String(self.id(query).await?))
    }

    async fn return_value(&self, value: &serde_json::Value) -> Result<()> {
        let query = Self::current_function_call().select_with_args("returnValue", vec![
            Argument::new("value", Value::String(value.to_string())),
        ]);
        let _: serde_json::Value = execute(self.client.as_ref(), &query).await?;
        Ok(())
    }

    async fn return_error(&self, message: &str) -> Result<()> {
        let error_id = self.id(QueryBuilder::new().select_with_args("error", vec![
            Argument::new("message", message.to_value()),
        ])).await?;
        let query = Self::current_function_call().select_with_args("returnError", vec![
            Argument::new("error", Value::String(error_id)),
        ]);
        let _: serde_json::Value = execute(self.client.as_ref(), &query).await?;
        Ok(())
    }
}

/// JSON scalars arrive as strings holding JSON text. Empty text is `null`.
fn parse_json_scalar(text: &str) -> Result<serde_json::Value> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text)
        .map_err(|err| DispatchError::MalformedCall(format!("invalid JSON `{text}`: {err}")))
}
