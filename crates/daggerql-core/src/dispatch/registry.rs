use crate::dispatch::DispatchError;
use crate::dispatch::FunctionCallContext;
use crate::dispatch::FunctionFuture;
use crate::dispatch::InputArgs;
use crate::dispatch::ModuleObject;
use crate::module::describe;
use crate::module::ModuleDef;
use crate::module::ObjectTypeDef;
use indexmap::IndexMap;
use std::sync::Arc;

type ErasedHandler = Arc<dyn Fn(serde_json::Value, InputArgs) -> FunctionFuture + Send + Sync>;

/// What a dispatched call produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The call was a registration request.
    Register(ModuleDef),
    /// The JSON-encoded return value of an invoked function.
    Return(serde_json::Value),
}

struct ObjectEntry {
    descriptor: ObjectTypeDef,
    functions: IndexMap<String, ErasedHandler>,
}

/// Maps `(type name, function name)` to the handler that runs it.
#[derive(Default)]
pub struct Registry {
    objects: IndexMap<String, ObjectEntry>,
}
impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object<T: ModuleObject>(mut self) -> Self {
        let mut functions: IndexMap<String, ErasedHandler> = IndexMap::new();
        for spec in T::functions() {
            let handler = spec.handler();
            functions.insert(
                spec.name().to_string(),
                Arc::new(move |parent: serde_json::Value, args: InputArgs| -> FunctionFuture {
                    match restore_parent::<T>(parent) {
                        Ok(parent) => handler(parent, args),
                        Err(err) => Box::pin(futures::future::ready(Err(err))),
                    }
                }),
            );
        }

        log::debug!("Registered `{}` with {} function(s).", T::NAME, functions.len());
        self.objects.insert(T::NAME.to_string(), ObjectEntry {
            descriptor: describe::<T>(),
            functions,
        });
        self
    }

    /// Describes every registered type.
    pub fn describe(&self) -> ModuleDef {
        self.objects
            .values()
            .fold(ModuleDef::new(), |module, entry| {
                module.with_object(entry.descriptor.clone())
            })
    }

    pub async fn dispatch(&self, context: FunctionCallContext) -> Result<Outcome, DispatchError> {
        if context.is_registration() {
            log::info!("Describing {} object(s) for registration.", self.objects.len());
            return Ok(Outcome::Register(self.describe()));
        }

        let FunctionCallContext {
            function_name,
            parent_name,
            parent,
            input_args,
        } = context;

        let handler = self
            .objects
            .get(parent_name.as_str())
            .and_then(|entry| entry.functions.get(function_name.as_str()))
            .ok_or_else(|| DispatchError::UnknownFunction {
                type_name: parent_name.clone(),
                function: function_name.clone(),
            })?;

        log::info!("Invoking `{parent_name}.{function_name}`.");
        let value = handler(parent, InputArgs::new(function_name, input_args)).await?;
        Ok(Outcome::Return(value))
    }
}
impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("objects", &self.describe())
            .finish()
    }
}

/// Rebuilds the parent from the state the host sent. Properties missing from
/// that state keep the values of `T::default()`.
fn restore_parent<T: ModuleObject>(parent: serde_json::Value) -> Result<T, DispatchError> {
    let parent_decode_error = |err: serde_json::Error| DispatchError::ParentDecode {
        type_name: T::NAME.to_string(),
        message: err.to_string(),
    };

    let state = match parent {
        serde_json::Value::Null => return Ok(T::default()),
        serde_json::Value::Object(properties) => {
            match serde_json::to_value(T::default()).map_err(parent_decode_error)? {
                serde_json::Value::Object(mut defaults) => {
                    defaults.extend(properties);
                    serde_json::Value::Object(defaults)
                },
                _ => serde_json::Value::Object(properties),
            }
        },
        other => other,
    };

    serde_json::from_value(state).map_err(parent_decode_error)
}
