use crate::dispatch::FunctionSpec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A type whose methods are exposed as module functions.
///
/// Its serialized form is the state the host hands back on every call. State
/// properties the host omits take their values from `Default`.
///
/// Usually implemented with the `#[object]` attribute macro.
pub trait ModuleObject: Default + DeserializeOwned + Send + Serialize + Sized + 'static {
    const NAME: &'static str;

    fn functions() -> Vec<FunctionSpec<Self>>;
}
