//! Registration and invocation of the functions a module exposes.
//!
//! A process serves exactly one function call: the host either asks for the
//! module's description (registration) or names a function on one of its
//! types along with that type's serialized state and the call's arguments.

mod dispatch_error;
mod engine_host;
mod function_call_context;
mod function_host;
mod function_spec;
mod input_args;
mod module_object;
mod registry;
mod runtime;

pub use dispatch_error::DispatchError;
pub use engine_host::EngineHost;
pub use function_call_context::FunctionCallContext;
pub use function_host::FunctionHost;
pub use function_spec::encode_result;
pub use function_spec::function_failed;
pub use function_spec::FunctionFuture;
pub use function_spec::FunctionSpec;
pub use input_args::InputArgs;
pub use module_object::ModuleObject;
pub use registry::Outcome;
pub use registry::Registry;
pub use runtime::run;

#[cfg(test)]
mod tests;
