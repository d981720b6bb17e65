//! Declarative description of the functions a module exposes, as registered
//! with the host.

mod argument_def;
mod describe;
mod function_def;
mod module_def;
mod object_type_def;
mod type_def;

pub use argument_def::ArgumentDef;
pub use describe::describe;
pub use function_def::FunctionDef;
pub use module_def::ModuleDef;
pub use object_type_def::ObjectTypeDef;
pub use type_def::TypeDef;
pub use type_def::TypeDefKind;
