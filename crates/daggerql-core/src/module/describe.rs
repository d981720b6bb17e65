use crate::dispatch::ModuleObject;
use crate::module::ArgumentDef;
use crate::module::FunctionDef;
use crate::module::ObjectTypeDef;
use crate::module::TypeDef;

/// Describes the functions `T` exposes. Only the functions listed by
/// [`ModuleObject::functions()`] appear, in the order they are listed.
pub fn describe<T: ModuleObject>() -> ObjectTypeDef {
    T::functions()
        .iter()
        .fold(ObjectTypeDef::new(T::NAME), |object, function| {
            let function_def = function.args().iter().fold(
                FunctionDef::new(function.name(), TypeDef::string()),
                |function_def, arg| function_def.with_arg(ArgumentDef::new(arg, TypeDef::string())),
            );
            object.with_function(match function.description() {
                Some(description) => function_def.with_description(description),
                None => function_def,
            })
        })
}
