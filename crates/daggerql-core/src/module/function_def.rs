use crate::module::ArgumentDef;
use crate::module::TypeDef;

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FunctionDef {
    name: String,
    description: Option<String>,
    return_type: TypeDef,
    args: Vec<ArgumentDef>,
}
impl FunctionDef {
    pub fn new(name: impl Into<String>, return_type: TypeDef) -> Self {
        Self {
            name: name.into(),
            description: None,
            return_type,
            args: vec![],
        }
    }

    pub fn with_arg(mut self, arg: ArgumentDef) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn return_type(&self) -> &TypeDef {
        &self.return_type
    }

    pub fn args(&self) -> &[ArgumentDef] {
        self.args.as_slice()
    }
}
