use crate::module::FunctionDef;

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ObjectTypeDef {
    name: String,
    functions: Vec<FunctionDef>,
}
impl ObjectTypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: vec![],
        }
    }

    pub fn with_function(mut self, function: FunctionDef) -> Self {
        self.functions.push(function);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn functions(&self) -> &[FunctionDef] {
        self.functions.as_slice()
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|function| function.name() == name)
    }
}
