use crate::module::TypeDef;

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ArgumentDef {
    name: String,
    type_def: TypeDef,
}
impl ArgumentDef {
    pub fn new(name: impl Into<String>, type_def: TypeDef) -> Self {
        Self {
            name: name.into(),
            type_def,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_def(&self) -> &TypeDef {
        &self.type_def
    }
}
