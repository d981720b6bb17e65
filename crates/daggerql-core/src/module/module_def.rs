use crate::module::ObjectTypeDef;

/// Everything a module registers with the host: one entry per exposed type.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct ModuleDef {
    objects: Vec<ObjectTypeDef>,
}
impl ModuleDef {
    pub fn new() -> Self {
        Self { objects: vec![] }
    }

    pub fn with_object(mut self, object: ObjectTypeDef) -> Self {
        self.objects.push(object);
        self
    }

    pub fn objects(&self) -> &[ObjectTypeDef] {
        self.objects.as_slice()
    }

    pub fn get_object(&self, name: &str) -> Option<&ObjectTypeDef> {
        self.objects.iter().find(|object| object.name() == name)
    }
}
