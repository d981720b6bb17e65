/// The host's vocabulary for the type of an argument or return value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDefKind {
    BooleanKind,
    IntegerKind,
    ListKind,
    ObjectKind,
    StringKind,
    VoidKind,
}
impl TypeDefKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BooleanKind => "BOOLEAN_KIND",
            Self::IntegerKind => "INTEGER_KIND",
            Self::ListKind => "LIST_KIND",
            Self::ObjectKind => "OBJECT_KIND",
            Self::StringKind => "STRING_KIND",
            Self::VoidKind => "VOID_KIND",
        }
    }
}
impl std::fmt::Display for TypeDefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct TypeDef {
    kind: TypeDefKind,
    optional: bool,
}
impl TypeDef {
    pub fn new(kind: TypeDefKind) -> Self {
        Self {
            kind,
            optional: false,
        }
    }

    /// Every argument and return value is currently described as a string;
    /// values travel as JSON text either way.
    pub fn string() -> Self {
        Self::new(TypeDefKind::StringKind)
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn kind(&self) -> TypeDefKind {
        self.kind
    }

    pub fn optional(&self) -> bool {
        self.optional
    }
}
