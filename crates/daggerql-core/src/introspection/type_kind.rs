/// The `kind` of a type (or of a type wrapper) as reported by introspection.
///
/// Kinds outside of the GraphQL spec are preserved as
/// [`TypeKind::Unrecognized`] so that a schema still loads and consumers can
/// decide how to reject the shape.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
    Unrecognized(String),
}
impl TypeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
            Self::Unrecognized(kind) => kind.as_str(),
        }
    }

    /// Indicates whether this kind wraps another type reference rather than
    /// naming a type.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::convert::From<String> for TypeKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            "OBJECT" => Self::Object,
            "SCALAR" => Self::Scalar,
            "UNION" => Self::Union,
            _ => Self::Unrecognized(kind),
        }
    }
}
impl std::convert::From<TypeKind> for String {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Unrecognized(kind) => kind,
            kind => kind.as_str().to_string(),
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
