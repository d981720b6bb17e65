use crate::introspection::TypeKind;
use thiserror::Error;

/// A wrapper applied to a [`TypeRef`], outermost first when returned by
/// [`TypeRef::unwrap()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeWrapper {
    List,
    NonNull,
}

/// The terminal named type at the bottom of a chain of [`TypeWrapper`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeRef {
    pub kind: TypeKind,
    pub name: String,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TypeRefError {
    #[error("`{kind}` type reference is missing its `ofType`")]
    MissingOfType { kind: TypeKind },

    #[error("`{kind}` type reference is missing its `name`")]
    MissingName { kind: TypeKind },
}

/// A (possibly wrapped) reference to a named type, e.g. the return type of a
/// field or the type of an argument.
///
/// Wrappers nest through `ofType` and always terminate at a named type:
///
/// ```json
/// {"kind": "NON_NULL", "ofType": {"kind": "LIST", "ofType": {
///   "kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "String"}}}}
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub(super) kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) of_type: Option<Box<TypeRef>>,
}
impl TypeRef {
    /// A bare reference to a named type.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Only set on the terminal named reference; wrappers have no name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The wrapped reference of a LIST or NON_NULL wrapper.
    pub fn of_type(&self) -> Option<&TypeRef> {
        self.of_type.as_deref()
    }

    /// Peels any NON_NULL wrappers off of this reference. LIST wrappers are
    /// left in place.
    pub fn nullable(&self) -> &TypeRef {
        let mut current = self;
        while current.kind == TypeKind::NonNull {
            match current.of_type.as_deref() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    /// `true` unless the outermost wrapper is NON_NULL.
    pub fn is_optional(&self) -> bool {
        self.kind != TypeKind::NonNull
    }

    /// This and the kind predicates below look through NON_NULL wrappers
    /// only. `[Container!]!` is a list, not an object.
    pub fn is_list(&self) -> bool {
        self.nullable().kind == TypeKind::List
    }

    pub fn is_scalar(&self) -> bool {
        self.nullable().kind == TypeKind::Scalar
    }

    pub fn is_enum(&self) -> bool {
        self.nullable().kind == TypeKind::Enum
    }

    pub fn is_input_object(&self) -> bool {
        self.nullable().kind == TypeKind::InputObject
    }

    pub fn is_object(&self) -> bool {
        self.nullable().kind == TypeKind::Object
    }

    /// A leaf is a scalar or an enum once NON_NULL wrappers are removed. So
    /// `String!` is a leaf but `[String!]!` is not.
    pub fn is_leaf(&self) -> bool {
        self.is_scalar() || self.is_enum()
    }

    /// The element type of a list shape (`[T]`, `[T]!`).
    pub fn list_item(&self) -> Option<&TypeRef> {
        let nullable = self.nullable();
        match nullable.kind {
            TypeKind::List => nullable.of_type.as_deref(),
            _ => None,
        }
    }

    /// The innermost named type, ignoring every wrapper.
    pub fn named_type(&self) -> Option<&TypeRef> {
        let mut current = self;
        while current.kind.is_wrapper() {
            current = current.of_type.as_deref()?;
        }
        Some(current)
    }

    pub fn named_type_name(&self) -> Option<&str> {
        self.named_type().and_then(|named| named.name())
    }

    /// Splits this reference into its wrappers (outermost first) and the
    /// terminal named type.
    pub fn unwrap(&self) -> Result<(Vec<TypeWrapper>, NamedTypeRef), TypeRefError> {
        let mut wrappers = vec![];
        let mut current = self;
        loop {
            let wrapper = match current.kind {
                TypeKind::List => TypeWrapper::List,
                TypeKind::NonNull => TypeWrapper::NonNull,
                _ => break,
            };
            wrappers.push(wrapper);
            current = current.of_type.as_deref().ok_or_else(|| {
                TypeRefError::MissingOfType {
                    kind: current.kind.clone(),
                }
            })?;
        }

        let name = current.name.clone().ok_or_else(|| TypeRefError::MissingName {
            kind: current.kind.clone(),
        })?;

        Ok((wrappers, NamedTypeRef {
            kind: current.kind.clone(),
            name,
        }))
    }

    /// Inverse of [`TypeRef::unwrap()`].
    pub fn rewrap(wrappers: &[TypeWrapper], named: NamedTypeRef) -> TypeRef {
        wrappers.iter().rev().fold(
            TypeRef::named(named.kind, named.name),
            |inner, wrapper| match wrapper {
                TypeWrapper::List => TypeRef::list(inner),
                TypeWrapper::NonNull => TypeRef::non_null(inner),
            },
        )
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, self.of_type.as_deref()) {
            (TypeKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (TypeKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            (kind, _) => match &self.name {
                Some(name) => f.write_str(name),
                None => write!(f, "<unnamed {kind}>"),
            },
        }
    }
}
