use crate::CodegenError;
use daggerql_core::introspection::Field;
use daggerql_core::introspection::TypeKind;
use daggerql_core::introspection::TypeWrapper;

/// How the generated method for an object field produces its result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldEvaluation {
    /// The field returns an object (or a list of objects). The method only
    /// extends the selection; nothing is sent until a leaf is requested.
    Pending { object_type: String, list: bool },

    /// The field returns a scalar or enum (or a list of them). The method
    /// sends the selection and returns the decoded value.
    Resolved { list: bool },
}
impl FieldEvaluation {
    pub fn of(type_name: &str, field: &Field) -> Result<Self, CodegenError> {
        let (wrappers, named) = field.type_ref().unwrap().map_err(|source| {
            CodegenError::MalformedTypeRef {
                type_name: type_name.to_string(),
                field: field.name().to_string(),
                source,
            }
        })?;
        let list_depth = wrappers
            .iter()
            .filter(|wrapper| **wrapper == TypeWrapper::List)
            .count();

        match named.kind {
            TypeKind::Enum | TypeKind::Scalar => Ok(Self::Resolved {
                list: list_depth > 0,
            }),
            TypeKind::Object if list_depth <= 1 => Ok(Self::Pending {
                object_type: named.name,
                list: list_depth == 1,
            }),
            _ => Err(CodegenError::UnsupportedReturnShape {
                type_name: type_name.to_string(),
                field: field.name().to_string(),
                type_ref: field.type_ref().to_string(),
            }),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
