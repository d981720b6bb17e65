use crate::CodegenError;
use crate::emit_context::EmitContext;
use crate::enum_emitter::emit_enum;
use crate::input_object_emitter::emit_input_object;
use crate::object_emitter::emit_connect;
use crate::object_emitter::emit_object;
use crate::scalar_emitter::emit_scalar;
use daggerql_core::introspection::Schema;
use daggerql_core::introspection::TypeKind;
use proc_macro2::TokenStream;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// Scalars the generated code maps onto Rust primitives instead of emitting
/// a newtype for.
const PRIMITIVE_SCALARS: [&str; 4] = ["Boolean", "Float", "Int", "String"];

/// Compiles a [`Schema`] into Rust source.
///
/// Every type except the introspection system's own (`__*`) becomes one Rust
/// item: scalars become newtypes, enums become `enum`s, input objects become
/// structs and objects become lazily-evaluated handles. Generation is
/// all-or-nothing: any shape without a binding fails the whole pass.
#[derive(Clone, Debug)]
pub struct BindingGenerator {
    runtime_path: syn::Path,
}
impl BindingGenerator {
    pub fn new() -> Self {
        Self {
            runtime_path: syn::parse_quote! { daggerql },
        }
    }

    /// Sets the path generated code uses to reach the runtime crate (for
    /// example `::daggerql` or `crate::runtime`).
    pub fn with_runtime_path(mut self, runtime_path: &str) -> Result<Self> {
        self.runtime_path = syn::parse_str(runtime_path).map_err(|err| {
            CodegenError::InvalidRuntimePath {
                runtime_path: runtime_path.to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(self)
    }

    pub fn generate(&self, schema: &Schema) -> Result<String> {
        let tokens = self.generate_tokens(schema)?;
        syn::parse2::<syn::File>(tokens.clone())
            .map_err(|err| CodegenError::InvalidOutput(err.to_string()))?;
        Ok(tokens.to_string())
    }

    pub fn generate_tokens(&self, schema: &Schema) -> Result<TokenStream> {
        let runtime_path = &self.runtime_path;
        let rt = quote! { #runtime_path };
        let serde_crate = format!("{}::serde", rt.to_string().replace(' ', ""));
        let ctx = EmitContext {
            schema,
            rt,
            serde_crate,
        };

        let mut items = vec![];
        for type_ in schema.types() {
            if type_.is_introspection_type() {
                continue;
            }

            match type_.kind() {
                TypeKind::Scalar if PRIMITIVE_SCALARS.contains(&type_.name()) => (),
                TypeKind::Scalar => items.push(emit_scalar(&ctx, type_)),
                TypeKind::Enum => items.push(emit_enum(&ctx, type_)),
                TypeKind::InputObject => items.push(emit_input_object(&ctx, type_)?),
                TypeKind::Object => items.push(emit_object(&ctx, type_)?),
                kind => return Err(CodegenError::UnsupportedTypeKind {
                    type_name: type_.name().to_string(),
                    kind: kind.clone(),
                }),
            }
        }

        if let Some(query_type) = schema.query_type() {
            items.push(emit_connect(&ctx, query_type));
        }

        log::debug!("Generated {} binding item(s).", items.len());
        Ok(quote! { #(#items)* })
    }
}
impl std::default::Default for BindingGenerator {
    fn default() -> Self {
        Self::new()
    }
}
