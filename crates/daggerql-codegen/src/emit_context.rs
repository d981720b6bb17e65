use crate::CodegenError;
use crate::naming::type_ident;
use daggerql_core::encode::ArgumentShape;
use daggerql_core::introspection::Schema;
use daggerql_core::introspection::TypeKind;
use daggerql_core::introspection::TypeRef;
use proc_macro2::TokenStream;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// State shared by every emitter during one generation pass.
pub(crate) struct EmitContext<'schema> {
    pub(crate) schema: &'schema Schema,
    /// Path to the runtime crate, e.g. `daggerql`.
    pub(crate) rt: TokenStream,
    /// The same path as a string, for `#[serde(crate = "..")]`.
    pub(crate) serde_crate: String,
}
impl<'schema> EmitContext<'schema> {
    /// The Rust type generated for (or standing in for) the named schema
    /// type.
    pub(crate) fn named_type(&self, name: &str) -> Result<TokenStream> {
        match name {
            "Boolean" => return Ok(quote! { bool }),
            "Float" => return Ok(quote! { f64 }),
            "Int" => return Ok(quote! { i64 }),
            "String" => return Ok(quote! { ::std::string::String }),
            _ => (),
        }

        if self.schema.get_type(name).is_none() {
            return Err(CodegenError::UnknownType {
                name: name.to_string(),
            });
        }
        let ident = type_ident(name);
        Ok(quote! { #ident })
    }

    /// Parameter type of a generated method. Strings and lists are borrowed.
    pub(crate) fn param_type(&self, shape: &ArgumentShape) -> Result<TokenStream> {
        Ok(match shape {
            ArgumentShape::Boolean => quote! { bool },
            ArgumentShape::Float => quote! { f64 },
            ArgumentShape::Int => quote! { i64 },
            ArgumentShape::String => quote! { &str },
            ArgumentShape::Id(name) | ArgumentShape::Enum(name) | ArgumentShape::InputObject(name) => {
                self.named_type(name)?
            },
            ArgumentShape::List(item) => {
                let item = self.param_type(item)?;
                quote! { &[#item] }
            },
        })
    }

    /// Owned type of an input object field.
    pub(crate) fn owned_type(&self, shape: &ArgumentShape) -> Result<TokenStream> {
        Ok(match shape {
            ArgumentShape::String => quote! { ::std::string::String },
            ArgumentShape::List(item) => {
                let item = self.owned_type(item)?;
                quote! { ::std::vec::Vec<#item> }
            },
            other => self.param_type(other)?,
        })
    }

    /// Decoded type of a leaf (or list of leaves) result. Nullable values are
    /// `Option`s except for the outermost list, where `null` decodes as an
    /// empty `Vec`.
    pub(crate) fn resolved_type(
        &self,
        type_ref: &TypeRef,
        unsupported: &dyn Fn() -> CodegenError,
    ) -> Result<TokenStream> {
        self.resolved_type_at(type_ref, true, unsupported)
    }

    fn resolved_type_at(
        &self,
        type_ref: &TypeRef,
        outermost: bool,
        unsupported: &dyn Fn() -> CodegenError,
    ) -> Result<TokenStream> {
        let inner = type_ref.nullable();
        let (base, optional) = match inner.kind() {
            TypeKind::List => {
                let item_ref = inner.of_type().ok_or_else(unsupported)?;
                let item = self.resolved_type_at(item_ref, false, unsupported)?;
                (quote! { ::std::vec::Vec<#item> }, type_ref.is_optional() && !outermost)
            },
            TypeKind::Enum | TypeKind::Scalar => {
                let name = inner.name().ok_or_else(unsupported)?;
                (self.named_type(name)?, type_ref.is_optional())
            },
            _ => return Err(unsupported()),
        };

        Ok(if optional {
            quote! { ::std::option::Option<#base> }
        } else {
            base
        })
    }
}

/// One `#[doc = ".."]` attribute per line of `description`.
pub(crate) fn doc_attrs(description: Option<&str>) -> Vec<TokenStream> {
    description
        .map(|description| {
            description
                .lines()
                .map(|line| {
                    let line = if line.is_empty() {
                        String::new()
                    } else {
                        format!(" {line}")
                    };
                    quote! { #[doc = #line] }
                })
                .collect()
        })
        .unwrap_or_default()
}
