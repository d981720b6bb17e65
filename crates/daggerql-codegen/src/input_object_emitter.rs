use crate::CodegenError;
use crate::emit_context::doc_attrs;
use crate::emit_context::EmitContext;
use crate::naming::type_ident;
use crate::naming::value_ident;
use crate::naming::IdentScope;
use daggerql_core::encode::ArgumentShape;
use daggerql_core::introspection::Type;
use proc_macro2::TokenStream;
use quote::quote;

/// An input object becomes a plain struct. Every declared field is required
/// by the constructor and sent on the wire, in declaration order.
pub(crate) fn emit_input_object(
    ctx: &EmitContext<'_>,
    input_object: &Type,
) -> Result<TokenStream, CodegenError> {
    let rt = &ctx.rt;
    let ident = type_ident(input_object.name());
    let docs = doc_attrs(input_object.description());

    let mut field_scope = IdentScope::new();
    let mut fields = vec![];
    let mut params = vec![];
    let mut field_idents = vec![];
    let mut wire_pairs = vec![];
    for input_field in input_object.input_fields() {
        let shape = ArgumentShape::of(input_field.type_ref()).map_err(|source| {
            CodegenError::UnsupportedArgumentShape {
                type_name: input_object.name().to_string(),
                field: input_field.name().to_string(),
                argument: input_field.name().to_string(),
                source,
            }
        })?;
        let field_ident = field_scope.claim(value_ident(input_field.name()));
        let field_type = ctx.owned_type(&shape)?;
        let field_docs = doc_attrs(input_field.description());
        let name = input_field.name();

        fields.push(quote! {
            #(#field_docs)*
            pub #field_ident: #field_type
        });
        params.push(quote! { #field_ident: #field_type });
        wire_pairs.push(quote! {
            (
                ::std::string::String::from(#name),
                #rt::value::ToValue::to_value(&self.#field_ident),
            )
        });
        field_idents.push(field_ident);
    }

    Ok(quote! {
        #(#docs)*
        #[derive(Clone, Debug, PartialEq)]
        pub struct #ident {
            #(#fields),*
        }

        impl #ident {
            pub fn new(#(#params),*) -> Self {
                Self {
                    #(#field_idents),*
                }
            }
        }

        impl #rt::value::InputObject for #ident {
            fn to_wire_pairs(
                &self,
            ) -> ::std::vec::Vec<(::std::string::String, #rt::value::Value)> {
                ::std::vec![#(#wire_pairs),*]
            }
        }

        impl #rt::value::ToValue for #ident {
            fn to_value(&self) -> #rt::value::Value {
                #rt::value::InputObject::to_object_value(self)
            }
        }
    })
}
