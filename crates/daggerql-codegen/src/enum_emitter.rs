use crate::emit_context::doc_attrs;
use crate::emit_context::EmitContext;
use crate::naming::type_ident;
use crate::naming::variant_ident;
use crate::naming::IdentScope;
use daggerql_core::introspection::Type;
use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn emit_enum(ctx: &EmitContext<'_>, enum_type: &Type) -> TokenStream {
    let rt = &ctx.rt;
    let serde_crate = ctx.serde_crate.as_str();
    let ident = type_ident(enum_type.name());
    let docs = doc_attrs(enum_type.description());

    let mut variant_scope = IdentScope::new();
    let mut variants = vec![];
    let mut match_arms = vec![];
    for value in enum_type.enum_values() {
        let variant = variant_scope.claim(variant_ident(value.name()));
        let name = value.name();
        let mut variant_docs = doc_attrs(value.description());
        if value.is_deprecated() {
            let note = match value.deprecation_reason() {
                Some(reason) => format!(" Deprecated: {reason}"),
                None => " Deprecated.".to_string(),
            };
            variant_docs.push(quote! { #[doc = #note] });
        }
        variants.push(quote! {
            #(#variant_docs)*
            #[serde(rename = #name)]
            #variant
        });
        match_arms.push(quote! { Self::#variant => #name });
    }

    quote! {
        #(#docs)*
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            PartialEq,
            #rt::serde::Deserialize,
            #rt::serde::Serialize,
        )]
        #[serde(crate = #serde_crate)]
        pub enum #ident {
            #(#variants),*
        }

        impl #ident {
            /// The name of this value in the schema.
            pub fn as_str(&self) -> &'static str {
                match *self {
                    #(#match_arms),*
                }
            }
        }

        impl #rt::value::ToValue for #ident {
            fn to_value(&self) -> #rt::value::Value {
                #rt::value::Value::String(::std::string::String::from(self.as_str()))
            }
        }
    }
}
