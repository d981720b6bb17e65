use crate::emit_context::doc_attrs;
use crate::emit_context::EmitContext;
use crate::naming::type_ident;
use daggerql_core::introspection::Type;
use proc_macro2::TokenStream;
use quote::quote;

/// A custom scalar becomes a newtype over its string form.
pub(crate) fn emit_scalar(ctx: &EmitContext<'_>, scalar: &Type) -> TokenStream {
    let rt = &ctx.rt;
    let serde_crate = ctx.serde_crate.as_str();
    let ident = type_ident(scalar.name());
    let docs = doc_attrs(scalar.description());

    quote! {
        #(#docs)*
        #[derive(
            Clone,
            Debug,
            Eq,
            Hash,
            PartialEq,
            #rt::serde::Deserialize,
            #rt::serde::Serialize,
        )]
        #[serde(crate = #serde_crate, transparent)]
        pub struct #ident(pub ::std::string::String);

        impl #ident {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl ::std::convert::From<::std::string::String> for #ident {
            fn from(value: ::std::string::String) -> Self {
                Self(value)
            }
        }

        impl ::std::convert::From<&str> for #ident {
            fn from(value: &str) -> Self {
                Self(::std::borrow::ToOwned::to_owned(value))
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl #rt::value::ToValue for #ident {
            fn to_value(&self) -> #rt::value::Value {
                #rt::value::Value::String(::std::clone::Clone::clone(&self.0))
            }
        }
    }
}
