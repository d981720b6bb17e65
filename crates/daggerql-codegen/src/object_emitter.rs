use crate::CodegenError;
use crate::FieldEvaluation;
use crate::emit_context::doc_attrs;
use crate::emit_context::EmitContext;
use crate::naming::method_ident;
use crate::naming::type_ident;
use crate::naming::value_ident;
use crate::naming::IdentScope;
use daggerql_core::encode::ArgumentShape;
use daggerql_core::introspection::Field;
use daggerql_core::introspection::Type;
use proc_macro2::TokenStream;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// An object becomes a handle holding the selection that reaches it, with
/// one method per field.
pub(crate) fn emit_object(ctx: &EmitContext<'_>, object: &Type) -> Result<TokenStream> {
    let rt = &ctx.rt;
    let ident = type_ident(object.name());
    let docs = doc_attrs(object.description());
    let mut method_scope = IdentScope::new();
    let methods = object
        .fields()
        .iter()
        .map(|field| {
            let method = method_scope.claim(method_ident(field.name(), object.name()));
            emit_method(ctx, object, field, method)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        #(#docs)*
        #[derive(Clone, Debug)]
        pub struct #ident {
            query: #rt::query_builder::QueryBuilder,
            client: #rt::engine::DynClient,
        }

        impl #rt::engine::Object for #ident {
            fn from_query(
                query: #rt::query_builder::QueryBuilder,
                client: #rt::engine::DynClient,
            ) -> Self {
                Self { query, client }
            }

            fn query(&self) -> &#rt::query_builder::QueryBuilder {
                &self.query
            }

            fn client(&self) -> &#rt::engine::DynClient {
                &self.client
            }
        }

        impl #ident {
            #(#methods)*
        }
    })
}

/// `connect()` and `connect_with()` for the root `Query` object.
pub(crate) fn emit_connect(ctx: &EmitContext<'_>, query_type: &Type) -> TokenStream {
    let rt = &ctx.rt;
    let ident = type_ident(query_type.name());

    quote! {
        /// Connects to the engine session described by the environment. Every
        /// call shares the same underlying client.
        pub fn connect() -> ::std::result::Result<#ident, #rt::engine::ExecutionError> {
            ::std::result::Result::Ok(connect_with(#rt::engine::shared_client()?))
        }

        /// Starts a new selection from the root of the schema using `client`.
        pub fn connect_with(client: #rt::engine::DynClient) -> #ident {
            <#ident as #rt::engine::Object>::from_query(
                #rt::query_builder::QueryBuilder::new(),
                client,
            )
        }
    }
}

fn emit_method(
    ctx: &EmitContext<'_>,
    object: &Type,
    field: &Field,
    method: proc_macro2::Ident,
) -> Result<TokenStream> {
    let rt = &ctx.rt;
    let evaluation = FieldEvaluation::of(object.name(), field)?;
    let field_name = field.name();

    let mut param_scope = IdentScope::new();
    let mut params = vec![];
    let mut required_values = vec![];
    let mut optional_pushes = vec![];
    for arg in field.required_args().chain(field.optional_args()) {
        let shape = ArgumentShape::of(arg.type_ref()).map_err(|source| {
            CodegenError::UnsupportedArgumentShape {
                type_name: object.name().to_string(),
                field: field.name().to_string(),
                argument: arg.name().to_string(),
                source,
            }
        })?;
        let param = param_scope.claim(value_ident(arg.name()));
        let param_type = ctx.param_type(&shape)?;
        let arg_name = arg.name();

        if arg.is_required() {
            params.push(quote! { #param: #param_type });
            required_values.push(quote! {
                #rt::query_builder::Argument::new(
                    #arg_name,
                    #rt::value::ToValue::to_value(&#param),
                )
            });
        } else {
            params.push(quote! { #param: ::std::option::Option<#param_type> });
            optional_pushes.push(quote! {
                if let ::std::option::Option::Some(#param) = &#param {
                    __arguments.push(#rt::query_builder::Argument::new(
                        #arg_name,
                        #rt::value::ToValue::to_value(#param),
                    ));
                }
            });
        }
    }

    let arguments = if optional_pushes.is_empty() {
        quote! {
            let __arguments: ::std::vec::Vec<#rt::query_builder::Argument> =
                ::std::vec![#(#required_values),*];
        }
    } else {
        quote! {
            let mut __arguments: ::std::vec::Vec<#rt::query_builder::Argument> =
                ::std::vec![#(#required_values),*];
            #(#optional_pushes)*
        }
    };

    let docs = doc_attrs(field.description());
    let deprecated = field.is_deprecated().then(|| match field.deprecation_reason() {
        Some(reason) => quote! { #[deprecated(note = #reason)] },
        None => quote! { #[deprecated] },
    });

    let signature_and_body = match evaluation {
        FieldEvaluation::Resolved { list } => {
            let unsupported = || CodegenError::UnsupportedReturnShape {
                type_name: object.name().to_string(),
                field: field.name().to_string(),
                type_ref: field.type_ref().to_string(),
            };
            let return_type = ctx.resolved_type(field.type_ref(), &unsupported)?;
            let executor = if list {
                quote! { #rt::engine::execute_list }
            } else {
                quote! { #rt::engine::execute }
            };
            quote! {
                pub async fn #method(
                    &self,
                    #(#params),*
                ) -> ::std::result::Result<#return_type, #rt::engine::ExecutionError> {
                    #arguments
                    let __query = self.query.select_with_args(#field_name, __arguments);
                    #executor(&*self.client, &__query).await
                }
            }
        },
        FieldEvaluation::Pending { object_type, list: false } => {
            let returned = ctx.named_type(object_type.as_str())?;
            quote! {
                pub fn #method(&self, #(#params),*) -> #returned {
                    #arguments
                    let __query = self.query.select_with_args(#field_name, __arguments);
                    <#returned as #rt::engine::Object>::from_query(
                        __query,
                        ::std::clone::Clone::clone(&self.client),
                    )
                }
            }
        },
        FieldEvaluation::Pending { object_type, list: true } => {
            let returned = ctx.named_type(object_type.as_str())?;
            let load_field = format!("load{object_type}FromID");
            quote! {
                pub fn #method(
                    &self,
                    #(#params),*
                ) -> #rt::engine::ObjectList<#returned> {
                    #arguments
                    let __query = self.query.select_object_list(#field_name, __arguments);
                    #rt::engine::ObjectList::new(
                        __query,
                        ::std::clone::Clone::clone(&self.client),
                        #load_field,
                    )
                }
            }
        },
    };

    Ok(quote! {
        #(#docs)*
        #deprecated
        #signature_and_body
    })
}
