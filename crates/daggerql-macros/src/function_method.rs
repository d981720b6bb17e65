use proc_macro2::TokenStream;
use quote::format_ident;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;

enum Receiver {
    Ref,
    RefMut,
    Value,
}

struct Param {
    ident: syn::Ident,
    decode_ty: syn::Type,
    by_ref: bool,
}

/// A method marked `#[function]`.
pub(crate) struct FunctionMethod {
    ident: syn::Ident,
    description: Option<String>,
    receiver: Receiver,
    params: Vec<Param>,
    is_async: bool,
    returns_result: bool,
}
impl FunctionMethod {
    pub(crate) fn from_method(method: &syn::ImplItemFn) -> syn::Result<Self> {
        let sig = &method.sig;
        if !matches!(method.vis, syn::Visibility::Public(_)) {
            return Err(syn::Error::new(
                sig.ident.span(),
                "`#[function]` methods must be `pub`",
            ));
        }
        if !sig.generics.params.is_empty() {
            return Err(syn::Error::new(
                sig.generics.span(),
                "generic methods cannot be exposed with `#[function]`",
            ));
        }

        let mut inputs = sig.inputs.iter();
        let receiver = match inputs.next() {
            Some(syn::FnArg::Receiver(receiver)) if receiver.colon_token.is_none() => {
                match (&receiver.reference, &receiver.mutability) {
                    (Some(_), Some(_)) => Receiver::RefMut,
                    (Some(_), None) => Receiver::Ref,
                    (None, _) => Receiver::Value,
                }
            },
            _ => return Err(syn::Error::new(
                sig.span(),
                "`#[function]` methods must take `self`, `&self` or `&mut self`",
            )),
        };

        let params = inputs.map(Param::from_fn_arg).collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: sig.ident.clone(),
            description: doc_description(method.attrs.as_slice()),
            receiver,
            params,
            is_async: sig.asyncness.is_some(),
            returns_result: match &sig.output {
                syn::ReturnType::Default => false,
                syn::ReturnType::Type(_, ty) => is_result_type(ty),
            },
        })
    }

    /// A `FunctionSpec::new(..)` expression that decodes every argument,
    /// invokes the method and encodes what it returns.
    pub(crate) fn to_spec_tokens(&self) -> TokenStream {
        let parent = format_ident!("__daggerql_parent");
        let args = format_ident!("__daggerql_args");
        let result = format_ident!("__daggerql_result");

        let function_name = self.ident.unraw().to_string();
        let arg_names = self.params.iter().map(|param| param.ident.unraw().to_string());
        let decodes = self.params.iter().map(|param| {
            let ident = &param.ident;
            let decode_ty = &param.decode_ty;
            let name = ident.unraw().to_string();
            quote! { let #ident: #decode_ty = #args.decode(#name)?; }
        });
        let call_args = self.params.iter().map(|param| {
            let ident = &param.ident;
            if param.by_ref {
                quote! { &#ident }
            } else {
                quote! { #ident }
            }
        });

        let method = &self.ident;
        let mut call = quote! { #parent.#method(#(#call_args),*) };
        if self.is_async {
            call = quote! { #call.await };
        }
        if self.returns_result {
            call = quote! {
                #call.map_err(|err| daggerql::dispatch::function_failed(#args.function(), err))?
            };
        }

        let parent_binding = match self.receiver {
            Receiver::RefMut => quote! { mut #parent },
            Receiver::Ref | Receiver::Value => quote! { #parent },
        };
        let description = self.description.as_ref().map(|description| {
            quote! { .with_description(#description) }
        });

        quote! {
            daggerql::dispatch::FunctionSpec::new(
                #function_name,
                &[#(#arg_names),*],
                |#parent_binding: Self, #args: daggerql::dispatch::InputArgs|
                    -> daggerql::dispatch::FunctionFuture {
                    ::std::boxed::Box::pin(async move {
                        #(#decodes)*
                        let #result = #call;
                        daggerql::dispatch::encode_result(#args.function(), #result)
                    })
                },
            )
            #description
        }
    }
}

impl Param {
    fn from_fn_arg(arg: &syn::FnArg) -> syn::Result<Self> {
        let syn::FnArg::Typed(pat_type) = arg else {
            return Err(syn::Error::new(arg.span(), "unexpected receiver"));
        };

        let ident = match pat_type.pat.as_ref() {
            syn::Pat::Ident(pat_ident) if pat_ident.by_ref.is_none() && pat_ident.subpat.is_none() => {
                pat_ident.ident.clone()
            },
            other => return Err(syn::Error::new(
                other.span(),
                "`#[function]` arguments must be plain identifiers",
            )),
        };

        match pat_type.ty.as_ref() {
            syn::Type::Reference(reference) if reference.mutability.is_some() => Err(syn::Error::new(
                reference.span(),
                "`#[function]` arguments cannot be `&mut` references",
            )),
            syn::Type::Reference(reference) => Ok(Self {
                ident,
                decode_ty: owned_type(reference.elem.as_ref()),
                by_ref: true,
            }),
            ty => Ok(Self {
                ident,
                decode_ty: ty.clone(),
                by_ref: false,
            }),
        }
    }
}

/// The owned type a borrowed argument is decoded into: `String` for `str`,
/// `Vec<T>` for `[T]`, `T` otherwise.
fn owned_type(elem: &syn::Type) -> syn::Type {
    match elem {
        syn::Type::Path(type_path) if type_path.qself.is_none() && type_path.path.is_ident("str") => {
            syn::parse_quote! { ::std::string::String }
        },
        syn::Type::Slice(slice) => {
            let item = &slice.elem;
            syn::parse_quote! { ::std::vec::Vec<#item> }
        },
        other => other.clone(),
    }
}

fn is_result_type(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Result"),
        _ => false,
    }
}

fn doc_description(attrs: &[syn::Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value: syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(doc),
                    ..
                }),
                ..
            }) => Some(doc.value().trim().to_string()),
            _ => None,
        })
        .collect();

    let description = lines.join("\n").trim().to_string();
    (!description.is_empty()).then_some(description)
}
