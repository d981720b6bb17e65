use crate::function_method::FunctionMethod;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;

const FUNCTION_ATTR: &str = "function";

/// Expands `#[object] impl T { .. }` into the (marker-free) `impl` block
/// followed by `impl ModuleObject for T`.
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new(attr.span(), "`#[object]` does not take arguments"));
    }

    let mut item_impl: syn::ItemImpl = syn::parse2(item).map_err(|err| {
        syn::Error::new(err.span(), "`#[object]` can only be applied to an `impl` block")
    })?;

    if let Some((_, trait_path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new(
            trait_path.span(),
            "`#[object]` must be applied to an inherent `impl` block, not a trait `impl`",
        ));
    }
    if !item_impl.generics.params.is_empty() {
        return Err(syn::Error::new(
            item_impl.generics.span(),
            "generic types cannot be exposed with `#[object]`",
        ));
    }

    let type_name = match item_impl.self_ty.as_ref() {
        syn::Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
    .ok_or_else(|| {
        syn::Error::new(
            item_impl.self_ty.span(),
            "`#[object]` requires an `impl` block for a named type",
        )
    })?;

    let mut functions = vec![];
    for impl_item in item_impl.items.iter_mut() {
        let syn::ImplItem::Fn(method) = impl_item else {
            continue;
        };
        if take_function_attr(&mut method.attrs)? {
            functions.push(FunctionMethod::from_method(method)?);
        }
    }

    let self_ty = &item_impl.self_ty;
    let specs = functions.iter().map(FunctionMethod::to_spec_tokens);
    Ok(quote! {
        #item_impl

        impl daggerql::dispatch::ModuleObject for #self_ty {
            const NAME: &'static str = #type_name;

            fn functions() -> ::std::vec::Vec<daggerql::dispatch::FunctionSpec<Self>> {
                ::std::vec![#(#specs),*]
            }
        }
    })
}

/// Removes `#[function]` from `attrs`, returning whether it was present.
fn take_function_attr(attrs: &mut Vec<syn::Attribute>) -> syn::Result<bool> {
    let mut found = false;
    let mut kept = Vec::with_capacity(attrs.len());
    for attr in attrs.drain(..) {
        if !attr.path().is_ident(FUNCTION_ATTR) {
            kept.push(attr);
            continue;
        }
        if !matches!(attr.meta, syn::Meta::Path(_)) {
            return Err(syn::Error::new(attr.span(), "`#[function]` does not take arguments"));
        }
        found = true;
    }
    *attrs = kept;
    Ok(found)
}
