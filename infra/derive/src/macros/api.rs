use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemFn, ItemStruct, Lit, LitStr, Meta, Token};

const DEFAULT_RENAME: &str = "camelCase";

/// Expands `#[api_model]`: serde derives, camelCase policy and an optional `ToSchema`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let rename_all = match parse_rename_all(args) {
        Ok(rename_all) => rename_all,
        Err(err) => return err.to_compile_error(),
    };

    let present = derived_trait_names(&input.attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Serialize") {
        derives.push(quote! { ::serde::Serialize });
    }
    if !present.contains("Deserialize") {
        derives.push(quote! { ::serde::Deserialize });
    }
    let derive_attr = if derives.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derives),*)] }
    };

    let schema_attr = if present.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename_attr = match existing_rename_all(&input.attrs) {
        Some(existing) if existing.value() != rename_all.value() => {
            return syn::Error::new_spanned(
                existing,
                "serde rename_all conflicts with the api_model(rename_all = ...) argument",
            )
            .to_compile_error();
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename_all)] },
    };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #input
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_rename_all(args: TokenStream) -> syn::Result<LitStr> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut rename_all = None;

    for meta in metas {
        let pair = match meta {
            Meta::NameValue(pair) => pair,
            other => {
                return Err(syn::Error::new_spanned(other, "expected `rename_all = \"...\"`"));
            }
        };
        if !pair.path.is_ident("rename_all") {
            return Err(syn::Error::new_spanned(pair.path, "unsupported api_model argument"));
        }
        if rename_all.is_some() {
            return Err(syn::Error::new_spanned(pair, "duplicate rename_all argument"));
        }
        match pair.value {
            Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => rename_all = Some(lit),
            other => {
                return Err(syn::Error::new_spanned(other, "rename_all must be a string literal"));
            }
        }
    }

    Ok(rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site())))
}

fn existing_rename_all(attrs: &[Attribute]) -> Option<LitStr> {
    let mut found = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }

    found
}
