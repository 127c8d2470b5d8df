//! `#[rest_service]` implementation
//!
//! Scans an `impl RestService for X` block for handler hooks and appends the
//! generated `declared_hooks()` (and `service_name()` when absent).

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::{parse2, parse_quote, Error, ImplItem, ItemImpl, LitStr, Result, Type};

/// Hook names in canonical verb order (GET POST PUT DELETE PATCH)
const HOOKS: [&str; 5] = ["on_get", "on_post", "on_put", "on_delete", "on_patch"];

const TRAIT_NAME: &str = "RestService";

pub fn rest_service_impl(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let mut name: Option<LitStr> = None;
    let attr_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("expected `name = \"...\"`"))
        }
    });
    attr_parser.parse2(attr)?;

    let mut item: ItemImpl = parse2(item)?;

    let Some((_, trait_path, _)) = &item.trait_ else {
        return Err(Error::new_spanned(
            &item.self_ty,
            "#[rest_service] must be placed on an `impl RestService for ...` block",
        ));
    };
    if !trait_path.segments.last().is_some_and(|s| s.ident == TRAIT_NAME) {
        return Err(Error::new_spanned(
            trait_path,
            "#[rest_service] only applies to RestService impls",
        ));
    }

    let mut defined = Vec::new();
    let mut has_service_name = false;

    for impl_item in &item.items {
        let ImplItem::Fn(func) = impl_item else {
            continue;
        };
        let ident = &func.sig.ident;
        if ident == "declared_hooks" {
            return Err(Error::new_spanned(
                ident,
                "declared_hooks() is generated by #[rest_service]; remove it or the attribute",
            ));
        }
        if ident == "service_name" {
            has_service_name = true;
        }
        defined.push(ident.to_string());
    }

    let hooks: Vec<&str> =
        HOOKS.iter().copied().filter(|hook| defined.iter().any(|d| d == hook)).collect();

    match (has_service_name, name) {
        (true, Some(lit)) => {
            return Err(Error::new_spanned(
                lit,
                "service name given twice: drop `name = ...` or the service_name() fn",
            ));
        }
        (true, None) => {}
        (false, name) => {
            let service_name = match name {
                Some(lit) => lit.value(),
                None => self_type_name(&item.self_ty)?,
            };
            item.items.push(parse_quote! {
                fn service_name() -> &'static str {
                    #service_name
                }
            });
        }
    }

    item.items.push(parse_quote! {
        fn declared_hooks() -> &'static [&'static str] {
            &[#(#hooks),*]
        }
    });

    Ok(quote! { #item })
}

/// Last path segment of the implementing type
fn self_type_name(self_ty: &Type) -> Result<String> {
    match self_ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.unraw().to_string())
            .ok_or_else(|| Error::new_spanned(type_path, "empty type path")),
        Type::Group(group) => self_type_name(&group.elem),
        other => Err(Error::new_spanned(
            other,
            "cannot infer a service name for this type; use #[rest_service(name = \"...\")]",
        )),
    }
}
