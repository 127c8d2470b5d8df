//! RequestDto derive implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse2, Attribute, Data, DeriveInput, Error, Fields, LitStr, Result};

pub fn derive_request_dto(input: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    let type_name = match extract_name(&input.attrs)? {
        Some(lit) => lit.value(),
        None => name.unraw().to_string(),
    };

    let Data::Struct(data_struct) = &input.data else {
        return Err(Error::new_spanned(name, "RequestDto can only be derived for structs"));
    };

    let mut fields = Vec::new();
    match &data_struct.fields {
        Fields::Named(named) => {
            for field in &named.named {
                if is_skipped(&field.attrs)? {
                    continue;
                }
                if let Some(ident) = &field.ident {
                    fields.push(ident.unraw().to_string());
                }
            }
        }
        Fields::Unit => {}
        Fields::Unnamed(unnamed) => {
            return Err(Error::new_spanned(
                unnamed,
                "RequestDto needs named fields; tuple structs have no property names",
            ));
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::restroute_core::service::RequestDto
            for #name #ty_generics #where_clause
        {
            fn type_name() -> &'static str {
                #type_name
            }

            fn field_names() -> &'static [&'static str] {
                &[#(#fields),*]
            }
        }
    })
}

/// `#[request(name = "...")]` on the struct
fn extract_name(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut name = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("request")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(Error::new_spanned(&lit, "request name cannot be empty"));
                }
                name = Some(lit);
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name)
}

/// `#[request(skip)]` on a field
fn is_skipped(attrs: &[Attribute]) -> Result<bool> {
    let mut skip = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("request")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip`"))
            }
        })?;
    }

    Ok(skip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> String {
        derive_request_dto(input).unwrap().to_string()
    }

    #[test]
    fn test_named_fields_in_declaration_order() {
        let out = expand(quote! {
            struct Booking {
                id: u64,
                r#type: String,
                #[request(skip)]
                trace: Option<String>,
                user_id: String,
            }
        });

        assert!(out.contains("\"Booking\""));
        assert!(out.contains("& [\"id\" , \"type\" , \"user_id\"]"));
        assert!(!out.contains("trace"));
    }

    #[test]
    fn test_name_override_and_generics() {
        let out = expand(quote! {
            #[request(name = "Page")]
            struct PageRequest<T: 'static> where T: Clone {
                items: Vec<T>,
            }
        });

        assert!(out.contains("\"Page\""));
        assert!(out.contains("for PageRequest < T >"));
        assert!(out.contains("where T : Clone"));
    }

    #[test]
    fn test_unit_struct_has_no_fields() {
        let out = expand(quote! { struct Ping; });
        assert!(out.contains("\"Ping\""));
        assert!(out.contains("& []"));
    }

    #[test]
    fn test_rejects_enums_and_tuple_structs() {
        let err = derive_request_dto(quote! { enum Kind { A } }).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));

        let err = derive_request_dto(quote! { struct Pair(u8, u8); }).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_unknown_options() {
        let err = derive_request_dto(quote! {
            #[request(rename = "X")]
            struct Ping;
        })
        .unwrap_err();
        assert!(err.to_string().contains("name"));

        let err = derive_request_dto(quote! {
            #[request(name = "")]
            struct Ping;
        })
        .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
