use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, LitStr};

pub fn derive_catalog_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !matches!(input.data, Data::Struct(_)) {
        return syn::Error::new_spanned(name, "CatalogRecord can only be derived for structs")
            .to_compile_error()
            .into();
    }

    let object_type = match extract_object_type(&input) {
        Ok(object_type) => object_type,
        Err(err) => return err.to_compile_error().into(),
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics storefront_catalog::RecordMetadata for #name #ty_generics #where_clause {
            const OBJECT_TYPE: &'static str = #object_type;
        }
    };

    TokenStream::from(expanded)
}

fn extract_object_type(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        let mut object_type = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("object_type") {
                let value: LitStr = meta.value()?.parse()?;
                object_type = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute, expected `object_type`"))
            }
        })?;

        if let Some(object_type) = object_type {
            if object_type.is_empty() {
                return Err(syn::Error::new_spanned(attr, "object_type must not be empty"));
            }
            return Ok(object_type);
        }
    }

    // Default: snake_case struct name without `_metadata`, pluralized
    let snake = to_snake_case(&input.ident.to_string());
    let stem = snake.strip_suffix("_metadata").unwrap_or(&snake);
    Ok(format!("{}s", stem))
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
