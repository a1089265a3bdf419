extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, LitStr};

/// Derives `gridify::Gridifiable`, registering one field mapping per named
/// field. The mapping table is generated at build time; there is no runtime
/// reflection.
///
/// Field attributes:
///
/// - `#[gridify(skip)]` — exclude the field (nested records, unmappable
///   types)
/// - `#[gridify(rename = "...")]` — register under a different DSL name
#[proc_macro_derive(Gridifiable, attributes(gridify))]
pub fn derive_gridifiable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct FieldAttrs {
    skip: bool,
    rename: Option<String>,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Gridifiable can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Gridifiable requires named fields",
        ));
    };

    let mut registrations = Vec::new();

    for field in &fields.named {
        let attrs = field_attrs(field)?;

        if attrs.skip {
            continue;
        }

        let ident = field.ident.as_ref().expect("named field");
        let name = attrs.rename.unwrap_or_else(|| ident.to_string());

        registrations.push(quote! {
            mapper.add_map(#name, |record: &Self| ::core::clone::Clone::clone(&record.#ident));
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        const _: () = {
            impl #impl_generics ::gridify::Gridifiable for #ident #ty_generics #where_clause {
                fn register_mappings(mapper: &mut ::gridify::FieldMapper<Self>) {
                    #(#registrations)*
                }
            }
        };
    })
}

fn field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs {
        skip: false,
        rename: None,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("gridify") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                attrs.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                attrs.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        })?;
    }

    Ok(attrs)
}
