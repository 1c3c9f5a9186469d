//! Derive macros for Probity property-based testing.
//!
//! This crate provides `#[derive(Arbitrary)]` for structs and enums whose
//! fields all implement `probity::Arbitrary`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Generics};

/// Derive macro implementing `probity::Arbitrary`.
///
/// Field `i` is generated at `(level + i, seed + i)`, so sibling fields are
/// decorrelated the same way sequence elements are. At level 0 every field
/// is generated at level 0. Enums pick a variant from the seed, except at
/// level 0 where the first variant is used. Derived values do not shrink.
///
/// # Example
///
/// ```rust,ignore
/// use probity::*;
///
/// #[derive(Arbitrary, Debug, Clone, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let origin = Point::generate(0, 42);
/// assert_eq!(origin, Point { x: 0, y: 0 });
/// ```
#[proc_macro_derive(Arbitrary)]
pub fn derive_arbitrary(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match arbitrary_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Generate the implementation of the Arbitrary trait.
fn arbitrary_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;
    let generics = add_trait_bounds(input.generics.clone(), &input.data);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (generate_body, generate_n_body) = match &input.data {
        Data::Struct(data) => (
            construct(quote!(Self), &data.fields, Mode::Level),
            construct(quote!(Self), &data.fields, Mode::Exact),
        ),
        Data::Enum(data) => {
            if data.variants.is_empty() {
                return Err(syn::Error::new_spanned(
                    input,
                    "Arbitrary derive macro requires at least one enum variant",
                ));
            }
            (
                enum_body(data, Mode::Level),
                enum_body(data, Mode::Exact),
            )
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Arbitrary derive macro does not support unions",
            ));
        }
    };

    let expanded = quote! {
        impl #impl_generics ::probity::Arbitrary for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn generate(level: usize, seed: u64) -> Self {
                #generate_body
            }

            #[allow(unused_variables)]
            fn generate_n(n: usize, seed: u64) -> Self {
                #generate_n_body
            }
        }
    };

    Ok(expanded)
}

/// Require every type parameter and every field type of a generic type to be
/// Arbitrary.
fn add_trait_bounds(mut generics: Generics, data: &Data) -> Generics {
    if generics.type_params().next().is_none() {
        return generics;
    }

    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::probity::Arbitrary));
        }
    }

    let field_types: Vec<syn::Type> = match data {
        Data::Struct(data) => data.fields.iter().map(|field| field.ty.clone()).collect(),
        Data::Enum(data) => data
            .variants
            .iter()
            .flat_map(|variant| variant.fields.iter().map(|field| field.ty.clone()))
            .collect(),
        Data::Union(_) => Vec::new(),
    };

    let where_clause = generics.make_where_clause();
    for ty in field_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::probity::Arbitrary));
    }
    generics
}

#[derive(Clone, Copy)]
enum Mode {
    /// `generate(level, seed)`
    Level,
    /// `generate_n(n, seed)`
    Exact,
}

/// Expression generating field `index`, offset past `skip` seeds.
fn field_value(ty: &syn::Type, index: usize, skip: u64, mode: Mode) -> TokenStream2 {
    let offset = index as u64 + skip;
    match mode {
        Mode::Level => quote! {
            <#ty as ::probity::Arbitrary>::generate(
                if level == 0 { 0 } else { level.wrapping_add(#index) },
                seed.wrapping_add(#offset),
            )
        },
        Mode::Exact => quote! {
            <#ty as ::probity::Arbitrary>::generate_n(n, seed.wrapping_add(#offset))
        },
    }
}

/// Build `path { .. }`, `path(..)` or `path` from generated fields.
fn construct(path: TokenStream2, fields: &Fields, mode: Mode) -> TokenStream2 {
    construct_with_skip(path, fields, mode, 0)
}

fn construct_with_skip(path: TokenStream2, fields: &Fields, mode: Mode, skip: u64) -> TokenStream2 {
    match fields {
        Fields::Named(named) => {
            let assignments = named.named.iter().enumerate().map(|(i, field)| {
                let field_name = &field.ident;
                let value = field_value(&field.ty, i, skip, mode);
                quote! { #field_name: #value }
            });
            quote! { #path { #(#assignments),* } }
        }
        Fields::Unnamed(unnamed) => {
            let values = unnamed
                .unnamed
                .iter()
                .enumerate()
                .map(|(i, field)| field_value(&field.ty, i, skip, mode));
            quote! { #path(#(#values),*) }
        }
        Fields::Unit => path,
    }
}

/// Select a variant from the seed and build it.
fn enum_body(data: &syn::DataEnum, mode: Mode) -> TokenStream2 {
    let count = data.variants.len() as u64;
    // The variant choice consumes the first seed, fields start one past it.
    let arms = data.variants.iter().enumerate().map(|(i, variant)| {
        let variant_name = &variant.ident;
        let index = i as u64;
        let value = construct_with_skip(quote!(Self::#variant_name), &variant.fields, mode, 1);
        quote! { #index => #value, }
    });

    let choice = match mode {
        Mode::Level => quote! {
            if level == 0 { 0 } else { ::probity::mix(seed) % #count }
        },
        Mode::Exact => quote! { ::probity::mix(seed) % #count },
    };

    let first = &data.variants[0].ident;
    let fallback = construct_with_skip(quote!(Self::#first), &data.variants[0].fields, mode, 1);

    quote! {
        match #choice {
            #(#arms)*
            _ => #fallback,
        }
    }
}
