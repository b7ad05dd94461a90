// prose-core-client/prose-proc-macros
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Implements `From<&AppDependencies>` for a service. Fields marked with `#[inject]` are cloned
/// from the field of the same name in `crate::app::deps::AppDependencies`, all others are
/// initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    expand_inject_deps(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates a `{Name}Dependencies` struct with one public field per field of `Name` and a
/// `From` conversion into `Name`. Lets tests wire up mocks without a constructor per service.
#[proc_macro_derive(DependenciesStruct)]
pub fn dependencies_struct(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    expand_dependencies_struct(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_inject_deps(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let initializers = named_fields(input)?.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let is_injected = field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("inject"));

        Some(if is_injected {
            quote! { #ident: deps.#ident.clone() }
        } else {
            quote! { #ident: Default::default() }
        })
    });

    Ok(quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    })
}

fn expand_dependencies_struct(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let vis = &input.vis;
    let dependencies_name = format_ident!("{}Dependencies", name);
    let fields = named_fields(input)?;

    let idents = fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .collect::<Vec<_>>();
    let types = fields.iter().map(|field| &field.ty);

    Ok(quote! {
        #vis struct #dependencies_name {
            #(pub #idents: #types,)*
        }

        impl From<#dependencies_name> for #name {
            fn from(deps: #dependencies_name) -> Self {
                Self {
                    #(#idents: deps.#idents,)*
                }
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Only structs are supported.",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Only structs with named fields are supported.",
        ));
    };

    Ok(&fields.named)
}
