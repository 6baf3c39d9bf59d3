//! Reflect derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics};

/// Main entry point for the Reflect derive macro.
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_reflect_impl(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    validate_struct(&input)?;

    let ident = input.ident.clone();
    let name = generate_name(&ident.to_string(), &input.generics);

    add_reflect_bounds(&mut input.generics);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::kind::Reflect for #ident #ty_generics #where_clause {
            fn type_desc() -> ::kind::TypeDesc {
                ::kind::TypeDesc::structure(#name)
            }
        }
    })
}

/// Only structs describe themselves as a `Struct` leaf.
fn validate_struct(input: &DeriveInput) -> syn::Result<()> {
    match &input.data {
        Data::Struct(_) => Ok(()),
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect derive only supports structs",
        )),
    }
}

/// Build the expression producing the canonical name.
///
/// Lifetimes are left out, the way `Vec<&str>` never spells them.
fn generate_name(base: &str, generics: &Generics) -> TokenStream2 {
    let args: Vec<TokenStream2> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                Some(quote! {
                    ::std::borrow::ToOwned::to_owned(
                        <#ident as ::kind::Reflect>::type_desc().name()
                    )
                })
            }
            GenericParam::Const(konst) => {
                let ident = &konst.ident;
                Some(quote! { ::std::string::ToString::to_string(&#ident) })
            }
            GenericParam::Lifetime(_) => None,
        })
        .collect();

    if args.is_empty() {
        return quote! { #base };
    }

    quote! {
        {
            let args: &[::std::string::String] = &[#(#args),*];
            ::std::format!("{}<{}>", #base, args.join(", "))
        }
    }
}

/// Every type parameter must describe itself for the name to be built.
fn add_reflect_bounds(generics: &mut Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::kind::Reflect));
        }
    }
}
