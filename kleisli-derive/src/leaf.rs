//! Implementation of the `#[derive(Leaf)]` macro.
//!
//! Generates a `Nested<M>` implementation, for every monad `M`, that treats
//! the deriving type as a leaf: flattening wraps it with `M::unit` instead of
//! unwrapping it.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput};

/// Main implementation of the Leaf derive macro.
pub fn derive_leaf_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_leaf(&input))
}

/// Builds the `Nested` implementation for `input`.
pub(crate) fn expand_leaf(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    let mut extended_generics = input.generics.clone();
    extended_generics
        .params
        .push(parse_quote!(__KleisliMonad: ::kleisli::typeclass::Monad));

    let (impl_generics, _, _) = extended_generics.split_for_impl();
    let (_, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::kleisli::typeclass::Nested<__KleisliMonad> for #name #type_generics #where_clause {
            type Layer = Self;
            type Leaf = Self;

            #[inline]
            fn shallow(
                self,
            ) -> <__KleisliMonad as ::kleisli::typeclass::TypeConstructor>::WithType<Self> {
                <__KleisliMonad as ::kleisli::typeclass::Monad>::unit(self)
            }

            #[inline]
            fn deep(
                self,
            ) -> <__KleisliMonad as ::kleisli::typeclass::TypeConstructor>::WithType<Self> {
                <__KleisliMonad as ::kleisli::typeclass::Monad>::unit(self)
            }
        }
    }
}
