//! Derive macros for kleisli.
//!
//! # Available Derive Macros
//!
//! - [`Leaf`]: Marks a type as a leaf value for `flatten` and `shallow_flatten`
//!
//! The macros are re-exported by `kleisli` as `kleisli::Leaf`. Depend on
//! `kleisli` with the `derive` feature rather than on this crate directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod leaf;

use proc_macro::TokenStream;

/// Derive macro that makes a type a leaf for the `flatten` family.
///
/// Flattening unwraps containers of the same family and wraps everything
/// else with `unit`. Whether a stored value "is a container" is decided by
/// the `kleisli::typeclass::Nested` trait; this derive implements it for
/// every monad `M` so that the type is always wrapped, never unwrapped.
///
/// # Generated Code
///
/// ```text
/// impl<M: ::kleisli::typeclass::Monad> ::kleisli::typeclass::Nested<M> for TypeName {
///     type Layer = Self;
///     type Leaf = Self;
///     fn shallow(self) -> M::WithType<Self> { M::unit(self) }
///     fn deep(self) -> M::WithType<Self> { M::unit(self) }
/// }
/// ```
///
/// # Generics
///
/// Generic structs and enums are supported; the type's own parameters and
/// `where` clause are carried over unchanged.
#[proc_macro_derive(Leaf)]
pub fn derive_leaf(input: TokenStream) -> TokenStream {
    leaf::derive_leaf_impl(input)
}
