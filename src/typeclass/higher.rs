//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` or
//! `Vec<_>` directly. [`TypeConstructor`] works around this with a GAT,
//! which is what lets [`Monad`](super::Monad) say "the same container, holding
//! a different type" in the signature of `bind`.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::TypeConstructor;
//!
//! fn retype<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: Vec<i32> = vec![1, 2, 3];
//! let strings: Vec<String> = retype(numbers);
//! assert!(strings.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// The compiler cannot see this equivalence, which is why operations that
/// keep the element type (such as `select`) are typed as
/// `Self::WithType<Self::Inner>` rather than `Self`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Vec<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
