//! Monad type class - sequencing computations within a context.
//!
//! A container opts into [`Monad`] by supplying exactly two primitives:
//!
//! - `unit`: wrap a plain value
//! - `bind`: feed the contained value(s) to a function that returns a
//!   container of the same family
//!
//! Every other operation (`map`, `flat_map`, `flatten`, `shallow_flatten`,
//! `each`) is a provided method written purely in terms of those two, so its
//! behaviour is fixed once `unit` and `bind` are. [`MonadEmpty`] adds a third
//! primitive, `empty`, and derives `select` from it.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::unit(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Monad, MonadEmpty};
//!
//! let pairs = vec![1, 2, 3].bind(|n| vec![n, n * 10]);
//! assert_eq!(pairs, vec![1, 10, 2, 20, 3, 30]);
//!
//! let odd = vec![1, 2, 3, 4, 5].select(|n| n % 2 == 1);
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

use super::higher::TypeConstructor;
use super::nested::Nested;

/// A type class for types that support sequencing of computations.
///
/// Implementors provide [`unit`](Monad::unit) and [`bind`](Monad::bind); the
/// remaining methods are derived and must not be overridden with behaviour
/// that differs from their derivation.
///
/// `bind` takes an `FnMut` because a sequence calls the function once per
/// element. Single-valued containers call it at most once.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::unit(a).bind(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.bind(Self::unit) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Monad;
///
/// let doubled = vec![21].map(|n| n * 2);
/// assert_eq!(doubled, vec![42]);
///
/// let halved = vec![10, 7, 4].bind(|n| {
///     if n % 2 == 0 { vec![n / 2] } else { Vec::new() }
/// });
/// assert_eq!(halved, vec![5, 2]);
/// ```
pub trait Monad: TypeConstructor + Sized {
    /// Wraps a bare value into this container family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let single: Vec<&str> = <Vec<()>>::unit("only");
    /// assert_eq!(single, vec!["only"]);
    /// ```
    fn unit<B>(value: B) -> Self::WithType<B>;

    /// Sequences `function` over the contained value(s).
    ///
    /// `function` is invoked exactly once per present value and never for an
    /// absent one; an absent container yields its own absent representation.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let absent: Vec<i32> = Vec::new();
    /// let result = absent.bind(|n| vec![n, n + 1]);
    /// assert!(result.is_empty());
    ///
    /// assert_eq!(vec![1, 10].bind(|n| vec![n, n + 1]), vec![1, 2, 10, 11]);
    /// ```
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Applies `function` to each value and wraps each result with `unit`.
    ///
    /// Derived as `bind(|v| unit(function(v)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let lengths = vec!["a", "bb", "ccc"].map(str::len);
    /// assert_eq!(lengths, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn map<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        self.bind(move |value| Self::unit(function(value)))
    }

    /// Identical to [`bind`](Monad::bind).
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Unwraps nested containers of this family until only leaf values remain.
    ///
    /// Derived as `bind(|v| if v is a container { v.flatten() } else { unit(v) })`,
    /// where "is a container" is decided at compile time by [`Nested`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let nested = vec![vec![vec![1, 2]], vec![vec![3], vec![]]];
    /// assert_eq!(nested.flatten(), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Self::WithType<<Self::Inner as Nested<Self>>::Leaf>
    where
        Self::Inner: Nested<Self>,
    {
        self.bind(<Self::Inner as Nested<Self>>::deep)
    }

    /// Unwraps exactly one level of nesting, leaving deeper structure intact.
    ///
    /// Derived as `bind(|v| if v is a container { v } else { unit(v) })`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let nested = vec![vec![vec![1, 2]], vec![vec![3]]];
    /// assert_eq!(nested.shallow_flatten(), vec![vec![1, 2], vec![3]]);
    /// ```
    #[inline]
    fn shallow_flatten(self) -> Self::WithType<<Self::Inner as Nested<Self>>::Layer>
    where
        Self::Inner: Nested<Self>,
    {
        self.bind(<Self::Inner as Nested<Self>>::shallow)
    }

    /// Runs `function` for its side effect on every present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let mut total = 0;
    /// vec![1, 2, 3].each(|n| total += n);
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn each<F>(self, mut function: F)
    where
        F: FnMut(Self::Inner),
    {
        let _ = self.bind(move |value| {
            function(value);
            Self::unit(())
        });
    }
}

/// A [`Monad`] with an identity value for filtering.
///
/// `empty` is the container that holds nothing. It is what
/// [`select`](MonadEmpty::select) substitutes for every rejected value.
///
/// # Laws
///
/// `empty` absorbs `bind`:
///
/// ```text
/// Self::empty().bind(f) == Self::empty()
/// ```
pub trait MonadEmpty: Monad {
    /// The container holding no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::MonadEmpty;
    ///
    /// let nothing: Vec<u8> = <Vec<()>>::empty();
    /// assert!(nothing.is_empty());
    /// ```
    fn empty<B>() -> Self::WithType<B>;

    /// Keeps the values for which `predicate` returns `true`.
    ///
    /// Derived as `bind(|v| if predicate(&v) { unit(v) } else { empty() })`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::MonadEmpty;
    ///
    /// assert_eq!(vec![4].select(|n| n % 2 == 0), vec![4]);
    /// assert_eq!(vec![1, 2, 3, 4].select(|n| n % 2 == 0), vec![2, 4]);
    /// ```
    #[inline]
    fn select<P>(self, mut predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.bind(move |value| {
            if predicate(&value) {
                Self::unit(value)
            } else {
                Self::empty()
            }
        })
    }

    /// Alias for [`select`](MonadEmpty::select).
    #[inline]
    fn filter<P>(self, predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.select(predicate)
    }
}

// =============================================================================
// Vec<T> Implementation
//
// The sequence adapter: `bind` applies the function to each element in order
// and concatenates the results.
// =============================================================================

impl<T> Monad for Vec<T> {
    #[inline]
    fn unit<B>(value: B) -> Vec<B> {
        vec![value]
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> MonadEmpty for Vec<T> {
    #[inline]
    fn empty<B>() -> Vec<B> {
        Vec::new()
    }
}
