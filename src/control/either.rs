//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. `Either` itself has no
//! preferred side, so it is not a monad; its projections are:
//!
//! - [`Either::left`] gives a [`LeftProjection`] that treats `Left` as present
//! - [`Either::right`] gives a [`RightProjection`] that treats `Right` as present
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//! use kleisli::typeclass::Monad;
//!
//! let parsed: Either<String, i32> = Either::Right(21);
//!
//! let doubled = parsed.right().map(|n| n * 2).into_either();
//! assert_eq!(doubled, Either::Right(42));
//!
//! let message = doubled.fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(message, "got 42");
//! ```

use std::fmt;

use super::projection::{LeftProjection, RightProjection};
use crate::typeclass::{Monad, Nested};

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` is often used to represent failure, error, or the first alternative
/// - `Right` is often used to represent success or the second alternative
///
/// Equality is structural: two values are equal when they have the same
/// variant and equal contents.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
///
/// let failure: Either<&str, i32> = Either::Left("error");
/// assert_eq!(failure.swap(), Either::Right("error"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("error");
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(42);
    /// assert!(right.is_right());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Views this `Either` through its left side.
    ///
    /// The projection takes ownership without copying; call
    /// [`as_ref`](Either::as_ref) first to project over a borrow instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("error");
    /// assert_eq!(left.left().get(), Ok("error"));
    /// ```
    #[inline]
    pub const fn left(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// Views this `Either` through its right side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(42);
    /// assert_eq!(right.right().get(), Ok(42));
    /// assert!(right.left().get().is_err());
    /// ```
    #[inline]
    pub const fn right(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let owned: Either<String, i32> = Either::Left("error".to_string());
    /// assert!(owned.as_ref().left().all(|s| s.len() == 5));
    /// assert!(owned.is_left());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let right: Either<i32, i32> = Either::Right(42);
    /// assert_eq!(right.fold(|x| x * 2, |x| x * 10), 420);
    ///
    /// let left: Either<String, usize> = Either::Left("error".to_string());
    /// assert_eq!(left.fold(|s| s.repeat(2), |n| n.to_string()), "errorerror");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.swap(), Either::Left("hello".to_string()));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// An `Either` is a plain value inside any container.
impl<L, R, M: Monad> Nested<M> for Either<L, R> {
    type Layer = Self;
    type Leaf = Self;

    #[inline]
    fn shallow(self) -> M::WithType<Self> {
        M::unit(self)
    }

    #[inline]
    fn deep(self) -> M::WithType<Self> {
        M::unit(self)
    }
}
