//! One-sided monadic views over [`Either`].
//!
//! A projection treats one side of an `Either` as "present" and the other as
//! "absent", which gives `Either` the same composition surface as
//! [`Optional`]. Unlike `Optional`, the absent side keeps its value: binding
//! over a `LeftProjection` of a `Right(r)` yields a projection of that same
//! `Right(r)`.
//!
//! The projection owns the `Either` it views and never copies or mutates it.
//! Equality and hashing defer to the wrapped `Either`; the side is part of the
//! type, so a `LeftProjection` and a `RightProjection` are never comparable.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{Either, Optional};
//! use kleisli::typeclass::Monad;
//!
//! let found: Either<&str, i32> = Either::Right(42);
//!
//! assert_eq!(found.right().map(|n| n + 1).into_either(), Either::Right(43));
//! assert_eq!(found.left().map(str::len).into_either(), Either::Right(42));
//!
//! // `select` on a projection answers a question about the whole `Either`.
//! assert_eq!(found.right().select(|n| *n == 42), Optional::Present(found));
//! assert_eq!(found.right().select(|n| *n != 42), Optional::Empty);
//! ```

use super::either::Either;
use super::error::NoSuchElementError;
use super::optional::Optional;
use crate::typeclass::{Monad, MonadEmpty, Nested, TypeConstructor};

// =============================================================================
// LeftProjection
// =============================================================================

/// A view of an [`Either`] in which `Left` is the present side.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
///
/// let left: Either<&str, i32> = Either::Left("error");
/// assert!(left.left().all(|s| *s == "error"));
/// assert!(left.left().any(|s| *s == "error"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    /// Creates a left projection of `either`.
    #[inline]
    pub const fn new(either: Either<L, R>) -> Self {
        Self { either }
    }

    /// Returns the projected `Either`.
    #[inline]
    pub const fn either(&self) -> &Either<L, R> {
        &self.either
    }

    /// Consumes the projection and returns the projected `Either`.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }

    /// Returns the left value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if the `Either` is a `Right`.
    #[inline]
    pub fn get(self) -> Result<L, NoSuchElementError> {
        match self.either {
            Either::Left(value) => Ok(value),
            Either::Right(_) => Err(NoSuchElementError::new("LeftProjection", "Left", "Right")),
        }
    }

    /// Returns `true` if the `Either` is a `Right` (there is nothing to test)
    /// or if `predicate` holds for the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(42);
    /// assert!(right.left().all(|_| false));
    /// ```
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.either {
            Either::Left(value) => predicate(value),
            Either::Right(_) => true,
        }
    }

    /// Returns `true` if the `Either` is a `Left` and `predicate` holds for
    /// its value.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.either {
            Either::Left(value) => predicate(value),
            Either::Right(_) => false,
        }
    }

    /// Returns the whole `Either` if it is a `Left` whose value satisfies
    /// `predicate`, and `Empty` otherwise.
    ///
    /// This shadows [`MonadEmpty::select`], which keeps the result inside the
    /// projection; call `MonadEmpty::select(projection, predicate)` for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::{Either, Optional};
    ///
    /// let left: Either<&str, i32> = Either::Left("error");
    /// assert_eq!(left.left().select(|s| *s == "error"), Optional::Present(left));
    /// assert_eq!(left.left().select(|s| *s != "error"), Optional::Empty);
    /// assert_eq!(left.right().select(|_| true), Optional::Empty);
    /// ```
    #[inline]
    pub fn select<P>(self, predicate: P) -> Optional<Either<L, R>>
    where
        P: FnOnce(&L) -> bool,
    {
        if self.any(predicate) {
            Optional::Present(self.either)
        } else {
            Optional::Empty
        }
    }

    /// Returns the left value as an [`Optional`], discarding a right value.
    #[inline]
    pub fn to_optional(self) -> Optional<L> {
        match self.either {
            Either::Left(value) => Optional::Present(value),
            Either::Right(_) => Optional::Empty,
        }
    }
}

impl<L, R> TypeConstructor for LeftProjection<L, R> {
    type Inner = L;
    type WithType<B> = LeftProjection<B, R>;
}

impl<L, R> Monad for LeftProjection<L, R> {
    #[inline]
    fn unit<B>(value: B) -> LeftProjection<B, R> {
        LeftProjection::new(Either::Left(value))
    }

    #[inline]
    fn bind<B, F>(self, mut function: F) -> LeftProjection<B, R>
    where
        F: FnMut(L) -> LeftProjection<B, R>,
    {
        match self.either {
            Either::Left(value) => function(value),
            Either::Right(value) => LeftProjection::new(Either::Right(value)),
        }
    }
}

/// `empty` is a projection of `Right(R::default())`.
impl<L, R: Default> MonadEmpty for LeftProjection<L, R> {
    #[inline]
    fn empty<B>() -> LeftProjection<B, R> {
        LeftProjection::new(Either::Right(R::default()))
    }
}

impl<T, R, X> Nested<LeftProjection<X, R>> for LeftProjection<T, R>
where
    T: Nested<LeftProjection<X, R>>,
{
    type Layer = T;
    type Leaf = T::Leaf;

    #[inline]
    fn shallow(self) -> Self {
        self
    }

    #[inline]
    fn deep(self) -> LeftProjection<T::Leaf, R> {
        self.bind(<T as Nested<LeftProjection<X, R>>>::deep)
    }
}

// =============================================================================
// RightProjection
// =============================================================================

/// A view of an [`Either`] in which `Right` is the present side.
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    /// Creates a right projection of `either`.
    #[inline]
    pub const fn new(either: Either<L, R>) -> Self {
        Self { either }
    }

    /// Returns the projected `Either`.
    #[inline]
    pub const fn either(&self) -> &Either<L, R> {
        &self.either
    }

    /// Consumes the projection and returns the projected `Either`.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }

    /// Returns the right value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if the `Either` is a `Left`.
    #[inline]
    pub fn get(self) -> Result<R, NoSuchElementError> {
        match self.either {
            Either::Left(_) => Err(NoSuchElementError::new("RightProjection", "Right", "Left")),
            Either::Right(value) => Ok(value),
        }
    }

    /// Returns `true` if the `Either` is a `Left` (there is nothing to test)
    /// or if `predicate` holds for the right value.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.either {
            Either::Left(_) => true,
            Either::Right(value) => predicate(value),
        }
    }

    /// Returns `true` if the `Either` is a `Right` and `predicate` holds for
    /// its value.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.either {
            Either::Left(_) => false,
            Either::Right(value) => predicate(value),
        }
    }

    /// Returns the whole `Either` if it is a `Right` whose value satisfies
    /// `predicate`, and `Empty` otherwise.
    ///
    /// Shadows [`MonadEmpty::select`] in the same way as
    /// [`LeftProjection::select`].
    #[inline]
    pub fn select<P>(self, predicate: P) -> Optional<Either<L, R>>
    where
        P: FnOnce(&R) -> bool,
    {
        if self.any(predicate) {
            Optional::Present(self.either)
        } else {
            Optional::Empty
        }
    }

    /// Returns the right value as an [`Optional`], discarding a left value.
    #[inline]
    pub fn to_optional(self) -> Optional<R> {
        match self.either {
            Either::Left(_) => Optional::Empty,
            Either::Right(value) => Optional::Present(value),
        }
    }
}

impl<L, R> TypeConstructor for RightProjection<L, R> {
    type Inner = R;
    type WithType<B> = RightProjection<L, B>;
}

impl<L, R> Monad for RightProjection<L, R> {
    #[inline]
    fn unit<B>(value: B) -> RightProjection<L, B> {
        RightProjection::new(Either::Right(value))
    }

    #[inline]
    fn bind<B, F>(self, mut function: F) -> RightProjection<L, B>
    where
        F: FnMut(R) -> RightProjection<L, B>,
    {
        match self.either {
            Either::Left(value) => RightProjection::new(Either::Left(value)),
            Either::Right(value) => function(value),
        }
    }
}

/// `empty` is a projection of `Left(L::default())`.
impl<L: Default, R> MonadEmpty for RightProjection<L, R> {
    #[inline]
    fn empty<B>() -> RightProjection<L, B> {
        RightProjection::new(Either::Left(L::default()))
    }
}

impl<L, T, X> Nested<RightProjection<L, X>> for RightProjection<L, T>
where
    T: Nested<RightProjection<L, X>>,
{
    type Layer = T;
    type Leaf = T::Leaf;

    #[inline]
    fn shallow(self) -> Self {
        self
    }

    #[inline]
    fn deep(self) -> RightProjection<L, T::Leaf> {
        self.bind(<T as Nested<RightProjection<L, X>>>::deep)
    }
}

// =============================================================================
// Cross-Family Leaves
//
// A container of another family is a plain value: flattening a projection
// never unwraps an `Optional` or a `Vec`, and the reverse holds as well.
// =============================================================================

macro_rules! impl_foreign_leaf {
    ($([$($generics:tt)*] $leaf:ty => $family:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Nested<$family> for $leaf {
                type Layer = Self;
                type Leaf = Self;

                #[inline]
                fn shallow(self) -> <$family as TypeConstructor>::WithType<Self> {
                    <$family as Monad>::unit(self)
                }

                #[inline]
                fn deep(self) -> <$family as TypeConstructor>::WithType<Self> {
                    <$family as Monad>::unit(self)
                }
            }
        )*
    };
}

impl_foreign_leaf!(
    [L, R, X] LeftProjection<L, R> => Optional<X>,
    [L, R, X] RightProjection<L, R> => Optional<X>,
    [L, R, X] LeftProjection<L, R> => Vec<X>,
    [L, R, X] RightProjection<L, R> => Vec<X>,
    [T, R, X] Optional<T> => LeftProjection<X, R>,
    [L, T, X] Optional<T> => RightProjection<L, X>,
    [T, R, X] Vec<T> => LeftProjection<X, R>,
    [L, T, X] Vec<T> => RightProjection<L, X>,
    [L, R, Y, X] LeftProjection<L, R> => RightProjection<Y, X>,
    [L, R, X, Y] RightProjection<L, R> => LeftProjection<X, Y>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Outcome = Either<&'static str, i32>;

    #[rstest]
    fn projection_wraps_without_changing_either() {
        let left: Outcome = Either::Left("error");
        assert_eq!(left.left().either(), &left);
        assert_eq!(left.right().into_either(), left);
    }

    #[rstest]
    #[case(Either::Left("error"), Ok("error"))]
    #[case(Either::Right(42), Err(NoSuchElementError::new("LeftProjection", "Left", "Right")))]
    fn left_get(#[case] either: Outcome, #[case] expected: Result<&str, NoSuchElementError>) {
        assert_eq!(either.left().get(), expected);
    }

    #[rstest]
    #[case(Either::Right(42), Ok(42))]
    #[case(Either::Left("error"), Err(NoSuchElementError::new("RightProjection", "Right", "Left")))]
    fn right_get(#[case] either: Outcome, #[case] expected: Result<i32, NoSuchElementError>) {
        assert_eq!(either.right().get(), expected);
    }

    #[rstest]
    fn left_bind_passes_right_through() {
        let right: Outcome = Either::Right(42);
        let result = right
            .left()
            .bind(|s: &str| LeftProjection::new(Either::Left(s.len())));
        assert_eq!(result.into_either(), Either::Right(42));
    }

    #[rstest]
    fn right_bind_passes_left_through() {
        let left: Outcome = Either::Left("error");
        let result = left
            .right()
            .bind(|n| RightProjection::new(Either::Right(n * 2)));
        assert_eq!(result.into_either(), Either::Left("error"));
    }

    #[rstest]
    fn unit_builds_matching_side() {
        assert_eq!(
            <LeftProjection<(), i32>>::unit("error"),
            Either::<&str, i32>::Left("error").left()
        );
        assert_eq!(
            <RightProjection<&str, ()>>::unit(42),
            Either::<&str, i32>::Right(42).right()
        );
    }

    #[rstest]
    fn empty_projects_default_of_other_side() {
        assert_eq!(
            <LeftProjection<(), Option<i32>>>::empty::<&str>(),
            Either::Right(None).left()
        );
        assert_eq!(
            <RightProjection<Option<&str>, ()>>::empty::<i32>(),
            Either::Left(None).right()
        );
    }

    #[rstest]
    fn trait_select_stays_in_projection() {
        let right: Either<Option<&str>, i32> = Either::Right(42);
        assert_eq!(MonadEmpty::select(right.right(), |n| *n == 42), right.right());
        assert_eq!(
            MonadEmpty::select(right.right(), |n| *n != 42),
            Either::Left(None).right()
        );
    }

    #[rstest]
    fn to_optional_discards_other_side() {
        let right: Outcome = Either::Right(42);
        assert_eq!(right.right().to_optional(), Optional::Present(42));
        assert_eq!(right.left().to_optional(), Optional::Empty);
    }

    #[rstest]
    fn nested_projection_flattens() {
        let inner: LeftProjection<i32, &str> = LeftProjection::new(Either::Left(1));
        let outer: LeftProjection<LeftProjection<i32, &str>, &str> =
            LeftProjection::new(Either::Left(inner));
        assert_eq!(outer.shallow_flatten(), inner);
        assert_eq!(outer.flatten(), inner);

        let short: LeftProjection<LeftProjection<i32, &str>, &str> =
            LeftProjection::new(Either::Right("stop"));
        assert_eq!(short.flatten().into_either(), Either::Right("stop"));
    }

    fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
        use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};
        BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
    }

    #[rstest]
    fn hash_defers_to_wrapped_either() {
        let right: Outcome = Either::Right(42);
        assert_eq!(hash_of(&right.right()), hash_of(&RightProjection::new(right)));
        assert_eq!(hash_of(&right.left()), hash_of(&LeftProjection::new(right)));
        assert_eq!(hash_of(&right.right()), hash_of(&right));
    }

    #[rstest]
    fn projections_of_other_families_are_leaves() {
        let inner: Outcome = Either::Right(42);
        let nested = Optional::Present(Optional::Present(inner.right()));
        assert_eq!(nested.flatten(), Optional::Present(inner.right()));

        let sequence: Either<Vec<i32>, i32> = Either::Left(vec![1, 2]);
        assert_eq!(sequence.clone().left().flatten(), sequence.left());
    }
}
