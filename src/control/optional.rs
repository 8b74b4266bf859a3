//! Optional type - a value that may be absent.
//!
//! [`Optional<T>`] is either `Present(T)` or `Empty`. It implements the
//! [`Monad`] and [`MonadEmpty`] contracts, so absent values short-circuit
//! every derived operation without explicit checks at the call site.
//!
//! `Empty` carries no data: every `Empty` of a given `Optional<T>` is the same
//! value, and sharing it needs no synchronisation.
//!
//! # Constructing
//!
//! Rust's null sentinel is `Option::None`. Converting from an `Option` is the
//! collapsing path: `None` becomes `Empty`. The `Present` variant constructor
//! never collapses, so `Optional::Present(None)` stays `Present`.
//!
//! ```rust
//! use kleisli::control::Optional;
//!
//! assert_eq!(Optional::from_nullable(Some(42)), Optional::Present(42));
//! assert_eq!(Optional::<i32>::from_nullable(None), Optional::Empty);
//! assert!(Optional::Present(None::<i32>).is_defined());
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Optional;
//! use kleisli::typeclass::{Monad, MonadEmpty};
//!
//! let parsed = Optional::from_nullable("42".parse::<i32>().ok())
//!     .select(|n| *n > 0)
//!     .map(|n| n * 2);
//! assert_eq!(parsed.get_or_else(0), 84);
//! ```

use super::error::NoSuchElementError;
use crate::typeclass::{Monad, MonadEmpty, Nested, TypeConstructor};

/// A value that is either present or empty.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Optional;
///
/// let present = Optional::Present("foo");
/// assert_eq!(present.get_or_else("bar"), "foo");
///
/// let empty: Optional<&str> = Optional::Empty;
/// assert_eq!(empty.get_or_else("bar"), "bar");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A present value.
    Present(T),
    /// No value.
    Empty,
}

impl<T> Optional<T> {
    /// Builds an `Optional` from a possibly absent value, collapsing `None`
    /// into `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some("foo")), Optional::Present("foo"));
    /// assert_eq!(Optional::<&str>::from_nullable(None), Optional::Empty);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the present value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Optional;
    ///
    /// assert_eq!(Optional::Present("foo").get(), Ok("foo"));
    /// assert!(Optional::<&str>::Empty.get().is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, NoSuchElementError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(NoSuchElementError::new("Optional", "Present", "Empty")),
        }
    }

    /// Returns the present value, or `default` if this is `Empty`.
    ///
    /// `default` is evaluated eagerly; use
    /// [`get_or_else_with`](Optional::get_or_else_with) to defer it.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the present value, or the result of `supplier` if this is
    /// `Empty`. `supplier` is not called when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Optional;
    ///
    /// let empty: Optional<String> = Optional::Empty;
    /// assert_eq!(empty.get_or_else_with(|| "computed".to_string()), "computed");
    ///
    /// let present = Optional::Present("kept".to_string());
    /// let value = present.get_or_else_with(|| unreachable!("not evaluated"));
    /// assert_eq!(value, "kept");
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => supplier(),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Converts into a standard `Option`, consuming the optional.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Monad Implementation
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Monad for Optional<T> {
    #[inline]
    fn unit<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn bind<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(T) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }
}

impl<T> MonadEmpty for Optional<T> {
    #[inline]
    fn empty<B>() -> Optional<B> {
        Optional::Empty
    }
}

// =============================================================================
// Nested Implementations
// =============================================================================

impl<T, X> Nested<Optional<X>> for Optional<T>
where
    T: Nested<Optional<X>>,
{
    type Layer = T;
    type Leaf = T::Leaf;

    #[inline]
    fn shallow(self) -> Self {
        self
    }

    #[inline]
    fn deep(self) -> Optional<T::Leaf> {
        self.bind(<T as Nested<Optional<X>>>::deep)
    }
}

// Inside a sequence, `Empty` contributes no elements.
impl<T, X> Nested<Vec<X>> for Optional<T>
where
    T: Nested<Vec<X>>,
{
    type Layer = T;
    type Leaf = T::Leaf;

    #[inline]
    fn shallow(self) -> Vec<T> {
        self.into_iter().collect()
    }

    #[inline]
    fn deep(self) -> Vec<T::Leaf> {
        match self {
            Self::Present(value) => <T as Nested<Vec<X>>>::deep(value),
            Self::Empty => Vec::new(),
        }
    }
}

impl<T, X> Nested<Optional<X>> for Vec<T> {
    type Layer = Self;
    type Leaf = Self;

    #[inline]
    fn shallow(self) -> Optional<Self> {
        Optional::Present(self)
    }

    #[inline]
    fn deep(self) -> Optional<Self> {
        Optional::Present(self)
    }
}
