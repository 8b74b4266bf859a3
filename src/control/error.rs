//! Error types for the control containers.
//!
//! The only recoverable failure in this crate is asking a container for a
//! value it does not hold. Building an `Either` that is neither `Left` nor
//! `Right` cannot be expressed at all, because both `Either` and `Optional`
//! are closed enums:
//!
//! ```rust,compile_fail
//! use kleisli::control::Either;
//!
//! let neither: Either<i32, String> = Either {};
//! ```

/// Represents a `get` on a container that does not hold the requested value.
///
/// Returned by [`Optional::get`](super::Optional::get) on `Empty` and by
/// projection `get` when the `Either` is on the other side.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{NoSuchElementError, Optional};
///
/// let error = Optional::<i32>::Empty.get().unwrap_err();
/// assert_eq!(
///     error,
///     NoSuchElementError::new("Optional", "Present", "Empty"),
/// );
/// assert_eq!(
///     format!("{error}"),
///     "Optional::get: expected Present but found Empty"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{container}::get: expected {expected} but found {found}")]
pub struct NoSuchElementError {
    /// The container `get` was called on.
    pub container: &'static str,
    /// The variant that would have produced a value.
    pub expected: &'static str,
    /// The variant that was actually there.
    pub found: &'static str,
}

impl NoSuchElementError {
    /// Creates a new error.
    #[must_use]
    pub fn new(container: &'static str, expected: &'static str, found: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(container, expected, found, "no such element");

        Self {
            container,
            expected,
            found,
        }
    }
}
