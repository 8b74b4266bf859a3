//! Concrete containers built on the monad contract.
//!
//! - [`Optional`]: a value that is `Present` or `Empty`
//! - [`Either`]: a value that is `Left` or `Right`
//! - [`LeftProjection`] / [`RightProjection`]: one-sided monadic views of an `Either`
//! - [`NoSuchElementError`]: returned by `get` when no value is held
//!
//! # Examples
//!
//! ## Optional
//!
//! ```rust
//! use kleisli::control::Optional;
//! use kleisli::typeclass::Monad;
//!
//! let nested = Optional::Present(Optional::Present(Optional::Present(1)));
//! assert_eq!(nested.flatten(), Optional::Present(1));
//! assert_eq!(nested.shallow_flatten(), Optional::Present(Optional::Present(1)));
//! ```
//!
//! ## Either projections
//!
//! ```rust
//! use kleisli::control::Either;
//! use kleisli::typeclass::Monad;
//!
//! let outcome: Either<String, i32> = Either::Right(42);
//! let described: Either<String, i32> = outcome
//!     .right()
//!     .flat_map(|n| Either::Left(n.to_string()).right())
//!     .into_either();
//! assert_eq!(described, Either::Left("42".to_string()));
//! ```

mod either;
mod error;
mod optional;
mod projection;

pub use either::Either;
pub use error::NoSuchElementError;
pub use optional::Optional;
pub use projection::{LeftProjection, RightProjection};
