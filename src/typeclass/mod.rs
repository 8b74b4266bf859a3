//! Type class traits for the monad contract.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Monad`]: `unit` + `bind`, with `map`, `flat_map`, `flatten`,
//!   `shallow_flatten` and `each` derived from them
//! - [`MonadEmpty`]: adds `empty` and derives `select` / `filter`
//! - [`Nested`]: decides at compile time whether a value unwraps or is a leaf
//!   when its container is flattened
//!
//! `Vec<T>` implements the contract as the sequence adapter: `unit` builds a
//! one-element vector and `bind` concatenates the per-element results in order.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Monad, MonadEmpty};
//!
//! let words = vec!["functor", "monad"];
//! let letters = words.bind(|word| word.chars().collect::<Vec<_>>());
//! assert_eq!(letters.len(), 12);
//!
//! let vowels = letters.select(|c| "aeiou".contains(*c));
//! assert_eq!(vowels, vec!['u', 'o', 'o', 'a']);
//! ```

mod higher;
mod monad;
mod nested;

pub use higher::TypeConstructor;
pub use monad::{Monad, MonadEmpty};
pub use nested::Nested;
