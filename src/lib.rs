//! # kleisli
//!
//! Optional, either and sequence containers that share one monad contract.
//!
//! ## Overview
//!
//! A container joins the contract by supplying two primitives, `unit` and
//! `bind`. Everything else is derived from them:
//!
//! - **Type Classes**: [`Monad`](typeclass::Monad) (`map`, `flat_map`,
//!   `flatten`, `shallow_flatten`, `each`) and
//!   [`MonadEmpty`](typeclass::MonadEmpty) (`select`, `filter`)
//! - **Containers**: [`Optional`](control::Optional),
//!   [`Either`](control::Either) with its left and right projections, and
//!   `Vec` as the sequence adapter
//!
//! Every implementation satisfies left identity, right identity and
//! associativity; the `tests/` directory checks all three for each container.
//!
//! ## Feature Flags
//!
//! - `typeclass`: The monad contract and the `Vec` adapter
//! - `control`: `Optional`, `Either`, projections and `NoSuchElementError`
//! - `derive`: `#[derive(Leaf)]` for using your own types as flatten leaves
//! - `tracing`: Emit a `tracing` event whenever a `get` finds no element
//! - `full`: Enable all features
//!
//! ## Example
//!
#![cfg_attr(feature = "control", doc = "```rust")]
#![cfg_attr(not(feature = "control"), doc = "```rust,ignore")]
//! use kleisli::prelude::*;
//!
//! fn lookup(id: u32) -> Optional<&'static str> {
//!     Optional::from_nullable(match id {
//!         1 => Some("ada"),
//!         2 => Some("grace"),
//!         _ => None,
//!     })
//! }
//!
//! let name = Optional::Present(2).flat_map(lookup).map(str::to_uppercase);
//! assert_eq!(name.get_or_else_with(String::new), "GRACE");
//!
//! let missing = Optional::Present(9).flat_map(lookup);
//! assert!(missing.get().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "derive")]
    pub use kleisli_derive::Leaf;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "derive")]
pub use kleisli_derive::Leaf;

#[cfg(all(test, feature = "control"))]
mod tests {
    use crate::control::{Either, LeftProjection, Optional, RightProjection};
    use crate::typeclass::Monad;

    static_assertions::assert_impl_all!(Optional<i32>: Monad, Send, Sync, Copy);
    static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
    static_assertions::assert_impl_all!(LeftProjection<String, i32>: Monad, Send, Sync);
    static_assertions::assert_impl_all!(RightProjection<String, i32>: Monad, Send, Sync);
    static_assertions::assert_impl_all!(Vec<i32>: Monad);

    #[test]
    fn empty_is_free_of_storage() {
        assert_eq!(
            std::mem::size_of::<Optional<Box<i32>>>(),
            std::mem::size_of::<Box<i32>>()
        );
    }
}
