//! Compile-time dispatch for `flatten` and `shallow_flatten`.
//!
//! A dynamically typed flatten asks each value "are you a container?" at run
//! time. Here the question is answered by the trait system: [`Nested<M>`]
//! says how a value stored inside the container family `M` behaves when that
//! container is flattened.
//!
//! - A container of the same family unwraps: one level for
//!   [`shallow`](Nested::shallow), recursively for [`deep`](Nested::deep).
//! - Any other value is a leaf and is wrapped with `M::unit`.
//!
//! Leaf implementations are provided for the primitive types, tuples up to
//! twelve elements, arrays, references, smart pointers, `Option`, `Result`,
//! the `std::collections` types and the common std value types such as
//! `PathBuf` and `Duration`. User types opt in with `#[derive(Leaf)]`; a
//! third-party type can be wrapped in a local newtype that derives it.

use super::higher::TypeConstructor;
use super::monad::Monad;

/// Describes how `Self` flattens when stored inside the container family `M`.
///
/// `M` is any instance of the family (for example `Vec<X>` for every `X`);
/// only its type constructor matters.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Monad, Nested};
///
/// // `i32` is a leaf, so it is wrapped with `unit`.
/// let wrapped: Vec<i32> = <i32 as Nested<Vec<()>>>::deep(7);
/// assert_eq!(wrapped, vec![7]);
///
/// // A `Vec` inside a `Vec` unwraps all the way down.
/// let unwrapped: Vec<i32> = <Vec<Vec<i32>> as Nested<Vec<()>>>::deep(vec![vec![1], vec![2]]);
/// assert_eq!(unwrapped, vec![1, 2]);
/// ```
pub trait Nested<M: TypeConstructor> {
    /// The element type after removing one level of nesting.
    type Layer;

    /// The element type after removing every level of nesting.
    type Leaf;

    /// Converts `self` into a container of family `M`, unwrapping one level.
    fn shallow(self) -> M::WithType<Self::Layer>;

    /// Converts `self` into a container of family `M`, unwrapping every level.
    fn deep(self) -> M::WithType<Self::Leaf>;
}

// Generic leaves list their impl parameters with a trailing comma:
// `impl_leaf!(@generic [T,] Rc<T>)`.
macro_rules! impl_leaf {
    (@generic $([$($generics:tt)*] $leaf:ty),* $(,)?) => {
        $(
            impl<$($generics)* M: Monad> Nested<M> for $leaf {
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
        )*
    };
    ($($leaf:ty),* $(,)?) => {
        impl_leaf!(@generic $([] $leaf),*);
    };
}

macro_rules! impl_tuple_leaf {
    ($(($($element:ident),+)),* $(,)?) => {
        impl_leaf!(@generic $([$($element,)+] ($($element,)+)),*);
    };
}

impl_leaf!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String,
    std::ffi::CString,
    std::ffi::OsString,
    std::path::PathBuf,
    std::time::Duration,
    std::time::Instant,
    std::time::SystemTime,
    std::cmp::Ordering,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);

// `Option` and `Result` are plain values here: only the crate's own
// containers unwrap.
impl_leaf!(
    @generic
    [T: ?Sized,] &T,
    [T: ?Sized,] &mut T,
    [T: ?Sized,] Box<T>,
    [T: ?Sized,] std::rc::Rc<T>,
    [T: ?Sized,] std::sync::Arc<T>,
    [B: ToOwned + ?Sized,] std::borrow::Cow<'_, B>,
    [T: ?Sized,] std::marker::PhantomData<T>,
    [T, const N: usize,] [T; N],
    [T,] Option<T>,
    [T, E,] Result<T, E>,
    [T,] std::cell::Cell<T>,
    [T,] std::cell::RefCell<T>,
    [T,] std::cmp::Reverse<T>,
    [T,] std::num::Wrapping<T>,
    [T,] std::ops::Range<T>,
    [T,] std::ops::RangeInclusive<T>,
    [T,] std::collections::VecDeque<T>,
    [T,] std::collections::LinkedList<T>,
    [T,] std::collections::BinaryHeap<T>,
    [T,] std::collections::BTreeSet<T>,
    [K, V,] std::collections::BTreeMap<K, V>,
    [T, S,] std::collections::HashSet<T, S>,
    [K, V, S,] std::collections::HashMap<K, V, S>,
);

impl_tuple_leaf!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

impl<T, X> Nested<Vec<X>> for Vec<T>
where
    T: Nested<Vec<X>>,
{
    type Layer = T;
    type Leaf = T::Leaf;

    #[inline]
    fn shallow(self) -> Vec<T> {
        self
    }

    #[inline]
    fn deep(self) -> Vec<T::Leaf> {
        self.bind(<T as Nested<Vec<X>>>::deep)
    }
}
