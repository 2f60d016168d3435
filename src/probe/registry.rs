//! Probe registrations for core, alloc and std types.
//!
//! One table per shape family. Tuples, `Queue` and `Stack` register next to
//! their special-shape strategies in `dispatch::special`.

use crate::dispatch::special::{Indirect, Transparent};
use crate::primitives::{Absent, Present};
use super::{Probe, Structural};

// =============================================================================
// Registration Macros
// =============================================================================

/// Types that write themselves through `Display`.
macro_rules! native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Probe for $ty {
                type Special = Structural;
                type Native = Present;
                type Traversable = Absent;
                type DeclaresKey = Absent;
                type PairElements = Absent;
                type PairShaped = Absent;
            }
        )*
    };
}

/// Traversable containers over an element type `T`.
///
/// `keyed` containers declare a key type; whether they render as
/// associative still depends on `T` being pair-shaped.
macro_rules! sequence {
    ($keyed:ident: $([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Probe for $ty {
                type Special = Structural;
                type Native = Absent;
                type Traversable = Present;
                type DeclaresKey = sequence!(@key $keyed);
                type PairElements = <T as Probe>::PairShaped;
                type PairShaped = Absent;
            }
        )*
    };
    (@key keyed) => { Present };
    (@key plain) => { Absent };
}

/// Maps: traversal yields `(&K, &V)`, always pair-shaped.
#[cfg(feature = "alloc")]
macro_rules! map {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Probe for $ty {
                type Special = Structural;
                type Native = Absent;
                type Traversable = Present;
                type DeclaresKey = Present;
                type PairElements = Present;
                type PairShaped = Absent;
            }

            impl<$($gen)*> Keyed for $ty {
                type Key = K;
            }
        )*
    };
}

/// References and owning pointers: transparent, classified as the pointee.
macro_rules! indirect {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Transparent for $ty {
                type Inner = T;

                #[inline]
                fn inner(&self) -> &T {
                    self
                }
            }

            impl<$($gen)*> Probe for $ty {
                type Special = Indirect;
                type Native = <T as Probe>::Native;
                type Traversable = <T as Probe>::Traversable;
                type DeclaresKey = <T as Probe>::DeclaresKey;
                type PairElements = <T as Probe>::PairElements;
                type PairShaped = <T as Probe>::PairShaped;
            }
        )*
    };
}

// =============================================================================
// Core
// =============================================================================

native!(
    bool, char, str,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::net::IpAddr, core::net::Ipv4Addr, core::net::Ipv6Addr,
    core::net::SocketAddr, core::net::SocketAddrV4, core::net::SocketAddrV6,
);

impl Probe for core::fmt::Arguments<'_> {
    type Special = Structural;
    type Native = Present;
    type Traversable = Absent;
    type DeclaresKey = Absent;
    type PairElements = Absent;
    type PairShaped = Absent;
}

impl<T> Probe for core::num::Wrapping<T> {
    type Special = Structural;
    type Native = Present;
    type Traversable = Absent;
    type DeclaresKey = Absent;
    type PairElements = Absent;
    type PairShaped = Absent;
}

sequence!(plain:
    [T: Probe, const N: usize] [T; N],
    [T: Probe] [T],
    [T: Probe] Option<T>,
);

indirect!(
    ['a, T: Probe + ?Sized] &'a T,
    ['a, T: Probe + ?Sized] &'a mut T,
);

// Lets `BinaryHeap<Reverse<T>>` render as a min-priority queue.
impl<T: Probe> Probe for core::cmp::Reverse<T> {
    type Special = Indirect;
    type Native = <T as Probe>::Native;
    type Traversable = <T as Probe>::Traversable;
    type DeclaresKey = <T as Probe>::DeclaresKey;
    type PairElements = <T as Probe>::PairElements;
    type PairShaped = <T as Probe>::PairShaped;
}

impl<T> Transparent for core::cmp::Reverse<T> {
    type Inner = T;

    #[inline]
    fn inner(&self) -> &T {
        &self.0
    }
}

// =============================================================================
// Alloc
// =============================================================================

#[cfg(feature = "alloc")]
mod alloc_types {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    use super::*;
    use crate::dispatch::special::Priority;
    use crate::probe::Keyed;

    native!(String);

    sequence!(plain:
        [T: Probe] Vec<T>,
        [T: Probe] VecDeque<T>,
        [T: Probe] LinkedList<T>,
    );

    sequence!(keyed:
        [T: Probe] BTreeSet<T>,
    );

    impl<T> Keyed for BTreeSet<T> {
        type Key = T;
    }

    map!(
        [K, V] BTreeMap<K, V>,
    );

    indirect!(
        [T: Probe + ?Sized] Box<T>,
        [T: Probe + ?Sized] Rc<T>,
        [T: Probe + ?Sized] Arc<T>,
    );

    // Traversable, but drained by priority rather than iterated.
    impl<T: Probe> Probe for BinaryHeap<T> {
        type Special = Priority;
        type Native = Absent;
        type Traversable = Present;
        type DeclaresKey = Absent;
        type PairElements = <T as Probe>::PairShaped;
        type PairShaped = Absent;
    }
}

// =============================================================================
// Std
// =============================================================================

#[cfg(feature = "std")]
mod std_types {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::probe::Keyed;

    sequence!(keyed:
        [T: Probe, S] HashSet<T, S>,
    );

    impl<T, S> Keyed for HashSet<T, S> {
        type Key = T;
    }

    map!(
        [K, V, S] HashMap<K, V, S>,
    );
}
