//! Structural probe detection for concrete types.
//!
//! Registrations state their probe answers by hand. This module recomputes
//! the same answers from trait satisfaction alone, using the "Inherent Const
//! Fallback" pattern:
//!
//! 1. A fallback trait carries `const IS_X: bool = false`, implemented for
//!    every `Detect<T>`.
//! 2. An inherent impl on `Detect<T>`, guarded by the probed bound, carries
//!    `const IS_X: bool = true`.
//!
//! Resolving `Detect::<Concrete>::IS_X` picks the inherent const when the
//! bound holds and silently falls back to the trait const when it does not,
//! so an ill-formed probe reads as `false` instead of failing the build.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`.
//!
//! ```
//! use container_view::{detect, Probes};
//! use std::collections::BTreeMap;
//!
//! assert!(detect!(String: native));
//! assert!(detect!(Vec<u8>: traversable));
//! assert!(!detect!(Vec<u8>: keyed));
//! assert_eq!(detect!(BTreeMap<u8, u8>), Probes::of::<BTreeMap<u8, u8>>());
//! ```

use core::marker::PhantomData;

use super::{Keyed, PairLike};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for one probe.
macro_rules! impl_detect {
    ($Name:ident where $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Name Fallback>] { const [<IS_ $Name:snake:upper>]: bool = false; }
            impl<T: ?Sized> [<$Name Fallback>] for Detect<T> {}
            impl<T: ?Sized> Detect<T> where $($bound)+ {
                pub const [<IS_ $Name:snake:upper>]: bool = true;
            }
        }
    };
}

impl_detect!(Native where T: core::fmt::Display);
impl_detect!(Traversable where for<'a> &'a T: IntoIterator);
impl_detect!(Keyed where T: Keyed);
impl_detect!(PairElements where
    for<'a> &'a T: IntoIterator,
    for<'a> <&'a T as IntoIterator>::Item: PairLike,
);
impl_detect!(Pair where T: PairLike);

/// Probe a concrete type structurally (feature `detect`).
///
/// - `detect!(T)` returns all four answers as [`Probes`](crate::Probes).
/// - `detect!(T: native | traversable | keyed | pair_elements | pair)`
///   returns one answer; `pair` asks whether `T` itself is pair-shaped.
#[cfg(feature = "detect")]
#[macro_export]
macro_rules! detect {
    ($T:ty : native) => {{
        #[allow(unused_imports)]
        use $crate::probe::detect::{Detect, NativeFallback};
        Detect::<$T>::IS_NATIVE
    }};
    ($T:ty : traversable) => {{
        #[allow(unused_imports)]
        use $crate::probe::detect::{Detect, TraversableFallback};
        Detect::<$T>::IS_TRAVERSABLE
    }};
    ($T:ty : keyed) => {{
        #[allow(unused_imports)]
        use $crate::probe::detect::{Detect, KeyedFallback};
        Detect::<$T>::IS_KEYED
    }};
    ($T:ty : pair_elements) => {{
        #[allow(unused_imports)]
        use $crate::probe::detect::{Detect, PairElementsFallback};
        Detect::<$T>::IS_PAIR_ELEMENTS
    }};
    ($T:ty : pair) => {{
        #[allow(unused_imports)]
        use $crate::probe::detect::{Detect, PairFallback};
        Detect::<$T>::IS_PAIR
    }};
    ($T:ty) => {
        $crate::Probes {
            native: $crate::detect!($T: native),
            traversable: $crate::detect!($T: traversable),
            declares_key: $crate::detect!($T: keyed),
            pair_elements: $crate::detect!($T: pair_elements),
        }
    };
}

#[cfg(all(test, feature = "detect"))]
mod tests {
    use crate::Probes;

    struct Opaque;

    #[test]
    fn test_detect_native() {
        assert!(detect!(i32: native));
        assert!(detect!(str: native));
        assert!(!detect!([u8; 3]: native));
        assert!(!detect!(Opaque: native));
    }

    #[test]
    fn test_detect_traversable() {
        assert!(detect!([u8; 3]: traversable));
        assert!(detect!([u8]: traversable));
        assert!(!detect!(i32: traversable));
        assert!(!detect!(Opaque: traversable));
    }

    #[test]
    fn test_detect_pairs() {
        assert!(detect!((u8, char): pair));
        assert!(!detect!((u8, char, u8): pair));
        assert!(detect!([(u8, u8); 2]: pair_elements));
        assert!(!detect!([u8; 2]: pair_elements));
    }

    #[test]
    fn test_detect_matches_registration() {
        assert_eq!(detect!(u64), Probes::of::<u64>());
        assert_eq!(detect!([i8; 4]), Probes::of::<[i8; 4]>());
        assert_eq!(detect!([(i8, i8)]), Probes::of::<[(i8, i8)]>());
        assert_eq!(detect!(Option<u8>), Probes::of::<Option<u8>>());
    }
}
