//! # Layer 1: Capability Probe
//!
//! Compile-time answers about a type's structural shape:
//!
//! | Probe | Question |
//! |-------|----------|
//! | `Native` | Does `T` already write itself (`Display`)? |
//! | `Traversable` | Does `&T` iterate (`IntoIterator`)? |
//! | `DeclaresKey` | Does `T` declare a key type (`Keyed`)? |
//! | `PairElements` | Does traversal yield `first`/`second` parts (`PairLike`)? |
//!
//! The answers are type-level booleans so the dispatcher can select a
//! strategy without evaluating a value. Each type carries its answers through
//! one [`Probe`] impl: the crate registers the core, alloc and std types in
//! [`registry`], user types register with `#[derive(Render)]` or
//! [`impl_record!`](crate::impl_record).
//!
//! For concrete types, `detect!` recomputes the same answers from trait
//! satisfaction alone (see [`detect`]). The derive uses the same fallback
//! consts to refuse records that already implement `Display`.

use crate::primitives::Bool;

pub mod detect;
mod registry;

// =============================================================================
// Probe
// =============================================================================

/// Structural shape answers for a type.
///
/// `Special` is the nominal slot: [`Structural`] for every type that goes
/// through the four structural checks, or one of the special-shape tags
/// (`Pair`, `Tuple`, `Fifo`, `Lifo`, `Priority`, `Indirect`) that bypass them.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no registered shape",
    label = "no `Probe` impl for this type",
    note = "derive `Render` for records, or register the type with `impl_record!`"
)]
pub trait Probe {
    /// Nominal special shape, checked before anything else.
    type Special: SpecialSlot;
    /// `IsNativelyRenderable`
    type Native: Bool;
    /// `IsTraversable`
    type Traversable: Bool;
    /// `DeclaresKeyType`
    type DeclaresKey: Bool;
    /// `ElementLooksLikePair` applied to the traversal element.
    type PairElements: Bool;
    /// Whether `Self`, used as an element, is pair-shaped.
    type PairShaped: Bool;
}

/// Nominal special-shape slot of a [`Probe`].
///
/// `Or<Fallback>` is the special tag itself, or `Fallback` for [`Structural`].
pub trait SpecialSlot {
    type Or<Fallback>;
}

/// Marker: no special shape, classify structurally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structural;

impl SpecialSlot for Structural {
    type Or<Fallback> = Fallback;
}

// =============================================================================
// Structural Capabilities
// =============================================================================

/// A container that declares a key type.
///
/// Sets declare one as well as maps: a key type alone does not make a
/// container associative, its elements also have to be pair-shaped.
pub trait Keyed {
    type Key: ?Sized;
}

/// A value exposing exactly two parts, `first` and `second`.
pub trait PairLike {
    type First: ?Sized;
    type Second: ?Sized;

    fn first(&self) -> &Self::First;
    fn second(&self) -> &Self::Second;
}

impl<A, B> PairLike for (A, B) {
    type First = A;
    type Second = B;

    #[inline]
    fn first(&self) -> &A {
        &self.0
    }

    #[inline]
    fn second(&self) -> &B {
        &self.1
    }
}

impl<P: PairLike + ?Sized> PairLike for &P {
    type First = P::First;
    type Second = P::Second;

    #[inline]
    fn first(&self) -> &P::First {
        (**self).first()
    }

    #[inline]
    fn second(&self) -> &P::Second {
        (**self).second()
    }
}

// =============================================================================
// Probes (runtime mirror)
// =============================================================================

/// The four probe answers of a type as plain booleans.
///
/// Useful for debugging and for comparing a registration against
/// `detect!`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Probes {
    pub native: bool,
    pub traversable: bool,
    pub declares_key: bool,
    pub pair_elements: bool,
}

impl Probes {
    /// Snapshot of the registered answers for `T`.
    pub const fn of<T: Probe + ?Sized>() -> Self {
        Self {
            native: <T::Native as Bool>::VALUE,
            traversable: <T::Traversable as Bool>::VALUE,
            declares_key: <T::DeclaresKey as Bool>::VALUE,
            pair_elements: <T::PairElements as Bool>::VALUE,
        }
    }

    /// Associative rendering applies: traversable, keyed and pair elements.
    pub const fn is_associative(&self) -> bool {
        self.traversable && self.declares_key && self.pair_elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_like_tuple() {
        let pair = (1, "one");
        assert_eq!(*pair.first(), 1);
        assert_eq!(*pair.second(), "one");

        let by_ref = &pair;
        assert_eq!(*PairLike::first(&by_ref), 1);
    }

    #[test]
    fn test_probes_snapshot() {
        assert_eq!(
            Probes::of::<i32>(),
            Probes { native: true, ..Probes::default() }
        );
        assert!(!Probes::of::<[u8; 4]>().is_associative());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_probes_associative() {
        use alloc::collections::{BTreeMap, BTreeSet};

        assert!(Probes::of::<BTreeMap<u8, u8>>().is_associative());
        // Keyed, but the elements are not pairs.
        let set = Probes::of::<BTreeSet<u8>>();
        assert!(set.declares_key);
        assert!(!set.is_associative());
        // Keyed with pair elements: associative.
        assert!(Probes::of::<BTreeSet<(u8, u8)>>().is_associative());
    }
}
