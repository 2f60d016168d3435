//! # Layer 3: Dispatcher / Renderer
//!
//! Selects one rendering strategy per type, purely at the type level, and
//! writes the value through it.
//!
//! ## Decision Order
//!
//! ```text
//! Probe::Special != Structural ─────────────────────────> special tag
//!         │ (Structural)
//!         v
//! Native? ── yes ─────────────────────────────────────────> Native
//!         │ no
//!         v
//! Traversable? ── yes ──> DeclaresKey & PairElements? ── yes ──> KeyValue
//!         │ no                         │ no
//!         v                            v
//!       Record                      Sequence
//! ```
//!
//! The selection is a type alias ([`ShapeOf`]) built from `Bool::If`, so the
//! compiler resolves it once per instantiated type and the chosen
//! [`Strategy`] is called directly. There is no runtime branch on type
//! identity.
//!
//! Types matching nothing have no `Render` impl: a record that is not
//! registered, a record outside the arity window, or a type without a
//! `Probe` impl are all build errors.

use core::fmt;

use crate::primitives::{And, If};
use crate::probe::{Probe, SpecialSlot};

pub mod shape;
pub mod strategy;
pub mod special;
pub(crate) mod list;

pub use shape::{Shape, SpecialKind};
pub use strategy::{Entry, KeyValue, Native, Record, Sequence};
pub use special::{Fifo, Indirect, Lifo, Pair, Priority, Transparent, Tuple};

// =============================================================================
// Strategy
// =============================================================================

/// A rendering strategy for values of type `T`.
///
/// Implemented by the zero-sized shape tags. The bounds on each impl are the
/// requirements of that strategy (e.g. `Sequence` needs `&T: IntoIterator`
/// with renderable items).
#[diagnostic::on_unimplemented(
    message = "the `{Self}` strategy cannot render `{T}`",
    note = "`{T}` was classified as `{Self}` by its `Probe` answers"
)]
pub trait Strategy<T: ?Sized> {
    /// Runtime mirror of the classification.
    const SHAPE: Shape;

    fn write(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

// =============================================================================
// Shape Selection
// =============================================================================

/// Strategy chosen by the four structural probes (specials excluded).
pub type StructuralShape<T> = If<
    <T as Probe>::Native,
    Native,
    If<
        <T as Probe>::Traversable,
        If<And<<T as Probe>::DeclaresKey, <T as Probe>::PairElements>, KeyValue, Sequence>,
        Record,
    >,
>;

/// Strategy chosen for `T`: its special shape if any, else [`StructuralShape`].
pub type ShapeOf<T> = <<T as Probe>::Special as SpecialSlot>::Or<StructuralShape<T>>;

// =============================================================================
// Render
// =============================================================================

/// A value that can be rendered.
///
/// Implemented for every [`Probe`] type whose selected strategy accepts it;
/// never implement it by hand.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered",
    label = "no rendering strategy applies to this type",
    note = "records need `#[derive(Render)]` with 1 to 7 fields; containers need renderable elements"
)]
pub trait Render: Probe {
    /// The resolved classification.
    const SHAPE: Shape;

    /// Write the textual form of `self`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Probe + ?Sized> Render for T
where
    ShapeOf<T>: Strategy<T>,
{
    const SHAPE: Shape = <ShapeOf<T> as Strategy<T>>::SHAPE;

    #[inline]
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <ShapeOf<T> as Strategy<T>>::write(self, f)
    }
}

/// Classification of `T`, evaluated at compile time.
pub const fn shape_of<T: Render + ?Sized>() -> Shape {
    T::SHAPE
}
