//! Special shapes: fixed rendering rules that bypass generic traversal.
//!
//! These are matched nominally through `Probe::Special`, before any
//! structural check. `BinaryHeap` is traversable, but its iteration order is
//! arbitrary; it must be drained by priority instead, so the special slot
//! wins over `Sequence`.
//!
//! Draining strategies never touch the value they are given: they clone it
//! and drain the clone, which is dropped before `write` returns.

use core::fmt;

use super::list::Delimited;
use super::{Render, Shape, SpecialKind, Strategy};
use crate::primitives::{Absent, Present};
use crate::probe::{Probe, SpecialSlot};

/// Two-part pair: `(first, second)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pair;

/// Fixed-arity tuple: `(a, b, c)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple;

/// FIFO queue, drained front to back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

/// LIFO stack, drained top to bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

/// Priority queue, drained highest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

/// References and owning pointers, rendered as their pointee.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indirect;

macro_rules! special_slot {
    ($($tag:ty),* $(,)?) => {
        $(
            impl SpecialSlot for $tag {
                type Or<Fallback> = $tag;
            }
        )*
    };
}

special_slot!(Pair, Tuple, Fifo, Lifo, Priority, Indirect);

// =============================================================================
// Indirect
// =============================================================================

/// A value rendered as the value it wraps.
///
/// Implemented for references, owning pointers and `Reverse`, next to their
/// `Probe` registrations.
pub trait Transparent {
    type Inner: ?Sized;

    fn inner(&self) -> &Self::Inner;
}

impl<P: Transparent + ?Sized> Strategy<P> for Indirect
where
    P::Inner: Render,
{
    const SHAPE: Shape = <P::Inner as Render>::SHAPE;

    #[inline]
    fn write(value: &P, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value.inner().render(f)
    }
}

// =============================================================================
// Pair / Tuple
// =============================================================================

impl<A, B> Probe for (A, B) {
    type Special = Pair;
    type Native = Absent;
    type Traversable = Absent;
    type DeclaresKey = Absent;
    type PairElements = Absent;
    type PairShaped = Present;
}

impl<A: Render, B: Render> Strategy<(A, B)> for Pair {
    const SHAPE: Shape = Shape::Special(SpecialKind::Pair);

    fn write(value: &(A, B), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pair = Delimited::open(f, "(", ")")?;
        pair.item(&value.0)?;
        pair.item(&value.1)?;
        pair.close()
    }
}

// Generates `Probe` and `Strategy<(T0, ..)> for Tuple` for every tuple
// arity up to 12, skipping 2 (the pair above).
macros::tuple_shapes!(12);

// =============================================================================
// Queue / Stack / BinaryHeap
// =============================================================================

#[cfg(feature = "alloc")]
mod drained {
    use alloc::collections::BinaryHeap;

    use super::*;
    use crate::adapters::{Queue, Stack};

    impl<T> Probe for Queue<T> {
        type Special = Fifo;
        type Native = Absent;
        type Traversable = Absent;
        type DeclaresKey = Absent;
        type PairElements = Absent;
        type PairShaped = Absent;
    }

    impl<T> Probe for Stack<T> {
        type Special = Lifo;
        type Native = Absent;
        type Traversable = Absent;
        type DeclaresKey = Absent;
        type PairElements = Absent;
        type PairShaped = Absent;
    }

    impl<T: Clone + Render> Strategy<Queue<T>> for Fifo {
        const SHAPE: Shape = Shape::Special(SpecialKind::Queue);

        fn write(value: &Queue<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut drained = value.clone();
            let mut list = Delimited::open(f, "[", "]")?;
            while let Some(item) = drained.pop() {
                list.item(&item)?;
            }
            list.close()
        }
    }

    impl<T: Clone + Render> Strategy<Stack<T>> for Lifo {
        const SHAPE: Shape = Shape::Special(SpecialKind::Stack);

        fn write(value: &Stack<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut drained = value.clone();
            let mut list = Delimited::open(f, "[", "]")?;
            while let Some(item) = drained.pop() {
                list.item(&item)?;
            }
            list.close()
        }
    }

    impl<T: Ord + Clone + Render> Strategy<BinaryHeap<T>> for Priority {
        const SHAPE: Shape = Shape::Special(SpecialKind::PriorityQueue);

        fn write(value: &BinaryHeap<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut drained = value.clone();
            let mut list = Delimited::open(f, "[", "]")?;
            while let Some(item) = drained.pop() {
                list.item(&item)?;
            }
            list.close()
        }
    }
}
