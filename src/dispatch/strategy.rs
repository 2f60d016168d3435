//! Structural strategies: Native, KeyValue, Sequence, Record.

use core::fmt;

use super::list::Delimited;
use super::{Render, Shape, Strategy};
use crate::primitives::Arity;
use crate::probe::PairLike;
use crate::record::Fields;

/// Delegates to the type's own `Display`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

/// `{k1: v1, k2: v2}` in traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValue;

/// `[e1, e2]` in traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequence;

/// `(f1, ..., fN)` in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Record;

// =============================================================================
// Native
// =============================================================================

impl<T: fmt::Display + ?Sized> Strategy<T> for Native {
    const SHAPE: Shape = Shape::Native;

    #[inline]
    fn write(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

// =============================================================================
// Sequence
// =============================================================================

impl<T: ?Sized> Strategy<T> for Sequence
where
    for<'a> &'a T: IntoIterator,
    for<'a> <&'a T as IntoIterator>::Item: Render,
{
    const SHAPE: Shape = Shape::Sequence;

    fn write(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = Delimited::open(f, "[", "]")?;
        for item in value {
            list.item(&item)?;
        }
        list.close()
    }
}

// =============================================================================
// KeyValue
// =============================================================================

/// A traversal element written as `key: value`.
pub trait Entry {
    fn write_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<P: PairLike + ?Sized> Entry for P
where
    P::First: Render,
    P::Second: Render,
{
    fn write_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.first().render(f)?;
        f.write_str(": ")?;
        self.second().render(f)
    }
}

impl<T: ?Sized> Strategy<T> for KeyValue
where
    for<'a> &'a T: IntoIterator,
    for<'a> <&'a T as IntoIterator>::Item: Entry,
{
    const SHAPE: Shape = Shape::KeyValue;

    fn write(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = Delimited::open(f, "{", "}")?;
        for entry in value {
            map.entry(&entry)?;
        }
        map.close()
    }
}

// =============================================================================
// Record
// =============================================================================

impl<T: Fields + ?Sized> Strategy<T> for Record {
    const SHAPE: Shape = Shape::Record(<T::Arity as Arity>::COUNT);

    fn write(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut record = Delimited::open(f, "(", ")")?;
        value.visit(&mut record)?;
        debug_assert_eq!(
            record.count(),
            <T::Arity as Arity>::COUNT,
            "field visitor disagrees with declared arity"
        );
        record.close()
    }
}
