//! Runtime mirror of a type's classification.

use core::fmt;

/// The strategy a type renders through.
///
/// Exactly one applies per type. Read it with [`shape_of`](super::shape_of)
/// or `<T as Render>::SHAPE`; both are compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Written through the type's own `Display`.
    Native,
    /// `{k1: v1, k2: v2}`
    KeyValue,
    /// `[e1, e2]`
    Sequence,
    /// `(f1, ..., fN)` with N fields.
    Record(usize),
    /// Fixed rendering rule, bypassing generic traversal.
    Special(SpecialKind),
}

/// Container kinds whose rendering bypasses generic traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    Pair,
    Tuple,
    /// FIFO, drained front to back.
    Queue,
    /// LIFO, drained top to bottom.
    Stack,
    /// Drained highest priority first.
    PriorityQueue,
}

impl SpecialKind {
    pub const fn name(self) -> &'static str {
        match self {
            SpecialKind::Pair => "pair",
            SpecialKind::Tuple => "tuple",
            SpecialKind::Queue => "queue",
            SpecialKind::Stack => "stack",
            SpecialKind::PriorityQueue => "priority-queue",
        }
    }
}

impl Shape {
    /// Whether rendering drains a clone of the value.
    pub const fn is_drained(self) -> bool {
        matches!(
            self,
            Shape::Special(SpecialKind::Queue | SpecialKind::Stack | SpecialKind::PriorityQueue)
        )
    }
}

impl fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Native => f.write_str("native"),
            Shape::KeyValue => f.write_str("key-value"),
            Shape::Sequence => f.write_str("sequence"),
            Shape::Record(n) => write!(f, "record/{n}"),
            Shape::Special(kind) => write!(f, "special:{kind}"),
        }
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_shape_names() {
        assert_eq!(Shape::Record(3).to_string(), "record/3");
        assert_eq!(Shape::Special(SpecialKind::PriorityQueue).to_string(), "special:priority-queue");
        assert_eq!(Shape::KeyValue.to_string(), "key-value");
    }

    #[test]
    fn test_drained_shapes() {
        assert!(Shape::Special(SpecialKind::Stack).is_drained());
        assert!(!Shape::Special(SpecialKind::Pair).is_drained());
        assert!(!Shape::Sequence.is_drained());
    }
}
