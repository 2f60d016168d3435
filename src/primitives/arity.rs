//! Type-level arity window.
//!
//! Records decompose into `A1..=A7` fields. There is deliberately no `A0`
//! and no `A8`: a declaration outside the window has no `Arity` type to name
//! and fails to type-check instead of rendering a truncated record.

/// A supported record arity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported record arity",
    label = "records must have between 1 and 7 fields",
    note = "supported arities are `A1` through `A7`"
)]
pub trait Arity: 'static {
    /// Number of fields.
    const COUNT: usize;
}

/// Maps a field count onto its arity type.
///
/// Implemented for `N` in `1..=7` only.
#[diagnostic::on_unimplemented(
    message = "a record with {N} fields is outside the supported arity window",
    label = "records must have between 1 and 7 fields"
)]
pub trait ArityWindow<const N: usize> {
    type Out: Arity;
}

// Generates: pub struct A1..A7, `Arity` impls and `ArityWindow<N>` impls.
macros::arity_window!(7);

/// Number of fields carried by an arity type.
pub const fn count<A: Arity>() -> usize {
    A::COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        assert_eq!(count::<A1>(), 1);
        assert_eq!(count::<A7>(), 7);
    }

    #[test]
    fn test_window_maps_counts() {
        assert_eq!(<<() as ArityWindow<3>>::Out as Arity>::COUNT, 3);
        assert_eq!(<<() as ArityWindow<5>>::Out as Arity>::COUNT, 5);
    }
}
