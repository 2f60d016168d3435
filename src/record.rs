//! # Layer 2: Arity Inspector
//!
//! Records (plain structs that are neither natively renderable nor
//! traversable) render as `(f1, ..., fN)`. Their field list is declared once
//! per type, either by `#[derive(Render)]` or by [`impl_record!`], and the
//! field count is carried as an [`Arity`] type from the window `A1..=A7`.
//!
//! A record with no fields or with more than 7 fields is rejected when the
//! declaration is compiled:
//!
//! ```compile_fail
//! use container_view::Render;
//!
//! #[derive(Render)]
//! struct Wide(u8, u8, u8, u8, u8, u8, u8, u8);
//! ```
//!
//! ```compile_fail
//! use container_view::Render;
//!
//! #[derive(Render)]
//! struct Nothing;
//! ```
//!
//! ```compile_fail
//! use container_view::Render;
//!
//! #[derive(Render)]
//! struct Braced {}
//! ```
//!
//! ```compile_fail
//! struct Octet { a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8 }
//! container_view::impl_record!(Octet { a, b, c, d, e, f, g, h });
//! ```
//!
//! Native rendering takes priority over the record fallback, so a record
//! type that implements `Display` must say which one it means:
//!
//! ```compile_fail
//! use std::fmt;
//! use container_view::Render;
//!
//! #[derive(Render)]
//! struct Celsius { deg: i32 }
//!
//! impl fmt::Display for Celsius {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}C", self.deg)
//!     }
//! }
//! ```
//!
//! ```compile_fail
//! use std::fmt;
//!
//! struct Celsius { deg: i32 }
//! container_view::impl_record!(Celsius { deg });
//!
//! impl fmt::Display for Celsius {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}C", self.deg)
//!     }
//! }
//! ```

use core::fmt;

use crate::dispatch::Render;
use crate::primitives::Arity;

/// Declared field list of a record type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare its fields",
    label = "not a registered record",
    note = "add `#[derive(Render)]` or `impl_record!` for this type"
)]
pub trait Fields {
    /// Number of fields, within `A1..=A7`.
    type Arity: Arity;

    /// Visit every field in declaration order.
    fn visit<V: FieldVisitor>(&self, visitor: &mut V) -> fmt::Result;
}

/// Receives record fields in declaration order.
pub trait FieldVisitor {
    fn field<F: Render + ?Sized>(&mut self, value: &F) -> fmt::Result;
}

/// Field count of a record type.
pub const fn arity_of<T: Fields + ?Sized>() -> usize {
    <T::Arity as Arity>::COUNT
}

/// Register a record type by listing its fields.
///
/// For types that cannot use `#[derive(Render)]`. Named fields are listed by
/// name, tuple-struct fields by index.
///
/// ```
/// use container_view::{impl_record, ViewExt};
///
/// pub struct Point { pub x: i32, pub y: i32 }
/// impl_record!(Point { x, y });
///
/// pub struct Meters(pub f64);
/// impl_record!(Meters { 0 });
///
/// assert_eq!(Point { x: 3, y: 4 }.view().to_string(), "(3, 4)");
/// assert_eq!(Meters(1.5).view().to_string(), "(1.5)");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:tt),+ $(,)? }) => {
        const _: () = ::core::assert!(
            $crate::__count_fields!($($field)+) <= 7,
            ::core::concat!("`", ::core::stringify!($ty), "` declares more than 7 fields; records must have between 1 and 7"),
        );

        const _: () = {
            #[allow(unused_imports)]
            use $crate::probe::detect::{Detect, NativeFallback};
            ::core::assert!(
                !Detect::<$ty>::IS_NATIVE,
                ::core::concat!("`", ::core::stringify!($ty), "` implements `Display`; render it natively instead of as a record"),
            );
        };

        impl $crate::Probe for $ty {
            type Special = $crate::probe::Structural;
            type Native = $crate::Absent;
            type Traversable = $crate::Absent;
            type DeclaresKey = $crate::Absent;
            type PairElements = $crate::Absent;
            type PairShaped = $crate::Absent;
        }

        impl $crate::Fields for $ty {
            type Arity = <() as $crate::primitives::ArityWindow<{ $crate::__count_fields!($($field)+) }>>::Out;

            fn visit<V: $crate::FieldVisitor>(&self, visitor: &mut V) -> ::core::fmt::Result {
                $( visitor.field(&self.$field)?; )+
                ::core::result::Result::Ok(())
            }
        }
    };
}

/// Internal macro: count token trees.
#[macro_export]
#[doc(hidden)]
macro_rules! __count_fields {
    () => { 0usize };
    ($head:tt $($tail:tt)*) => { 1usize + $crate::__count_fields!($($tail)*) };
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::primitives::{A2, A3};
    use crate::ViewExt;
    use alloc::string::ToString;

    struct Rgb {
        r: u8,
        g: u8,
        b: u8,
    }
    impl_record!(Rgb { r, g, b });

    struct Span(usize, usize);
    impl_record!(Span { 0, 1 });

    #[test]
    fn test_impl_record_arity() {
        assert_eq!(arity_of::<Rgb>(), 3);
        assert_eq!(arity_of::<Span>(), 2);
        assert_eq!(<<Rgb as Fields>::Arity as Arity>::COUNT, A3::COUNT);
        assert_eq!(<<Span as Fields>::Arity as Arity>::COUNT, A2::COUNT);
    }

    #[test]
    fn test_impl_record_renders_in_declaration_order() {
        assert_eq!(Rgb { r: 255, g: 128, b: 0 }.view().to_string(), "(255, 128, 0)");
        assert_eq!(Span(4, 9).view().to_string(), "(4, 9)");
    }
}
