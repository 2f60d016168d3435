//! Procedural macros for the container-view shape dispatcher
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Render)]` | struct | Register a record of 1 to 7 fields |
//! | `#[view(display)]` | any type | Render through the type's `Display` |
//! | `#[view(sequence)]` | container | Render as `[e1, e2]` |
//! | `#[view(map)]` | keyed container | Render as `{k1: v1}` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Render)]
//! struct Point { x: i32, y: i32 }
//!
//! assert_eq!(Point { x: 3, y: 4 }.view().to_string(), "(3, 4)");
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate the record arity window A1..An.
///
/// # Usage
/// ```ignore
/// arity_window!(7);  // A1..A7, `Arity` impls, `ArityWindow<1..=7>` impls
/// ```
///
/// Expects `Arity` and `ArityWindow` in scope at the call site.
#[proc_macro]
pub fn arity_window(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::arity::WindowInput);
    inner::arity::expand_arity_window(input).into()
}

/// Generate `Probe` and the `Tuple` strategy for tuple arities 0..=n, except 2.
///
/// Expects the dispatcher items (`Probe`, `Tuple`, `Absent`, `Render`,
/// `Strategy`, `Shape`, `SpecialKind`, `Delimited`, `fmt`) in scope.
#[proc_macro]
pub fn tuple_shapes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuples::TupleInput);
    inner::tuples::expand_tuple_shapes(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive macro registering a type with the shape dispatcher.
///
/// # Usage
/// ```ignore
/// #[derive(Render)]
/// struct Span(usize, usize);           // record: "(4, 9)"
///
/// #[derive(Render)]
/// #[view(display)]
/// enum Level { Low, High }             // uses `impl Display for Level`
///
/// #[derive(Render)]
/// #[view(sequence)]
/// struct Ring { items: Vec<u8> }       // needs `impl IntoIterator for &Ring`
/// ```
///
/// Records with no fields or more than 7 fields, enums, unions and unit
/// structs without a `#[view(...)]` mode are rejected with a compile error.
#[proc_macro_derive(Render, attributes(view))]
pub fn derive_render(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_render(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
