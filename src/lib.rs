#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashMap, HashSet, render_io)
// - alloc: enables alloc collections and the Queue/Stack adapters in no_std
// - detect: structural probe detection (detect! macro)
// - tracing: one trace event per top-level render

//! # container-view
//!
//! **Compile-time shape dispatch for rendering values as text.**
//!
//! Give it a container, tuple or record and it picks a rendering strategy
//! from the type's structural shape alone; no per-type formatting code and no
//! runtime type information.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present/Absent, If, And), arity window A1-A7  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Probe                                        |
//! |  - Probe (Native, Traversable, DeclaresKey, PairElements)         |
//! |  - Keyed, PairLike, detect! for concrete types                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Arity Inspector                                         |
//! |  - Fields, #[derive(Render)], impl_record!                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Dispatcher                                              |
//! |  - ShapeOf<T> selects a Strategy; Render is blanket-implemented   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Entry Points                                            |
//! |  - View, ViewExt::view, render_to, render_io, to_view_string      |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Grammar
//!
//! | Shape | Output |
//! |-------|--------|
//! | Sequence | `[e1, e2, e3]`, empty `[]` |
//! | Key-value | `{k1: v1, k2: v2}`, empty `{}` |
//! | Record | `(f1, f2, f3)` |
//! | Pair / tuple | `(first, second)` |
//! | Queue / stack / priority queue | `[..]` in drain order |
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeMap;
//! use container_view::{Render, ViewExt};
//!
//! #[derive(Render)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let nested = vec![vec![0, 1, 2], vec![0, 1], vec![0]];
//! assert_eq!(nested.view().to_string(), "[[0, 1, 2], [0, 1], [0]]");
//!
//! let map = BTreeMap::from([('a', 1), ('b', 2)]);
//! assert_eq!(map.view().to_string(), "{a: 1, b: 2}");
//!
//! assert_eq!(Point { x: 3, y: 4 }.view().to_string(), "(3, 4)");
//! assert_eq!((1, 'a', 2.3).view().to_string(), "(1, a, 2.3)");
//! ```
//!
//! ## Failure Is a Build Error
//!
//! A type that fits no shape cannot be rendered at all:
//!
//! ```compile_fail
//! use container_view::ViewExt;
//!
//! struct Unregistered(u8);
//! let _ = Unregistered(1).view();
//! ```
//!
//! ```compile_fail
//! use container_view::Render;
//!
//! #[derive(Render)]
//! enum Direction { North, South }
//! ```

// Allow `::container_view` to work inside the crate itself
extern crate self as container_view;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for downstream declarative macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Probe
// =============================================================================
pub mod probe;

// =============================================================================
// Layer 2: Arity Inspector
// =============================================================================
pub mod record;

// =============================================================================
// Layer 3: Dispatcher
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 4: Entry Points
// =============================================================================
pub mod view;

#[cfg(feature = "alloc")]
pub mod adapters;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Absent, Arity, Bool, Present};
pub use probe::{Keyed, PairLike, Probe, Probes};
pub use record::{arity_of, FieldVisitor, Fields};
pub use dispatch::{shape_of, Render, Shape, ShapeOf, SpecialKind, Strategy};
pub use view::{render_to, view, View, ViewExt};

#[cfg(feature = "std")]
pub use view::render_io;

#[cfg(feature = "alloc")]
pub use view::to_view_string;

#[cfg(feature = "alloc")]
pub use adapters::{Queue, Stack};

// Re-export the derive (same name as the trait, different namespace)
pub use macros::Render;

/// Common items for rendering.
pub mod prelude {
    pub use crate::dispatch::{Render, Shape, SpecialKind};
    pub use crate::view::{view, ViewExt};
    pub use crate::probe::{Keyed, PairLike};
    pub use macros::Render;
    #[cfg(feature = "alloc")]
    pub use crate::adapters::{Queue, Stack};
}
