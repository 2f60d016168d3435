//! # Layer 0: Primitives
//!
//! Basic building blocks for shape dispatch:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `arity.rs`: The record arity window (A1-A7).

pub mod bool;
pub mod arity;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent, SelectBool, And, Or, If, IfConst};
pub use arity::{Arity, ArityWindow, A1, A2, A3, A4, A5, A6, A7};
