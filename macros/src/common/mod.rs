// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: `#[view(...)]` attribute parsing

mod parse_utils;

pub use parse_utils::*;
