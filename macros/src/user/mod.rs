//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Render)]` | on struct | Register a record (1 to 7 fields) |
//! | `#[derive(Render)]` + `#[view(display)]` | on any type | Render through `Display` |
//! | `#[derive(Render)]` + `#[view(sequence)]` | on containers | Render as `[..]` |
//! | `#[derive(Render)]` + `#[view(map)]` | on keyed containers | Render as `{k: v}` |

pub mod render;

pub use render::expand_derive_render;
