//! Common parsing utilities
//!
//! `#[view(...)]` container attributes for `#[derive(Render)]`.

use syn::{spanned::Spanned, Attribute, Ident};

// =============================================================================
// View Mode
// =============================================================================

/// How a derived type is classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// No attribute: a record rendered field by field.
    Record,
    /// `#[view(display)]`: natively renderable through its own `Display`.
    Display,
    /// `#[view(sequence)]`: traversable through `&Self: IntoIterator`.
    Sequence,
    /// `#[view(map)]`: traversable, keyed, yielding pairs.
    Map,
}

impl ViewMode {
    fn from_keyword(ident: &Ident) -> syn::Result<Self> {
        match ident.to_string().as_str() {
            "display" => Ok(ViewMode::Display),
            "sequence" => Ok(ViewMode::Sequence),
            "map" => Ok(ViewMode::Map),
            other => Err(syn::Error::new(
                ident.span(),
                format!("unknown view mode `{}`, expected `display`, `sequence` or `map`", other),
            )),
        }
    }
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Collect the view mode from a type's attributes.
///
/// At most one mode may be given across all `#[view(...)]` attributes.
pub fn parse_view_mode(attrs: &[Attribute]) -> syn::Result<ViewMode> {
    let mut mode: Option<(ViewMode, Ident)> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("view")) {
        attr.parse_nested_meta(|meta| {
            let ident = meta
                .path
                .get_ident()
                .cloned()
                .ok_or_else(|| meta.error("expected a view mode identifier"))?;
            let parsed = ViewMode::from_keyword(&ident)?;
            if let Some((_, first)) = &mode {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("conflicting view mode, `{}` already given", first),
                ));
            }
            mode = Some((parsed, ident));
            Ok(())
        })?;
    }

    Ok(mode.map_or(ViewMode::Record, |(mode, _)| mode))
}

/// Reject `#[view]` on fields: modes apply to the whole type.
pub fn reject_field_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("view")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "`#[view(...)]` is only allowed on the type, not on fields",
        )),
        None => Ok(()),
    }
}
