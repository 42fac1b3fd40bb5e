//! Normalization and ranking of raw Places API records into uniform rows.
//!
//! Raw places are heterogeneous: any field may be missing. Normalization maps
//! each record onto a fixed row shape where every field is always populated
//! (defaults, never `None`), then ranking orders rows so businesses *without*
//! a website come first — those are the leads this tool exists to find.

use crate::types::RawPlace;

/// A uniform row derived from one [`RawPlace`].
///
/// Held only for the duration of a single search-and-render cycle; a new
/// search supersedes and discards the previous rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPlace {
    pub name: String,
    pub address: String,
    pub price_level: String,
    pub has_website: bool,
    /// The website URI when `has_website` is true, otherwise `"N/A"`.
    pub website: String,
}

/// Converts one [`RawPlace`] into a [`NormalizedPlace`]. Pure and total:
/// missing optional fields resolve to literal defaults, never to an error.
///
/// A website counts as present only when `website_uri` exists AND is a
/// non-empty string; an empty string is treated as absent.
#[must_use]
pub fn normalize_place(place: &RawPlace) -> NormalizedPlace {
    let name = place
        .display_name
        .as_ref()
        .and_then(|d| d.text.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let website = place
        .website_uri
        .as_deref()
        .filter(|uri| !uri.is_empty());

    NormalizedPlace {
        name,
        address: place
            .formatted_address
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        price_level: place
            .price_level
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        has_website: website.is_some(),
        website: website.map_or_else(|| "N/A".to_string(), ToString::to_string),
    }
}

/// Normalizes a batch of raw places and orders them website-less first.
///
/// Pure function: same input, same output; no I/O, no hidden state. Produces
/// exactly one row per input record. The sort key is `has_website` ascending
/// (false before true) and `sort_by_key` is stable, so rows with equal keys
/// keep their original relative order.
#[must_use]
pub fn normalize_and_rank(places: &[RawPlace]) -> Vec<NormalizedPlace> {
    let mut rows: Vec<NormalizedPlace> = places.iter().map(normalize_place).collect();
    rows.sort_by_key(|row| row.has_website);
    rows
}
