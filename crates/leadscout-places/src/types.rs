//! Google Places API (New) response types.
//!
//! All types model the JSON returned by the `places:searchText` endpoint when
//! called with the field mask
//! `places.displayName,places.formattedAddress,places.priceLevel,places.websiteUri`.
//! Every field on a place is optional on the wire; the API simply omits keys
//! it has no data for, so everything here carries `#[serde(default)]`.

use serde::Deserialize;

/// Top-level envelope for a `searchText` response: `{ "places": [...] }`.
///
/// The `places` key is omitted entirely when the query matches nothing, so it
/// defaults to an empty list. An absent key and an empty list are both valid
/// zero-result successes, not errors.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<RawPlace>,
}

/// A single business location as delivered by the API.
///
/// Any field may be absent depending on what data Google holds for the place.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default)]
    pub display_name: Option<DisplayName>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// API enum string, e.g. `"PRICE_LEVEL_MODERATE"`.
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub website_uri: Option<String>,
}

/// Localized display name wrapper: `{ "text": "...", "languageCode": "..." }`.
///
/// Only `text` is requested by the field mask; `text` itself can still be
/// missing on sparse records.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayName {
    #[serde(default)]
    pub text: Option<String>,
}
