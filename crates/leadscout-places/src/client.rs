//! HTTP client for the Google Places `searchText` endpoint.
//!
//! Wraps `reqwest` with Places-specific error handling, API key management,
//! and typed response deserialization. Exactly one outbound request per call,
//! no retry: the caller decides whether to re-issue a failed search.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};

use crate::error::PlacesError;
use crate::types::{RawPlace, SearchTextResponse};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

/// Relative path of the text-search endpoint under the base URL.
const SEARCH_TEXT_PATH: &str = "v1/places:searchText";

/// Field mask limiting which place fields the API returns. This is a
/// cost/bandwidth control and is fixed for every call, not negotiable.
const FIELD_MASK: &str =
    "places.displayName,places.formattedAddress,places.priceLevel,places.websiteUri";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Client for the Places text-search API.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::Validation`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadscout/0.1 (lead-finding)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PlacesError::Validation(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches for places matching a free-text query.
    ///
    /// Sends one POST to the `searchText` endpoint with body
    /// `{"textQuery": query}` and the fixed field mask requesting display
    /// name, formatted address, price level, and website URI. An absent
    /// `places` key and an empty list are both valid zero-result successes.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::RequestFailed`] on a non-2xx status, carrying the
    ///   status code and raw body.
    /// - [`PlacesError::Transport`] on network failure (DNS, timeout, reset).
    /// - [`PlacesError::Deserialize`] if a 2xx body does not match the
    ///   expected shape.
    pub async fn search_text(&self, query: &str) -> Result<Vec<RawPlace>, PlacesError> {
        let url = self.search_text_url();

        tracing::debug!(%url, query, "issuing places text search");

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(&serde_json::json!({ "textQuery": query }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::request_failed(status, body));
        }

        let parsed: SearchTextResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Ok(parsed.places)
    }

    /// Builds the full `searchText` endpoint URL from the stored base URL.
    fn search_text_url(&self) -> Url {
        // The base URL was validated in the constructor and the path is a
        // constant, so join cannot fail; fall back to the base on the
        // unreachable branch rather than panicking.
        self.base_url
            .join(SEARCH_TEXT_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    fn request_failed(status: StatusCode, body: String) -> PlacesError {
        PlacesError::RequestFailed {
            status: status.as_u16(),
            body,
        }
    }
}
