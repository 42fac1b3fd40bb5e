//! Search-and-rank pipeline orchestration.
//!
//! The single entry point the presentation layer calls: validate input, issue
//! one text search, normalize and rank the results. Stateless and single-shot;
//! each invocation is independent and nothing is cached between calls.

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::normalize::{normalize_and_rank, NormalizedPlace};

/// Runs the full search pipeline for one query.
///
/// 1. Validate that `query` and `api_key` are non-empty (no network call is
///    made when validation fails).
/// 2. Issue one `searchText` request.
/// 3. Normalize every returned record and rank websiteless businesses first.
///
/// An empty result set is a valid zero-length success, not an error.
///
/// # Errors
///
/// - [`PlacesError::Validation`] for an empty query or credential.
/// - [`PlacesError::RequestFailed`], [`PlacesError::Transport`], or
///   [`PlacesError::Deserialize`] propagated from the client. No automatic
///   retry: the caller decides whether to re-issue.
pub async fn search_and_rank(
    query: &str,
    api_key: &str,
    timeout_secs: u64,
) -> Result<Vec<NormalizedPlace>, PlacesError> {
    let client = build_validated_client(query, api_key, timeout_secs, None)?;
    run(&client, query).await
}

/// Same as [`search_and_rank`] but against a custom base URL (for tests).
///
/// # Errors
///
/// See [`search_and_rank`].
pub async fn search_and_rank_with_base_url(
    query: &str,
    api_key: &str,
    timeout_secs: u64,
    base_url: &str,
) -> Result<Vec<NormalizedPlace>, PlacesError> {
    let client = build_validated_client(query, api_key, timeout_secs, Some(base_url))?;
    run(&client, query).await
}

fn build_validated_client(
    query: &str,
    api_key: &str,
    timeout_secs: u64,
    base_url: Option<&str>,
) -> Result<PlacesClient, PlacesError> {
    if query.trim().is_empty() {
        return Err(PlacesError::Validation(
            "search query must not be empty".to_string(),
        ));
    }
    if api_key.trim().is_empty() {
        return Err(PlacesError::Validation(
            "API key must not be empty".to_string(),
        ));
    }

    match base_url {
        Some(url) => PlacesClient::with_base_url(api_key, timeout_secs, url),
        None => PlacesClient::new(api_key, timeout_secs),
    }
}

async fn run(client: &PlacesClient, query: &str) -> Result<Vec<NormalizedPlace>, PlacesError> {
    let places = client.search_text(query).await?;

    if places.is_empty() {
        tracing::info!(query, "search returned no places");
        return Ok(Vec::new());
    }

    tracing::info!(query, count = places.len(), "search returned places");
    Ok(normalize_and_rank(&places))
}
