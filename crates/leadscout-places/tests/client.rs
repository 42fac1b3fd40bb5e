//! Integration tests for `PlacesClient` and the pipeline using wiremock HTTP mocks.

use leadscout_places::pipeline::search_and_rank_with_base_url;
use leadscout_places::{PlacesClient, PlacesError};
use wiremock::matchers::{body_json, header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_text_sends_field_mask_and_api_key_headers() {
    let server = MockServer::start().await;

    let response = serde_json::json!({
        "places": [
            {
                "displayName": { "text": "Cafe A", "languageCode": "en" },
                "formattedAddress": "1 Main St, Houston, TX",
                "priceLevel": "PRICE_LEVEL_INEXPENSIVE",
                "websiteUri": "https://cafe-a.example"
            },
            {
                "displayName": { "text": "Cafe B" },
                "formattedAddress": "2 Oak Ave, Houston, TX"
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "test-key"))
        // wiremock splits comma-separated header values, so the mask is
        // matched as its comma-separated parts via the multi-value matcher.
        .and(headers(
            "X-Goog-FieldMask",
            vec![
                "places.displayName",
                "places.formattedAddress",
                "places.priceLevel",
                "places.websiteUri",
            ],
        ))
        .and(header("content-type", "application/json"))
        .and(body_json(
            serde_json::json!({ "textQuery": "coffee shops in houston" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .search_text("coffee shops in houston")
        .await
        .expect("should parse places");

    assert_eq!(places.len(), 2);
    assert_eq!(
        places[0].display_name.as_ref().and_then(|d| d.text.as_deref()),
        Some("Cafe A")
    );
    assert_eq!(
        places[0].website_uri.as_deref(),
        Some("https://cafe-a.example")
    );
    assert_eq!(places[1].website_uri, None);
    assert_eq!(places[1].price_level, None);
}

#[tokio::test]
async fn missing_places_key_is_a_valid_empty_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .search_text("bookstores on the moon")
        .await
        .expect("empty response should succeed");

    assert!(places.is_empty());
}

#[tokio::test]
async fn empty_places_list_is_a_valid_empty_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "places": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client.search_text("gyms").await.expect("should succeed");
    assert!(places.is_empty());
}

#[tokio::test]
async fn non_success_status_returns_request_failed_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_text("pizza").await;

    match result {
        Err(PlacesError::RequestFailed { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_returns_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_text("pizza").await;
    assert!(
        matches!(result, Err(PlacesError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn pipeline_ranks_websiteless_places_first() {
    let server = MockServer::start().await;

    let response = serde_json::json!({
        "places": [
            {
                "displayName": { "text": "Has Site" },
                "websiteUri": "http://x.com"
            },
            {
                "displayName": { "text": "No Site" }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let rows = search_and_rank_with_base_url("coffee", "test-key", 30, &server.uri())
        .await
        .expect("pipeline should succeed");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "No Site");
    assert!(!rows[0].has_website);
    assert_eq!(rows[0].website, "N/A");
    assert_eq!(rows[1].name, "Has Site");
    assert!(rows[1].has_website);
    assert_eq!(rows[1].website, "http://x.com");
}

#[tokio::test]
async fn pipeline_validation_failure_issues_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let result = search_and_rank_with_base_url("", "test-key", 30, &server.uri()).await;
    assert!(matches!(result, Err(PlacesError::Validation(_))));

    let received = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(
        received.is_empty(),
        "validation must reject before any network call, saw {} request(s)",
        received.len()
    );
}
