use thiserror::Error;

/// Errors returned by the Places search pipeline.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Bad caller input (empty query or credential), raised before any I/O.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The Places API answered with a non-2xx status. The raw body is kept
    /// for display to the user.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Network-level failure from the underlying HTTP client (DNS, timeout,
    /// connection reset, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
