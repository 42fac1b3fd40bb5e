#[derive(Clone)]
pub struct AppConfig {
    /// Google Places API key. Optional here because the CLI may supply it as
    /// a flag instead; credential acquisition is the caller's concern.
    pub google_places_api_key: Option<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Base URL of the Places API. Overridable for tests and proxies.
    pub places_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_places_api_key",
                &self.google_places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("places_base_url", &self.places_base_url)
            .finish()
    }
}
