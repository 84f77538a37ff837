//! iTunes Search API client
//!
//! Read-only catalog queries. The endpoint, media filter and result
//! ceiling are fixed; only the free-text term varies.

use std::time::Duration;
use thiserror::Error;

use super::types::{SearchResponse, Track};

const ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";
const MEDIA_TYPE: &str = "music";
const RESULT_LIMIT: u32 = 100;
const USER_AGENT: &str = concat!("trackpeek/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT_SECS: u64 = 30;

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// iTunes Search API client
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { http })
    }

    /// Search the catalog for music tracks matching `term`.
    ///
    /// Returns tracks in API response order. Non-2xx statuses and
    /// transport failures surface as errors; the caller decides what to
    /// keep on failure.
    pub async fn search(&self, term: &str) -> Result<Vec<Track>, CatalogError> {
        tracing::debug!(term = %term, "Querying iTunes Search API");

        let limit = RESULT_LIMIT.to_string();
        let response = self
            .http
            .get(ITUNES_SEARCH_URL)
            .query(&[
                ("term", term),
                ("media", MEDIA_TYPE),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api(status.as_u16(), body));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(
            term = %term,
            result_count = parsed.result_count,
            "Catalog search completed"
        );

        Ok(parsed.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "resultCount": 2,
            "results": [
                {
                    "trackName": "Tum Hi Ho",
                    "artistName": "Arijit Singh",
                    "artworkUrl100": "https://example.com/a.jpg",
                    "previewUrl": "https://example.com/a.m4a"
                },
                {
                    "artistName": "Unknown",
                    "collectionName": "extraneous field"
                }
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result_count, 2);
        assert_eq!(parsed.results.len(), 2);

        let full = &parsed.results[0];
        assert_eq!(full.title(), "Tum Hi Ho");
        assert_eq!(full.artist(), "Arijit Singh");
        assert!(full.has_preview());

        // Missing fields render as blanks, and no preview means disabled.
        let sparse = &parsed.results[1];
        assert_eq!(sparse.title(), "");
        assert_eq!(sparse.artwork(), "");
        assert!(!sparse.has_preview());
    }

    #[test]
    fn test_empty_preview_url_is_not_playable() {
        let track: Track =
            serde_json::from_str(r#"{"trackName": "x", "previewUrl": ""}"#).unwrap();
        assert!(!track.has_preview());
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Api(503, "unavailable".to_string());
        assert_eq!(err.to_string(), "API error 503: unavailable");
    }
}
