//! Recommendation API client
//!
//! One unauthenticated GET per detail page:
//! `GET {base_url}/recommendations/{contentid}?top_n={top_n}`.
//! No retry, no timeout, no cancellation.

use async_trait::async_trait;
use seoulhot_common::models::{ApiErrorBody, RecommendationResponse};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("seoulhot-web/", env!("CARGO_PKG_VERSION"));

/// Message used when a failure response carries no usable `detail`
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch recommendations";

/// Why recommendations could not be loaded
///
/// `Display` is the bare message shown on the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request never produced a response
    #[error("{0}")]
    Network(String),

    /// Server answered with a failure status
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// Success status with a body that is not a recommendation response
    #[error("{0}")]
    Decode(String),
}

/// Source of festival recommendations
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommendations(&self, content_id: &str) -> Result<RecommendationResponse, FetchError>;
}

/// HTTP client for the recommendation API
pub struct HttpRecommendationClient {
    http_client: reqwest::Client,
    base_url: String,
    top_n: u32,
}

impl HttpRecommendationClient {
    pub fn new(base_url: impl Into<String>, top_n: u32) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            top_n,
        })
    }

    /// Endpoint URL for one festival, without the query string
    pub fn endpoint(&self, content_id: &str) -> String {
        format!(
            "{}/recommendations/{}",
            self.base_url,
            urlencoding::encode(content_id)
        )
    }
}

#[async_trait]
impl RecommendationSource for HttpRecommendationClient {
    async fn recommendations(&self, content_id: &str) -> Result<RecommendationResponse, FetchError> {
        let url = self.endpoint(content_id);
        debug!(url = %url, top_n = self.top_n, "Requesting recommendations");

        let response = self
            .http_client
            .get(&url)
            .query(&[("top_n", self.top_n)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string());
            return Err(FetchError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let recommendations: RecommendationResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(
            track1 = recommendations.track1_similar.len(),
            track2 = recommendations.track2_unpopular.as_ref().map_or(0, Vec::len),
            "Recommendations received"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_content_id() {
        let client = HttpRecommendationClient::new("http://127.0.0.1:8000/", 3).unwrap();
        assert_eq!(
            client.endpoint("2631543"),
            "http://127.0.0.1:8000/recommendations/2631543"
        );
        assert_eq!(
            client.endpoint("a/b c"),
            "http://127.0.0.1:8000/recommendations/a%2Fb%20c"
        );
    }

    #[test]
    fn test_fetch_error_display_is_bare_message() {
        let err = FetchError::Api {
            status: 404,
            detail: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "not found");
        assert_eq!(FetchError::Decode("bad json".to_string()).to_string(), "bad json");
    }
}
