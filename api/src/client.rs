//! Core request plumbing shared by every endpoint

use crate::{config::ApiConfig, error::ApiError, error::Result, token::TokenHandle};
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Client for the bookstay REST API
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// [`TokenHandle`]. Endpoint methods live in the `auth`, `hotels`, and
/// `reservations` modules of this crate and all route through
/// [`ApiClient::execute`], so bearer injection and error mapping behave
/// the same everywhere.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: TokenHandle,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when the configured address is
    /// not an absolute http(s) URL, or [`ApiError::Transport`] when the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url =
            Url::parse(config.base_url()).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: TokenHandle::new(),
        })
    }

    /// Handle to the session token this client sends
    ///
    /// The returned handle shares storage with the client, so installing
    /// or clearing a token through it changes what subsequent requests
    /// carry.
    #[must_use]
    pub fn token(&self) -> TokenHandle {
        self.token.clone()
    }

    /// Build an endpoint URL from path segments
    ///
    /// Segments are percent-encoded, so free-form values like city names
    /// are safe to pass through.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Infallible for http(s) URLs, which `new` enforces
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a request, attaching the bearer token when one is installed
    pub(crate) async fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self.http.request(method, url);

        if let Some(token) = self.token.current().await {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    /// Send a request and decode a JSON response
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("API request rejected with 401");
                Err(ApiError::Unauthorized)
            }
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            _ => Err(api_error(response).await),
        }
    }

    /// Send a request whose response body is ignored
    pub(crate) async fn execute_empty(&self, request: RequestBuilder) -> Result<()> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("API request rejected with 401");
                Err(ApiError::Unauthorized)
            }
            status if status.is_success() => Ok(()),
            _ => Err(api_error(response).await),
        }
    }
}

/// Build an [`ApiError::Api`] from a non-success response
async fn api_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body);

    tracing::warn!(
        status = status.as_u16(),
        "API request failed: {}",
        if message.is_empty() { &body } else { &message }
    );

    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Error payload shape the server uses for non-success responses
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the `message` field out of an error body, empty when absent
fn extract_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_endpoint_joins_segments() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8080")).unwrap();
        let url = client.endpoint(&["api", "hotels"]);
        assert_eq!(url.as_str(), "http://localhost:8080/api/hotels");
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_endpoint_percent_encodes_free_form_segments() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8080")).unwrap();
        let url = client.endpoint(&["api", "hotels", "city", "New York"]);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/hotels/city/New%20York"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_endpoint_tolerates_trailing_slash_in_base_url() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8080/")).unwrap();
        let url = client.endpoint(&["api", "hotels"]);
        assert_eq!(url.as_str(), "http://localhost:8080/api/hotels");
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let result = ApiClient::new(ApiConfig::new("not a url"));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = ApiClient::new(ApiConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_extract_message_reads_json_body() {
        assert_eq!(
            extract_message(r#"{"message":"Room is not available"}"#),
            "Room is not available"
        );
    }

    #[test]
    fn test_extract_message_empty_for_plain_text() {
        assert_eq!(extract_message("Internal Server Error"), "");
        assert_eq!(extract_message(""), "");
    }
}
