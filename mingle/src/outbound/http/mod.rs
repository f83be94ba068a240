//! Reqwest-backed REST adapters.
//!
//! [`ApiClient`] owns the transport: endpoint resolution against the
//! configured base URL, status mapping, and JSON decoding. The service
//! adapters only describe requests.

mod dto;
mod friend_service;
mod user_service;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use self::dto::ErrorBodyDto;
use crate::domain::ports::{ServiceError, ServiceResult};

pub use self::friend_service::HttpFriendService;
pub use self::user_service::HttpUserService;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Shared HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for `base_url` with reqwest defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `segments` below the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> ServiceResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ServiceError::transport(format!("base url {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Send `request` and return the body of a 2xx response.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> ServiceResult<Vec<u8>> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "api response");
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

fn map_transport_error(error: reqwest::Error) -> ServiceError {
    ServiceError::transport(error.to_string())
}

/// Prefer the server's `message`, then a compact body preview.
fn map_status_error(status: StatusCode, body: &[u8]) -> ServiceError {
    let message = serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .map(|dto| dto.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            let preview = body_preview(body);
            if preview.is_empty() {
                format!("status {}", status.as_u16())
            } else {
                format!("status {}: {}", status.as_u16(), preview)
            }
        });
    ServiceError::rejected(status.as_u16(), message)
}

fn decode_json<T: DeserializeOwned>(body: &[u8], what: &str) -> ServiceResult<T> {
    serde_json::from_slice(body)
        .map_err(|error| ServiceError::decode(format!("invalid {what} payload: {error}")))
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn api() -> ApiClient {
        let base = Url::parse("http://localhost:3000/").expect("base url");
        ApiClient::with_client(Client::new(), base)
    }

    #[rstest]
    fn endpoints_are_resolved_below_the_base(api: ApiClient) {
        let url = api
            .endpoint(&["api", "users", "u 1?x", "friend-requests"])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/users/u%201%3Fx/friend-requests"
        );
    }

    #[rstest]
    fn base_paths_are_kept() {
        let base = Url::parse("https://example.com/app/").expect("base url");
        let api = ApiClient::with_client(Client::new(), base);
        let url = api.endpoint(&["api", "users"]).expect("endpoint");
        assert_eq!(url.as_str(), "https://example.com/app/api/users");
    }

    #[rstest]
    fn opaque_bases_are_rejected() {
        let base = Url::parse("mailto:ops@example.com").expect("base url");
        let api = ApiClient::with_client(Client::new(), base);
        let error = api.endpoint(&["api"]).expect_err("no path");
        assert!(matches!(error, ServiceError::Transport { .. }));
    }

    #[rstest]
    #[case(br#"{"message":"user already exists"}"#.as_slice(), "user already exists")]
    #[case(br#"{"message":"  "}"#.as_slice(), r#"status 409: {"message":" "}"#)]
    #[case(b"<html>\n  conflict\n</html>".as_slice(), "status 409: <html> conflict </html>")]
    #[case(b"".as_slice(), "status 409")]
    fn status_errors_prefer_the_server_message(#[case] body: &[u8], #[case] expected: &str) {
        let error = map_status_error(StatusCode::CONFLICT, body);
        assert_eq!(error, ServiceError::rejected(409, expected));
    }

    #[rstest]
    fn previews_are_truncated() {
        let body = "x".repeat(PREVIEW_CHAR_LIMIT + 10);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.len(), PREVIEW_CHAR_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[rstest]
    fn malformed_bodies_map_to_decode_errors() {
        let error = decode_json::<Vec<String>>(b"{", "search").expect_err("malformed");
        assert!(matches!(error, ServiceError::Decode { .. }));
        assert!(error.message().starts_with("invalid search payload"));
    }
}
