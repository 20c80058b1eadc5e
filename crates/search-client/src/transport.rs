//! Fetching search pages from the advocate directory API.
//!
//! The transport is a driven port so the controller and session can be
//! exercised without a network. [`HttpSearchTransport`] is the reqwest
//! implementation; its status and envelope handling is split into plain
//! functions so it can be tested without a server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::warn;

use crate::criteria::UrlState;
use crate::model::SearchPage;

const ENVELOPE_FALLBACK: &str = "Failed to load advocates. Please try again.";

/// Reasons a search page could not be loaded.
///
/// `Display` renders the message shown to the user; the variant fields
/// carry diagnostics for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The API answered with a non-success status.
    #[error("Unable to load advocates (Error {status}). Please try again.")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The API answered successfully but the body was an error envelope.
    #[error("{}", .message.as_deref().unwrap_or(ENVELOPE_FALLBACK))]
    Envelope {
        /// Message from the envelope, when it carried one.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("Something went wrong. Please try again.")]
    Network {
        /// Transport failure description.
        cause: String,
    },
    /// The response body was not a search page.
    #[error("Something went wrong. Please try again.")]
    Decode {
        /// Decoder failure description.
        cause: String,
    },
}

/// Driven port loading one page of advocates for a URL state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvocateSearchTransport: Send + Sync {
    /// Fetch the page described by `request`.
    async fn search(&self, request: &UrlState) -> Result<SearchPage, TransportError>;
}

/// Search transport issuing `GET {endpoint}?{query}` requests.
pub struct HttpSearchTransport {
    client: Client,
    endpoint: Url,
}

impl HttpSearchTransport {
    /// Build a transport for `endpoint` with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    fn url_for(&self, request: &UrlState) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&request.to_api_query()));
        url
    }
}

#[async_trait]
impl AdvocateSearchTransport for HttpSearchTransport {
    async fn search(&self, request: &UrlState) -> Result<SearchPage, TransportError> {
        let response = self
            .client
            .get(self.url_for(request))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        interpret_response(status, body.as_ref())
    }
}

#[derive(Deserialize)]
struct ErrorProbe {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

fn interpret_response(status: StatusCode, body: &[u8]) -> Result<SearchPage, TransportError> {
    if !status.is_success() {
        warn!(status = status.as_u16(), "advocate search returned an error status");
        return Err(TransportError::Status {
            status: status.as_u16(),
        });
    }

    let probe: ErrorProbe = serde_json::from_slice(body).map_err(map_decode_error)?;
    if probe.error.as_ref().is_some_and(is_truthy) {
        return Err(TransportError::Envelope {
            message: probe.message.filter(|message| !message.is_empty()),
        });
    }

    serde_json::from_slice(body).map_err(map_decode_error)
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn map_decode_error(error: serde_json::Error) -> TransportError {
    warn!(%error, "advocate search returned an unreadable body");
    TransportError::Decode {
        cause: error.to_string(),
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    warn!(%error, timeout = error.is_timeout(), "advocate search request failed");
    TransportError::Network {
        cause: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for status and envelope mapping without a live server.

    use super::*;
    use crate::criteria::{PageSize, SearchCriteria};
    use rstest::rstest;

    const PAGE: &str = r#"{
        "data": [],
        "pagination": {
            "page": 2, "limit": 50, "totalCount": 0, "totalPages": 0,
            "hasNextPage": false, "hasPreviousPage": false
        }
    }"#;

    #[rstest]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "Unable to load advocates (Error 500). Please try again.")]
    #[case(StatusCode::SERVICE_UNAVAILABLE, "Unable to load advocates (Error 503). Please try again.")]
    fn error_statuses_name_the_code(#[case] status: StatusCode, #[case] expected: &str) {
        let err = interpret_response(status, b"<html>").expect_err("status error");
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    #[case(r#"{"error":"internal_error","message":"Database unavailable"}"#, "Database unavailable")]
    #[case(r#"{"error":true}"#, "Failed to load advocates. Please try again.")]
    #[case(r#"{"error":"x","message":""}"#, "Failed to load advocates. Please try again.")]
    fn error_envelopes_surface_their_message(#[case] body: &str, #[case] expected: &str) {
        let err = interpret_response(StatusCode::OK, body.as_bytes()).expect_err("envelope");
        assert!(matches!(err, TransportError::Envelope { .. }));
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn pages_decode_on_success() {
        let page = interpret_response(StatusCode::OK, PAGE.as_bytes()).expect("page");
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.page, 2);
    }

    #[rstest]
    fn unreadable_bodies_use_the_generic_message() {
        let err = interpret_response(StatusCode::OK, b"not json").expect_err("decode");
        assert!(matches!(err, TransportError::Decode { .. }));
        assert_eq!(err.to_string(), "Something went wrong. Please try again.");
    }

    #[rstest]
    fn requests_target_the_endpoint_with_api_parameters() {
        let endpoint = Url::parse("http://localhost:8080/api/v1/advocates").expect("url");
        let transport =
            HttpSearchTransport::new(endpoint, Duration::from_secs(5)).expect("client builds");
        let request = UrlState {
            page: 1,
            limit: PageSize::Fifty,
            criteria: SearchCriteria::Basic {
                term: "austin".to_owned(),
            },
        };

        assert_eq!(
            transport.url_for(&request).as_str(),
            "http://localhost:8080/api/v1/advocates?page=1&limit=50&search=austin"
        );
    }
}
