//! # cosmos-client
//!
//! Remote data client for the Cosmos Class backend.
//!
//! Every request goes to `{base_url}{path}` with a JSON content type and the
//! caller's email in `X-User-Email`. Responses are decoded into the caller's
//! type without schema validation.
//!
//! Failure handling is declared per operation (see [`operation`]):
//! - collection operations log the failure and return an empty list
//! - single-resource operations return the [`ClientError`]
//!
//! The client does not cache, retry, or deduplicate requests.

pub mod identity;
pub mod operation;

mod assignments;
mod auth;
mod curriculum;
mod error;
mod events;
mod http;
mod portal_api;

pub use error::{ClientError, IdentityError};
pub use identity::{
    FileIdentityStore, IdentityProvider, LayeredIdentity, PLACEHOLDER_EMAIL, StaticIdentity,
};
pub use operation::{Operation, RequestOptions, ResourceShape};
pub use portal_api::PortalApi;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// Header carrying the caller identity.
pub const IDENTITY_HEADER: &str = "x-user-email";

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the portal backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    identity: Arc<dyn IdentityProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` bounds each whole request; `None` lets a hung request wait
    /// indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        base_url: &str,
        identity: Arc<dyn IdentityProvider>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent("cosmos-class/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            identity,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The email the next request will carry.
    #[must_use]
    pub fn caller_email(&self) -> String {
        identity::resolve_email(self.identity.as_ref())
    }

    /// Issue one request and decode the JSON body.
    ///
    /// This is the raw transport: every failure is returned. Use the typed
    /// operations for the per-operation failure policy.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] if the request never completes or the body is
    ///   not valid JSON for `T`
    /// - [`ClientError::Api`] for a non-success status
    /// - [`ClientError::InvalidHeader`] if the identity email cannot be sent
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let headers = self.headers(&options.headers)?;

        tracing::debug!(method = %options.method, %url, "backend request");

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.body(body.to_string());
        }

        let resp = check_response(request.send().await?).await?;
        Ok(resp.json::<T>().await?)
    }

    /// Run a declared operation, applying its failure policy.
    pub(crate) async fn call<T>(
        &self,
        op: Operation,
        id: Option<i64>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let path = op.path(id);
        let mut options = RequestOptions::new(op.method);
        options.body = body;
        let result = self.fetch(&path, options).await;
        settle(op, &path, result)
    }

    fn headers(&self, extra: &HeaderMap) -> Result<HeaderMap, ClientError> {
        let email = self.caller_email();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(IDENTITY_HEADER),
            HeaderValue::from_str(&email).map_err(|_| ClientError::InvalidHeader {
                name: IDENTITY_HEADER.to_string(),
            })?,
        );
        // a caller name replaces the default and keeps all of its values
        headers.extend(extra.clone());
        Ok(headers)
    }
}

/// Apply an operation's declared failure policy to a fetch outcome.
///
/// Collection failures are logged and replaced by `T::default()` (an empty
/// list); single-resource failures pass through.
fn settle<T: Default>(
    op: Operation,
    path: &str,
    result: Result<T, ClientError>,
) -> Result<T, ClientError> {
    match (op.shape, result) {
        (_, Ok(value)) => Ok(value),
        (ResourceShape::Collection, Err(error)) => {
            tracing::warn!(operation = op.name, path, %error, "collection fetch failed; returning empty");
            Ok(T::default())
        }
        (ResourceShape::Single, Err(error)) => {
            tracing::warn!(operation = op.name, path, %error, "fetch failed");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::ACCEPT;

    use super::*;
    use crate::operation::{COHORT_EVENTS, HEALTH, LIST_CURRICULA};

    fn api_error(status: u16) -> ClientError {
        ClientError::Api {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn settle_absorbs_collection_failures() {
        for status in [400, 401, 404, 500, 503] {
            let settled: Vec<u32> =
                settle(COHORT_EVENTS, "/events/1", Err(api_error(status))).expect("absorbed");
            assert!(settled.is_empty());
        }
    }

    #[test]
    fn settle_propagates_single_failures() {
        let settled: Result<cosmos_core::entities::HealthStatus, _> =
            settle(HEALTH, "/health", Err(api_error(502)));
        assert_eq!(settled.unwrap_err().status(), Some(502));
    }

    #[test]
    fn settle_passes_success_through() {
        let settled = settle(LIST_CURRICULA, "/curriculum", Ok(vec![1, 2, 3])).expect("ok");
        assert_eq!(settled, vec![1, 2, 3]);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(
            "http://localhost:8000/",
            Arc::new(StaticIdentity::anonymous()),
            None,
        )
        .expect("client builds");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.caller_email(), PLACEHOLDER_EMAIL);
    }

    #[test]
    fn caller_headers_override_defaults() {
        let client = ApiClient::new(
            "http://localhost:8000",
            Arc::new(StaticIdentity::new("alex@example.com")),
            None,
        )
        .expect("client builds");

        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        extra.insert("x-trace", HeaderValue::from_static("abc"));

        let headers = client.headers(&extra).expect("headers");
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers[IDENTITY_HEADER], "alex@example.com");
        assert_eq!(headers["x-trace"], "abc");
    }

    #[test]
    fn caller_header_keeps_every_value() {
        let client = ApiClient::new(
            "http://localhost:8000",
            Arc::new(StaticIdentity::new("alex@example.com")),
            None,
        )
        .expect("client builds");
        let mut extra = HeaderMap::new();
        extra.append(ACCEPT, HeaderValue::from_static("application/json"));
        extra.append(ACCEPT, HeaderValue::from_static("text/plain"));

        let headers = client.headers(&extra).expect("headers");
        let accepted: Vec<&str> = headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();
        assert_eq!(accepted, ["application/json", "text/plain"]);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[IDENTITY_HEADER], "alex@example.com");
    }

    #[test]
    fn unencodable_identity_is_an_error() {
        let client = ApiClient::new(
            "http://localhost:8000",
            Arc::new(StaticIdentity::new("bad\nvalue@example.com")),
            None,
        )
        .expect("client builds");
        let err = client.headers(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader { .. }));
    }
}
