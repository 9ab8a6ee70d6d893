//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check (non-success → [`ClientError::Api`]) so
//! the resource modules stay focused on request construction.

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Any other status becomes
/// [`ClientError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_status_and_body() {
        let resp = mock_response(500, "database unavailable");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            &err,
            ClientError::Api { status: 500, message } if message == "database unavailable"
        ));
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn check_response_rate_limit_is_plain_api_error() {
        let resp = mock_response(429, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 429, .. }));
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }
}
