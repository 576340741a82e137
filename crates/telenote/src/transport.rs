//! HTTP transport seam.
//!
//! The notifier only needs "POST these form fields, give me status + body".
//! [`reqwest::Client`] implements it out of the box; tests plug in their own.

use async_trait::async_trait;
use tracing::debug;

use crate::error::BoxError;

// ─────────────────────────────────────────────
// Trait
// ─────────────────────────────────────────────

/// Raw outcome of a form POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, empty if it could not be read.
    pub body: String,
}

/// Executes a form-encoded POST.
///
/// Implementations must be safe to share between concurrent sends.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `fields` as `application/x-www-form-urlencoded` to `url`.
    ///
    /// Returns `Err` only when no HTTP response was received. Any status,
    /// including 4xx/5xx, comes back as `Ok`.
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<FormResponse, BoxError>;
}

// ─────────────────────────────────────────────
// reqwest
// ─────────────────────────────────────────────

#[async_trait]
impl Transport for reqwest::Client {
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<FormResponse, BoxError> {
        // The URL embeds the bot token, so keep it out of error messages.
        let response = self
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| Box::new(e.without_url()) as BoxError)?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        debug!(status, bytes = body.len(), "form POST completed");

        Ok(FormResponse { status, body })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_form_encodes_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("a=1&b=two+words&c=x%26y"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/submit", mock_server.uri());
        let resp = client
            .post_form(&url, &[("a", "1"), ("b", "two words"), ("c", "x&y")])
            .await
            .unwrap();

        assert_eq!(resp, FormResponse { status: 200, body: "ok".into() });
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_err() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let resp = reqwest::Client::new()
            .post_form(&mock_server.uri(), &[])
            .await
            .unwrap();

        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "boom");
    }

    #[tokio::test]
    async fn test_connection_error_hides_url() {
        // Nothing listens on port 1.
        let err = reqwest::Client::new()
            .post_form("http://127.0.0.1:1/botSECRET/sendMessage", &[])
            .await
            .unwrap_err();

        assert!(!err.to_string().contains("SECRET"));
    }
}
