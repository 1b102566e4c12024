//! HTTP utilities for Business Communications REST calls

use crate::error::{Error, RemoteError, Result};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncate a body for logging and strip control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// HTTP client wrapper that attaches bearer tokens and maps failures
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("bizcomm-samples/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &Url, token: &str, query: &[(&str, &str)]) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let request = self.client.get(url.clone()).query(query);
        self.execute(request, token).await
    }

    pub async fn post(&self, url: &Url, token: &str, body: &Value) -> Result<Value> {
        tracing::debug!("POST {}", url);
        let request = self.client.post(url.clone()).json(body);
        self.execute(request, token).await
    }

    pub async fn patch(
        &self,
        url: &Url,
        token: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<Value> {
        tracing::debug!("PATCH {} {:?}", url, query);
        let request = self.client.patch(url.clone()).query(query).json(body);
        self.execute(request, token).await
    }

    pub async fn delete(&self, url: &Url, token: &str) -> Result<Value> {
        tracing::debug!("DELETE {}", url);
        let request = self.client.delete(url.clone());
        self.execute(request, token).await
    }

    /// Send once. Non-success statuses become [`RemoteError`] carrying the
    /// service's own message; there is no retry.
    async fn execute(&self, request: RequestBuilder, token: &str) -> Result<Value> {
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(RemoteError::from_response(status.as_u16(), body).into());
        }

        // Delete returns an empty object, some proxies return nothing at all
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(Error::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let logged = sanitize_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(logged.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(150);
        let logged = sanitize_for_log(&body);
        assert!(logged.contains("truncated, 300 bytes total"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("a\nb\tc"), "abc");
    }
}
