//! Error types
//!
//! Every failure a sample can hit falls into one of three families:
//! credential problems, malformed requests, and failures reported by the
//! remote service. Transport and decoding failures are kept separate so the
//! remote error is always exactly what the service said.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("invalid request: {0}")]
    Request(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode payload")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response")]
    Decode(#[source] serde_json::Error),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// The service-reported failure, if this is one
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Error::Remote(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("service account key file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("invalid service account key in {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: gcp_auth::Error,
    },

    #[error("failed to obtain access token")]
    Token(#[source] gcp_auth::Error),
}

/// Failure reported by the remote service, kept verbatim
#[derive(Debug, Clone, Error)]
pub struct RemoteError {
    /// HTTP status code
    pub status: u16,
    /// Canonical status name from the error body, e.g. `NOT_FOUND`
    pub code: Option<String>,
    pub message: String,
    /// The `details` array of the error body, e.g. field violations
    pub details: Vec<Value>,
    /// Raw response body
    pub body: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "remote error {} {}: {}",
            self.status,
            self.code.as_deref().unwrap_or("UNKNOWN"),
            self.message
        )?;

        for detail in &self.details {
            let text = serde_json::to_string_pretty(detail).map_err(|_| fmt::Error)?;
            write!(f, "\n{}", text)?;
        }
        Ok(())
    }
}

/// Coarse classification of a [`RemoteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    Unauthenticated,
    PermissionDenied,
    NotFound,
    InvalidArgument,
    AlreadyExists,
    QuotaExhausted,
    Unavailable,
    Other,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<Value>,
}

impl RemoteError {
    /// Build from a non-success response. Google APIs wrap failures in
    /// `{"error": {"code", "message", "status"}}`; anything else is kept as
    /// the message.
    pub fn from_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => Self {
                status,
                code: envelope.error.status,
                message: envelope.error.message,
                details: envelope.error.details,
                body,
            },
            Err(_) => Self {
                status,
                code: None,
                message: body.trim().to_string(),
                details: Vec::new(),
                body,
            },
        }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        match self.code.as_deref() {
            Some("UNAUTHENTICATED") => return RemoteErrorKind::Unauthenticated,
            Some("PERMISSION_DENIED") => return RemoteErrorKind::PermissionDenied,
            Some("NOT_FOUND") => return RemoteErrorKind::NotFound,
            Some("INVALID_ARGUMENT") | Some("FAILED_PRECONDITION") => {
                return RemoteErrorKind::InvalidArgument
            }
            Some("ALREADY_EXISTS") => return RemoteErrorKind::AlreadyExists,
            Some("RESOURCE_EXHAUSTED") => return RemoteErrorKind::QuotaExhausted,
            Some("UNAVAILABLE") => return RemoteErrorKind::Unavailable,
            _ => {}
        }

        match self.status {
            401 => RemoteErrorKind::Unauthenticated,
            403 => RemoteErrorKind::PermissionDenied,
            404 => RemoteErrorKind::NotFound,
            400 => RemoteErrorKind::InvalidArgument,
            409 => RemoteErrorKind::AlreadyExists,
            429 => RemoteErrorKind::QuotaExhausted,
            503 => RemoteErrorKind::Unavailable,
            _ => RemoteErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_error_body_is_parsed() {
        let body = r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#;
        let err = RemoteError::from_response(404, body.to_string());

        assert_eq!(err.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(err.message, "Requested entity was not found.");
        assert_eq!(err.kind(), RemoteErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "remote error 404 NOT_FOUND: Requested entity was not found."
        );
    }

    #[test]
    fn test_details_are_part_of_the_message() {
        let body = r#"{"error":{"code":400,"message":"Request contains an invalid argument.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.BadRequest","fieldViolations":[{"field":"agent.business_messages_agent.non_local_config.enabled_domains","description":"Domain already in use"}]}]}}"#;
        let err = RemoteError::from_response(400, body.to_string());

        assert_eq!(err.details.len(), 1);
        let text = err.to_string();
        assert!(text.starts_with("remote error 400 INVALID_ARGUMENT: Request contains an invalid argument.\n"));
        assert!(text.contains("enabled_domains"));
        assert!(text.contains("Domain already in use"));
    }

    #[test]
    fn test_error_chain_names_each_cause_once() {
        let cause = serde_json::from_str::<Value>("<html>").unwrap_err();
        let cause_text = cause.to_string();
        let chain = format!("{:#}", anyhow::Error::from(Error::Decode(cause)));

        assert!(chain.starts_with("failed to decode response: "));
        assert_eq!(chain.matches(&cause_text).count(), 1);
    }

    #[test]
    fn test_plain_body_is_kept_as_message() {
        let err = RemoteError::from_response(502, "bad gateway\n".to_string());
        assert_eq!(err.code, None);
        assert_eq!(err.message, "bad gateway");
        assert_eq!(err.body, "bad gateway\n");
        assert!(err.details.is_empty());
        assert_eq!(err.kind(), RemoteErrorKind::Other);
    }

    #[test]
    fn test_kind_falls_back_to_http_status() {
        let err = RemoteError::from_response(429, String::new());
        assert_eq!(err.kind(), RemoteErrorKind::QuotaExhausted);

        let err = RemoteError::from_response(
            400,
            r#"{"error":{"code":400,"message":"x","status":"FAILED_PRECONDITION"}}"#.to_string(),
        );
        assert_eq!(err.kind(), RemoteErrorKind::InvalidArgument);
    }
}
