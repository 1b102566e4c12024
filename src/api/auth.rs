//! Service account authentication
//!
//! Loads a service-account key file and exchanges it for bearer tokens
//! scoped to the Business Communications API. The resulting
//! [`Credentials`] value is passed explicitly to the client; nothing here is
//! process-global.

use crate::error::CredentialError;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// OAuth scope required by every Business Communications call
pub const SCOPES: &[&str] = &["https://www.googleapis.com/auth/businesscommunications"];

/// Key file location used when nothing else is configured
pub const DEFAULT_CREDENTIALS_FILE: &str = "resources/bc-agent-service-account-credentials.json";

/// Refresh tokens this long before they would expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Service account tokens are issued for an hour; assume less
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone)]
enum TokenSource {
    ServiceAccount {
        provider: Arc<dyn TokenProvider>,
        key_file: PathBuf,
    },
    AccessToken(String),
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Bearer credentials for the lifetime of one sample run
#[derive(Clone)]
pub struct Credentials {
    source: TokenSource,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

impl Credentials {
    /// Load a service-account JSON key.
    ///
    /// Fails with [`CredentialError::Missing`] when the file does not exist
    /// and [`CredentialError::Invalid`] when it cannot be parsed as a key.
    /// No token is requested until [`Credentials::authenticate`] or the first
    /// API call.
    pub fn from_service_account_file(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CredentialError::Missing {
                path: path.to_path_buf(),
            });
        }

        let account =
            CustomServiceAccount::from_file(path).map_err(|source| CredentialError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded service account key from {}", path.display());

        Ok(Self {
            source: TokenSource::ServiceAccount {
                provider: Arc::new(account),
                key_file: path.to_path_buf(),
            },
            token_cache: Arc::new(RwLock::new(None)),
        })
    }

    /// Use a bearer token minted elsewhere, e.g. by
    /// `gcloud auth print-access-token`. It is never refreshed.
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self {
            source: TokenSource::AccessToken(token.into()),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Exchange the key for a token now, so credential problems surface
    /// before any resource is touched.
    pub async fn authenticate(&self) -> Result<(), CredentialError> {
        self.token().await.map(|_| ())
    }

    /// Current bearer token, fetching a new one when the cached token is
    /// missing or close to expiry
    pub async fn token(&self) -> Result<String, CredentialError> {
        let provider = match &self.source {
            TokenSource::AccessToken(token) => return Ok(token.clone()),
            TokenSource::ServiceAccount { provider, .. } => provider,
        };

        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let token = provider
            .token(SCOPES)
            .await
            .map_err(CredentialError::Token)?;
        let token = token.as_str().to_string();

        let mut cache = self.token_cache.write().await;
        *cache = Some(CachedToken {
            token: token.clone(),
            expires_at: Instant::now() + DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER,
        });

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            (DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            TokenSource::ServiceAccount { key_file, .. } => f
                .debug_struct("Credentials")
                .field("key_file", key_file)
                .finish_non_exhaustive(),
            TokenSource::AccessToken(_) => f
                .debug_struct("Credentials")
                .field("access_token", &"<redacted>")
                .finish(),
        }
    }
}
