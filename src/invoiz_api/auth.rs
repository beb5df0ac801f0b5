use crate::invoiz_api::endpoint::Endpoint;
use crate::invoiz_api::types::{ClientConfig, InvoizError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::sync::Mutex;

/// Request payload for the token exchange.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthTokenRequest<'a> {
    api_key: &'a str,
    api_key_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    installation_id: Option<&'a str>,
}

/// Response payload of the token exchange.
#[derive(Debug, Deserialize)]
struct AuthTokenResponse {
    token: String,
}

/// Holds the long-lived key pair and the current short-lived access token.
///
/// The key pair is immutable for the store's lifetime; the token slot is the
/// only shared mutable state of a client. The slot is guarded by an async
/// mutex that is held across the issuance exchange, so concurrent callers
/// that find the slot empty wait on a single in-flight issuance and reuse
/// its result instead of each performing their own exchange.
///
/// The service hands back no expiry; a token is treated as valid until the
/// first call that the service rejects it on.
pub(crate) struct CredentialStore {
    api_key: String,
    api_key_secret: String,
    installation_id: Option<String>,
    access_token: Mutex<Option<String>>,
}

// The secret and the token stay out of debug output.
impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("api_key", &self.api_key)
            .field("installation_id", &self.installation_id)
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self {
            api_key: config.api_key,
            api_key_secret: config.api_key_secret,
            installation_id: config.installation_id,
            access_token: Mutex::new(config.access_token),
        }
    }

    /// Return the current access token, issuing a fresh one first if the
    /// slot is empty.
    ///
    /// The slot is written only after a fully parsed success, so a
    /// cancelled or timed-out issuance never leaves a partial token behind.
    pub(crate) async fn acquire(
        &self,
        http: &reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<String, InvoizError> {
        let mut slot = self.access_token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        let token = self.issue(http, base_url, timeout).await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Clear the stored token after the service rejected it.
    ///
    /// Only clears when the slot still holds the rejected token; a token
    /// refreshed by a concurrent caller in the meantime is left in place.
    pub(crate) async fn invalidate(&self, rejected: &str) {
        let mut slot = self.access_token.lock().await;
        if slot.as_deref() == Some(rejected) {
            tracing::debug!("Clearing rejected access token");
            *slot = None;
        }
    }

    /// Exchange the key pair for a fresh access token.
    ///
    /// `POST auth/token` carries the key pair in the body and no bearer
    /// header. A rejection propagates the server's error as
    /// [`InvoizError::Authentication`] and is not retried.
    async fn issue(
        &self,
        http: &reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<String, InvoizError> {
        let url = format!("{}/{}", base_url, Endpoint::AuthToken.path());
        tracing::info!("Requesting access token from {}", url);

        let payload = AuthTokenRequest {
            api_key: &self.api_key,
            api_key_secret: &self.api_key_secret,
            installation_id: self.installation_id.as_deref(),
        };

        let response = http
            .post(&url)
            .timeout(timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Token exchange failed to send: {}", e);
                InvoizError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                "Key pair rejected: HTTP {} - {}",
                status.as_u16(),
                message
            );
            return Err(InvoizError::Authentication {
                status: status.as_u16(),
                message,
            });
        }

        let body: AuthTokenResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse token response: {}", e);
            InvoizError::Decoding {
                status: status.as_u16(),
                detail: format!("token response did not parse: {}", e),
            }
        })?;

        tracing::debug!("Access token issued ({} bytes)", body.token.len());
        Ok(body.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_serialization() {
        let request = AuthTokenRequest {
            api_key: "key",
            api_key_secret: "secret",
            installation_id: Some("inst-1"),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"apiKey\":\"key\""));
        assert!(json.contains("\"apiKeySecret\":\"secret\""));
        assert!(json.contains("\"installationId\":\"inst-1\""));
    }

    #[test]
    fn test_auth_request_serialization_without_installation_id() {
        let request = AuthTokenRequest {
            api_key: "key",
            api_key_secret: "secret",
            installation_id: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("installationId"));
    }

    #[tokio::test]
    async fn test_invalidate_only_clears_matching_token() {
        let store = CredentialStore::new(
            crate::invoiz_api::types::ClientConfig::new("k", "s").with_access_token("current"),
        );

        store.invalidate("stale").await;
        assert_eq!(
            store.access_token.lock().await.as_deref(),
            Some("current")
        );

        store.invalidate("current").await;
        assert!(store.access_token.lock().await.is_none());
    }
}
