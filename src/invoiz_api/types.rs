use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Configuration used to construct an [`crate::InvoizClient`].
///
/// `api_key` and `api_key_secret` form the long-lived key pair and never
/// change for the lifetime of a client. `access_token` seeds the client with
/// a previously obtained token; when absent, the client exchanges the key
/// pair for a fresh token on first use.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Long-lived API key.
    pub api_key: String,
    /// Secret belonging to the API key.
    pub api_key_secret: String,
    /// Previously issued access token, if any.
    pub access_token: Option<String>,
    /// Installation identifier, required by some tenants.
    pub installation_id: Option<String>,
}

impl ClientConfig {
    /// Create a configuration from a key pair, with no seed token and no
    /// installation id.
    pub fn new(api_key: impl Into<String>, api_key_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_key_secret: api_key_secret.into(),
            access_token: None,
            installation_id: None,
        }
    }

    /// Seed the client with an already issued access token (builder pattern).
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the installation id (builder pattern).
    pub fn with_installation_id(mut self, id: impl Into<String>) -> Self {
        self.installation_id = Some(id.into());
        self
    }
}

/// invoiz API error type
///
/// Represents all possible failures when talking to the invoiz API. The
/// client recovers exactly one failure class internally (a single
/// token-refresh retry after an authentication rejection); every other error
/// is surfaced here, typed and un-retried.
#[derive(Debug)]
pub enum InvoizError {
    /// The key pair was rejected, or a refreshed token was rejected again.
    /// Fatal for the call; the client never retries past this point.
    Authentication { status: u16, message: String },
    /// The service rejected the request with field-level validation errors.
    /// Recoverable by correcting the input; see [`ValidationFailure`].
    Validation(ValidationFailure),
    /// The exchange exceeded the configured timeout.
    Timeout,
    /// The response matched no known envelope shape. This signals a changed
    /// service contract or a corrupted response, never normal operation.
    Decoding { status: u16, detail: String },
    /// Transport-level failure below HTTP (connection refused, DNS, ...).
    Network(String),
}

impl fmt::Display for InvoizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoizError::Authentication { status, message } => {
                write!(f, "Authentication failed (HTTP {}): {}", status, message)
            }
            InvoizError::Validation(failure) => write!(f, "Validation failed: {}", failure),
            InvoizError::Timeout => write!(f, "Request timed out"),
            InvoizError::Decoding { status, detail } => {
                write!(f, "Unexpected response (HTTP {}): {}", status, detail)
            }
            InvoizError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for InvoizError {}

impl From<reqwest::Error> for InvoizError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InvoizError::Timeout
        } else if err.is_connect() {
            InvoizError::Network(format!("Connection failed: {}", err))
        } else {
            InvoizError::Network(err.to_string())
        }
    }
}

/// Field-level validation failure returned by the service.
///
/// The wire shape is `{"name", "message", "meta": {field: [{"code"}, ...]}}`;
/// `meta` maps each offending field to its ordered error codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub name: String,
    pub message: String,
    pub meta: HashMap<String, Vec<FieldError>>,
}

/// One error code attached to a field of a rejected payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub code: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        let mut fields: Vec<&String> = self.meta.keys().collect();
        fields.sort();
        for field in fields {
            let codes: Vec<&str> = self.meta[field].iter().map(|e| e.code.as_str()).collect();
            write!(f, "; {}: [{}]", field, codes.join(", "))?;
        }
        Ok(())
    }
}

impl ValidationFailure {
    /// Build a client-side failure for a single rejected parameter. Used for
    /// fail-fast checks that never reach the network.
    pub(crate) fn for_field(field: &str, message: impl Into<String>) -> Self {
        let mut meta = HashMap::new();
        meta.insert(
            field.to_string(),
            vec![FieldError {
                code: "invalid".to_string(),
            }],
        );
        Self {
            name: "ValidationError".to_string(),
            message: message.into(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_display_lists_fields() {
        let mut meta = HashMap::new();
        meta.insert(
            "title".to_string(),
            vec![FieldError {
                code: "required".to_string(),
            }],
        );
        let failure = ValidationFailure {
            name: "ValidationError".to_string(),
            message: "invalid".to_string(),
            meta,
        };

        let rendered = failure.to_string();
        assert!(rendered.contains("invalid"));
        assert!(rendered.contains("title"));
        assert!(rendered.contains("required"));
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::new("key", "secret")
            .with_access_token("tok")
            .with_installation_id("inst-1");

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_key_secret, "secret");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.installation_id.as_deref(), Some("inst-1"));
    }
}
