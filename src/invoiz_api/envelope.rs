use crate::invoiz_api::pagination::{Page, PageRequest};
use crate::invoiz_api::types::{InvoizError, ValidationFailure};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Raw outcome of one HTTP exchange, as handed over by the dispatcher.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Empty `meta` object of a single-item envelope. `deny_unknown_fields`
/// makes decoding a paginated body against a single-item hint fail instead
/// of silently passing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyMeta {}

#[derive(Debug, Deserialize)]
struct SingleEnvelope<T> {
    #[allow(dead_code)]
    meta: EmptyMeta,
    data: T,
}

#[derive(Debug, Deserialize)]
struct PageMeta {
    count: u32,
    #[allow(dead_code)]
    #[serde(default)]
    filter: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PageEnvelope<T> {
    meta: PageMeta,
    data: Vec<T>,
}

fn truncate(body: &str) -> String {
    const MAX: usize = 256;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX).collect();
        format!("{}...", cut)
    }
}

/// Classify a non-success response into a typed error.
///
/// A client-error status whose body matches the validation-error shape
/// becomes [`InvoizError::Validation`]; everything else is a loud
/// [`InvoizError::Decoding`] carrying the raw status and body.
pub(crate) fn classify_failure(raw: &RawResponse) -> InvoizError {
    if (400..500).contains(&raw.status) {
        if let Ok(failure) = serde_json::from_str::<ValidationFailure>(&raw.body) {
            tracing::debug!(
                "Service rejected request with validation errors: {}",
                failure.message
            );
            return InvoizError::Validation(failure);
        }
    }
    tracing::error!(
        "Response matched no known envelope shape: HTTP {} - {}",
        raw.status,
        truncate(&raw.body)
    );
    InvoizError::Decoding {
        status: raw.status,
        detail: truncate(&raw.body),
    }
}

/// Decode a single-item success envelope `{"meta": {}, "data": <T>}`.
pub(crate) fn decode_single<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, InvoizError> {
    if !raw.is_success() {
        return Err(classify_failure(raw));
    }
    match serde_json::from_str::<SingleEnvelope<T>>(&raw.body) {
        Ok(envelope) => Ok(envelope.data),
        Err(e) => {
            tracing::error!("Failed to decode single-item envelope: {}", e);
            Err(InvoizError::Decoding {
                status: raw.status,
                detail: format!("{} - body: {}", e, truncate(&raw.body)),
            })
        }
    }
}

/// Decode a paginated success envelope
/// `{"meta": {"count": <n>, "filter": [...]}, "data": [<T>, ...]}` into a
/// [`Page`], carrying the originating request for next-page arithmetic.
pub(crate) fn decode_page<T: DeserializeOwned>(
    raw: &RawResponse,
    request: PageRequest,
) -> Result<Page<T>, InvoizError> {
    if !raw.is_success() {
        return Err(classify_failure(raw));
    }
    match serde_json::from_str::<PageEnvelope<T>>(&raw.body) {
        Ok(envelope) => Ok(Page {
            items: envelope.data,
            count: envelope.meta.count,
            request,
        }),
        Err(e) => {
            tracing::error!("Failed to decode paginated envelope: {}", e);
            Err(InvoizError::Decoding {
                status: raw.status,
                detail: format!("{} - body: {}", e, truncate(&raw.body)),
            })
        }
    }
}

/// Accept an empty success response, the sentinel outcome of deletes.
pub(crate) fn decode_no_content(raw: &RawResponse) -> Result<(), InvoizError> {
    if !raw.is_success() {
        return Err(classify_failure(raw));
    }
    if raw.status == 204 || raw.body.trim().is_empty() {
        return Ok(());
    }
    tracing::error!(
        "Expected empty response, got HTTP {} with body: {}",
        raw.status,
        truncate(&raw.body)
    );
    Err(InvoizError::Decoding {
        status: raw.status,
        detail: format!("expected no content, got: {}", truncate(&raw.body)),
    })
}
