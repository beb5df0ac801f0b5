use crate::invoiz_api::endpoint::ResourceDescriptor;
use crate::invoiz_api::types::{InvoizError, ValidationFailure};
use std::collections::BTreeMap;

/// Page length the service applies when `limit` is not sent. Filled in at
/// query-build time so next-page arithmetic is always defined.
pub const DEFAULT_LIMIT: u32 = 20;
/// Offset applied when `offset` is not sent.
pub const DEFAULT_OFFSET: u32 = 0;

/// A caller's pagination, ordering, search and filter intent for one list
/// operation, before encoding to wire form.
///
/// All fields are optional; absence means "use the service default". The
/// `order_by` and filter names must come from the invoking endpoint's
/// [`ResourceDescriptor`]; requests using fields outside that set are
/// rejected before any network call is made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Descending order flag. Encoded onto the wire only when explicitly
    /// set; `None` leaves the service's own ordering default in force.
    pub descending: Option<bool>,
    pub search_text: Option<String>,
    pub order_by: Option<String>,
    /// Resource-specific filter parameters, e.g. `filter=open` for expenses.
    pub filters: BTreeMap<String, String>,
}

impl PageRequest {
    /// Limit that will actually be sent, defaults applied.
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Offset that will actually be sent, defaults applied.
    pub fn effective_offset(&self) -> u32 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    /// Request for the page following this one, given the total `count`
    /// reported by the envelope. Returns `None` when pagination is
    /// exhausted (`offset + limit >= count`).
    ///
    /// Side-effect-free: the same request always addresses the same page of
    /// a given dataset snapshot, so iteration is restartable.
    pub fn next_page(&self, count: u32) -> Option<PageRequest> {
        let limit = self.effective_limit();
        let offset = self.effective_offset();
        if offset.saturating_add(limit) < count {
            let mut next = self.clone();
            next.limit = Some(limit);
            next.offset = Some(offset + limit);
            Some(next)
        } else {
            None
        }
    }
}

/// One decoded page of a list operation.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of matching records reported by the service.
    pub count: u32,
    /// The request that produced this page.
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Request for the next page, or `None` when this was the last one.
    pub fn next_request(&self) -> Option<PageRequest> {
        self.request.next_page(self.count)
    }
}

fn rejected(field: &str, message: String) -> InvoizError {
    InvoizError::Validation(ValidationFailure::for_field(field, message))
}

/// Encode a [`PageRequest`] into wire query parameters, validating it
/// against the resource descriptor first.
///
/// Fails fast (no network call) when `order_by` or a filter name falls
/// outside the descriptor's capability sets, or when search/ordering is
/// requested on a resource that supports neither. Keys are emitted in
/// alphabetical order; keys with empty values are omitted.
pub fn build_query(
    descriptor: &ResourceDescriptor,
    request: &PageRequest,
) -> Result<BTreeMap<String, String>, InvoizError> {
    if !descriptor.supports_pagination {
        return Err(rejected(
            "limit",
            format!("resource '{}' is not paginated", descriptor.endpoint.path()),
        ));
    }

    if let Some(order_by) = &request.order_by {
        if !descriptor.orderable_fields.contains(order_by.as_str()) {
            return Err(rejected(
                "orderBy",
                format!(
                    "'{}' is not orderable for resource '{}'",
                    order_by,
                    descriptor.endpoint.path()
                ),
            ));
        }
    }
    if request.descending.is_some() && descriptor.orderable_fields.is_empty() {
        return Err(rejected(
            "desc",
            format!(
                "resource '{}' does not support ordering",
                descriptor.endpoint.path()
            ),
        ));
    }
    if request.search_text.is_some() && !descriptor.searchable {
        return Err(rejected(
            "searchText",
            format!(
                "resource '{}' does not support free-text search",
                descriptor.endpoint.path()
            ),
        ));
    }
    for name in request.filters.keys() {
        if !descriptor.filterable_fields.contains(name.as_str()) {
            return Err(rejected(
                name,
                format!(
                    "'{}' is not a filter of resource '{}'",
                    name,
                    descriptor.endpoint.path()
                ),
            ));
        }
    }

    let mut query = BTreeMap::new();
    query.insert("limit".to_string(), request.effective_limit().to_string());
    query.insert("offset".to_string(), request.effective_offset().to_string());
    if let Some(descending) = request.descending {
        query.insert("desc".to_string(), descending.to_string());
    }
    if let Some(search_text) = &request.search_text {
        query.insert("searchText".to_string(), search_text.clone());
    }
    if let Some(order_by) = &request.order_by {
        query.insert("orderBy".to_string(), order_by.clone());
    }
    for (name, value) in &request.filters {
        query.insert(name.clone(), value.clone());
    }
    query.retain(|_, value| !value.is_empty());

    Ok(query)
}

/// Decode wire query parameters back into a [`PageRequest`].
///
/// Inverse of [`build_query`]: encoding a request and parsing the result
/// reproduces the same logical request. Unknown keys are taken as
/// resource-specific filters.
pub fn parse_query<'a, I>(pairs: I) -> PageRequest
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut request = PageRequest::default();
    for (key, value) in pairs {
        match key {
            "limit" => request.limit = value.parse().ok(),
            "offset" => request.offset = value.parse().ok(),
            "desc" => request.descending = value.parse().ok(),
            "searchText" => request.search_text = Some(value.to_string()),
            "orderBy" => request.order_by = Some(value.to_string()),
            other => {
                request.filters.insert(other.to_string(), value.to_string());
            }
        }
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoiz_api::endpoint::Endpoint;

    #[test]
    fn test_build_query_orders_keys_alphabetically() {
        let request = PageRequest {
            search_text: Some("screws".to_string()),
            order_by: Some("title".to_string()),
            descending: Some(true),
            ..Default::default()
        };

        let query = build_query(Endpoint::Article.descriptor(), &request).unwrap();
        let keys: Vec<&str> = query.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["desc", "limit", "offset", "orderBy", "searchText"]);
    }

    #[test]
    fn test_build_query_omits_empty_values() {
        let request = PageRequest {
            search_text: Some(String::new()),
            ..Default::default()
        };

        let query = build_query(Endpoint::Customer.descriptor(), &request).unwrap();
        assert!(!query.contains_key("searchText"));
    }

    #[test]
    fn test_desc_is_sent_only_when_explicitly_requested() {
        let unset = build_query(Endpoint::Article.descriptor(), &PageRequest::default()).unwrap();
        assert!(!unset.contains_key("desc"));

        let explicit_false = build_query(
            Endpoint::Article.descriptor(),
            &PageRequest {
                descending: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(explicit_false.get("desc").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_next_page_exhaustion() {
        let request = PageRequest {
            limit: Some(20),
            offset: Some(40),
            ..Default::default()
        };
        assert!(request.next_page(57).is_none());

        let earlier = PageRequest {
            limit: Some(20),
            offset: Some(20),
            ..Default::default()
        };
        let next = earlier.next_page(57).unwrap();
        assert_eq!(next.offset, Some(40));
        assert_eq!(next.limit, Some(20));
    }

    #[test]
    fn test_next_page_uses_service_defaults_when_unset() {
        let request = PageRequest::default();
        let next = request.next_page(45).unwrap();
        assert_eq!(next.offset, Some(DEFAULT_LIMIT));
        assert!(request.next_page(DEFAULT_LIMIT).is_none());
    }
}
