//! Pagination Tests
//!
//! Tests for page-request validation against resource descriptors, wire
//! query encoding and the encode/parse round trip. None of these touch the
//! network: validation failures must occur before any exchange is built.

use invoiz_sdk::{
    build_query, parse_query, Endpoint, ExpenseFilter, ExpenseListOptions, ExpensePayKindFilter,
    InvoizError, PageRequest, ToDoActiveFilter, ToDoListOptions, DEFAULT_LIMIT,
};

#[test]
fn test_order_by_outside_descriptor_set_is_rejected() {
    let request = PageRequest {
        order_by: Some("priceTotal".to_string()),
        ..Default::default()
    };

    match build_query(Endpoint::Article.descriptor(), &request) {
        Err(InvoizError::Validation(failure)) => {
            assert!(failure.meta.contains_key("orderBy"));
            assert_eq!(failure.meta["orderBy"][0].code, "invalid");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_order_by_within_descriptor_set_is_accepted() {
    let request = PageRequest {
        order_by: Some("priceTotal".to_string()),
        ..Default::default()
    };

    let query = build_query(Endpoint::Expense.descriptor(), &request).unwrap();
    assert_eq!(query.get("orderBy").map(String::as_str), Some("priceTotal"));
}

#[test]
fn test_unknown_filter_is_rejected() {
    let mut request = PageRequest::default();
    request
        .filters
        .insert("bogus".to_string(), "x".to_string());

    assert!(matches!(
        build_query(Endpoint::Expense.descriptor(), &request),
        Err(InvoizError::Validation(_))
    ));
}

#[test]
fn test_search_text_on_todos_is_rejected() {
    let request = PageRequest {
        search_text: Some("call".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        build_query(Endpoint::ToDo.descriptor(), &request),
        Err(InvoizError::Validation(_))
    ));
}

#[test]
fn test_desc_on_todos_is_rejected() {
    let request = PageRequest {
        descending: Some(true),
        ..Default::default()
    };

    assert!(matches!(
        build_query(Endpoint::ToDo.descriptor(), &request),
        Err(InvoizError::Validation(_))
    ));
}

#[test]
fn test_non_paginated_resource_rejects_listing() {
    assert!(matches!(
        build_query(Endpoint::SettingArticle.descriptor(), &PageRequest::default()),
        Err(InvoizError::Validation(_))
    ));
}

#[test]
fn test_defaults_are_filled_at_build_time() {
    let query = build_query(Endpoint::Customer.descriptor(), &PageRequest::default()).unwrap();
    assert_eq!(
        query.get("limit").map(String::as_str),
        Some(DEFAULT_LIMIT.to_string().as_str())
    );
    assert_eq!(query.get("offset").map(String::as_str), Some("0"));
}

#[test]
fn test_expense_options_encode_their_filters() {
    let options = ExpenseListOptions {
        filter: Some(ExpenseFilter::Paid),
        pay_kind: Some(ExpensePayKindFilter::Cash),
        ..Default::default()
    };

    let query = build_query(Endpoint::Expense.descriptor(), &options.page_request()).unwrap();
    assert_eq!(query.get("filter").map(String::as_str), Some("paid"));
    assert_eq!(query.get("payKind").map(String::as_str), Some("cash"));
}

#[test]
fn test_todo_options_encode_their_filters() {
    let options = ToDoListOptions {
        active_filter: Some(ToDoActiveFilter::Overdue),
        customer_id: Some(7),
        ..Default::default()
    };

    let query = build_query(Endpoint::ToDo.descriptor(), &options.page_request()).unwrap();
    assert_eq!(query.get("activeFilter").map(String::as_str), Some("overdue"));
    assert_eq!(query.get("customerId").map(String::as_str), Some("7"));
}

#[test]
fn test_query_round_trip_is_idempotent() {
    let request = PageRequest {
        limit: Some(10),
        offset: Some(0),
        order_by: Some("name".to_string()),
        ..Default::default()
    };

    let query = build_query(Endpoint::Customer.descriptor(), &request).unwrap();
    let pairs: Vec<(&str, &str)> = query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let parsed = parse_query(pairs);

    assert_eq!(parsed, request);
}

#[test]
fn test_round_trip_preserves_filters_and_flags() {
    let mut request = PageRequest {
        limit: Some(5),
        offset: Some(15),
        descending: Some(false),
        search_text: Some("taxi".to_string()),
        order_by: Some("date".to_string()),
        ..Default::default()
    };
    request
        .filters
        .insert("filter".to_string(), "open".to_string());

    let query = build_query(Endpoint::Expense.descriptor(), &request).unwrap();
    let pairs: Vec<(&str, &str)> = query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    assert_eq!(parse_query(pairs), request);
}
