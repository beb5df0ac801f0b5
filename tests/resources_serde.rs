//! Resource Serialization Tests
//!
//! Tests for the entity data contracts: camelCase wire naming, optional
//! field handling and round trips between Rust values and the JSON the
//! service actually sends.

use invoiz_sdk::{
    Article, CalculationBase, Customer, CustomerKind, Entity, Expense, ExpensePayKind,
    InfoSectionCustomField, Invoice, InvoiceDraft, InvoiceDraftOptions, InvoiceListItem,
    InvoicePayment, InvoicePaymentKind, InvoiceState, InvoiceType, Miscellaneous, PayCondition,
    PriceKind, ToDo, ValidationFailure,
};
use serde_json::json;

// ============================================================================
// Articles
// ============================================================================

#[test]
fn test_article_serialization_uses_camel_case() {
    let article = Article {
        number: "A-100".to_string(),
        title: "Wood screws".to_string(),
        calculation_base: Some(CalculationBase::Net),
        category: None,
        description: None,
        notes: None,
        notes_alert: Some(false),
        price: Some(9.99),
        price_gross: None,
        unit: Some("box".to_string()),
        vat_percent: Some(19.0),
    };

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["calculationBase"], "net");
    assert_eq!(json["notesAlert"], false);
    assert_eq!(json["vatPercent"], 19.0);
    // Unset optional fields are omitted entirely.
    assert!(json.get("category").is_none());
    assert!(json.get("priceGross").is_none());
}

#[test]
fn test_article_entity_flattens_id() {
    let entity: Entity<Article> = serde_json::from_value(json!({
        "id": 5,
        "number": "A-1",
        "title": "Screws",
        "price": 2.5
    }))
    .unwrap();

    assert_eq!(entity.id, 5);
    assert_eq!(entity.data.number, "A-1");
    assert_eq!(entity.data.price, Some(2.5));

    let back = serde_json::to_value(&entity).unwrap();
    assert_eq!(back["id"], 5);
    assert_eq!(back["title"], "Screws");
}

// ============================================================================
// Customers
// ============================================================================

#[test]
fn test_customer_deserialization_minimal() {
    let customer: Customer = serde_json::from_value(json!({
        "name": "ACME GmbH",
        "kind": "company"
    }))
    .unwrap();

    assert_eq!(customer.name, "ACME GmbH");
    assert_eq!(customer.kind, CustomerKind::Company);
    assert!(customer.id.is_none());
    assert!(customer.address.is_none());
}

#[test]
fn test_customer_deserialization_full() {
    let customer: Customer = serde_json::from_value(json!({
        "id": 12,
        "name": "Jane Doe",
        "kind": "person",
        "firstName": "Jane",
        "lastName": "Doe",
        "address": {
            "city": "Berlin",
            "isoCountry": "DE",
            "street": "Unter den Linden 1",
            "zipCode": "10117"
        },
        "payConditionId": 3,
        "notesAlert": true
    }))
    .unwrap();

    assert_eq!(customer.id, Some(12));
    assert_eq!(customer.kind, CustomerKind::Person);
    assert_eq!(customer.address.as_ref().unwrap().iso_country, "DE");
    assert_eq!(customer.pay_condition_id, Some(3));
    assert_eq!(customer.notes_alert, Some(true));
}

// ============================================================================
// Expenses
// ============================================================================

#[test]
fn test_expense_pay_kind_wire_values() {
    assert_eq!(
        serde_json::to_value(ExpensePayKind::Bank).unwrap(),
        json!("bank")
    );
    assert_eq!(
        serde_json::to_value(ExpensePayKind::Open).unwrap(),
        json!("open")
    );
}

#[test]
fn test_expense_roundtrip() {
    let expense = Expense {
        date: "2025-02-01".to_string(),
        pay_kind: ExpensePayKind::Cash,
        payee: "Taxi Berlin".to_string(),
        price_total: 23.8,
        vat_percent: 19.0,
        pay_date: Some("2025-02-02".to_string()),
        description: None,
        price: Some(20.0),
        vat_amount: Some(3.8),
        receipts: None,
    };

    let json = serde_json::to_value(&expense).unwrap();
    assert_eq!(json["payKind"], "cash");
    assert_eq!(json["priceTotal"], 23.8);
    assert!(json.get("receipts").is_none());

    let back: Expense = serde_json::from_value(json).unwrap();
    assert_eq!(back.payee, "Taxi Berlin");
    assert_eq!(back.pay_kind, ExpensePayKind::Cash);
}

// ============================================================================
// Invoices
// ============================================================================

#[test]
fn test_invoice_list_item_deserialization() {
    let item: InvoiceListItem = serde_json::from_value(json!({
        "id": 77,
        "date": "2025-01-15",
        "state": "partiallyPaid",
        "type": "invoice",
        "number": "RE-2025-001",
        "customerId": 12,
        "customerData": {"name": "ACME GmbH", "number": "K-12"},
        "dueToDate": "2025-01-29",
        "outstandingAmount": 140.0,
        "totalNet": 200.0,
        "totalGross": 238.0,
        "metaData": {
            "currentDunning": {"date": "2025-02-05", "label": "first reminder"}
        }
    }))
    .unwrap();

    assert_eq!(item.id, 77);
    assert_eq!(item.state, InvoiceState::PartiallyPaid);
    assert_eq!(item.invoice_type, InvoiceType::Invoice);
    assert_eq!(item.customer_data.as_ref().unwrap().name, "ACME GmbH");
    let dunning = item.meta_data.unwrap().current_dunning.unwrap();
    assert_eq!(dunning.label, "first reminder");
}

#[test]
fn test_invoice_detail_deserialization() {
    let invoice: Invoice = serde_json::from_value(json!({
        "date": "2025-01-15",
        "number": "RE-2025-001",
        "priceKind": "net",
        "type": "invoice",
        "payConditionId": 1,
        "payConditionData": {"id": 1, "name": "14 days", "dueDays": 14},
        "positions": [{"id": 1, "title": "Consulting"}],
        "totalNet": 200.0,
        "totalGross": 238.0
    }))
    .unwrap();

    assert_eq!(invoice.price_kind, Some(PriceKind::Net));
    assert_eq!(invoice.invoice_type, Some(InvoiceType::Invoice));
    assert_eq!(invoice.positions.len(), 1);
    assert_eq!(invoice.pay_condition_data.as_ref().unwrap().data.name, "14 days");
}

#[test]
fn test_invoice_draft_serialization_with_customer_id() {
    let draft = InvoiceDraft {
        date: "2025-03-01".to_string(),
        pay_condition_id: 1,
        customer_id: Some(12),
        customer_data: None,
        info_section_custom_fields: Some(vec![InfoSectionCustomField {
            label: "Project".to_string(),
            value: "Rollout".to_string(),
        }]),
        options: Some(InvoiceDraftOptions {
            due_days: Some(14),
            show_article_number: Some(true),
            ..Default::default()
        }),
        price_kind: Some(PriceKind::Net),
        texts: None,
        title: Some("March invoice".to_string()),
    };

    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["customerId"], 12);
    assert_eq!(json["payConditionId"], 1);
    assert_eq!(json["infoSectionCustomFields"][0]["label"], "Project");
    assert_eq!(json["options"]["dueDays"], 14);
    // customer_id and customer_data are mutually exclusive on the wire.
    assert!(json.get("customerData").is_none());
}

#[test]
fn test_invoice_payment_kind_uses_type_field() {
    let payment = InvoicePayment {
        amount: 50.0,
        notes: "partial".to_string(),
        kind: InvoicePaymentKind::Bankcharge,
    };

    let json = serde_json::to_value(&payment).unwrap();
    assert_eq!(json["type"], "bankcharge");
    assert!(json.get("kind").is_none());

    let back: InvoicePayment = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind, InvoicePaymentKind::Bankcharge);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_pay_condition_optional_fields() {
    let condition: PayCondition = serde_json::from_value(json!({"name": "immediately"})).unwrap();
    assert_eq!(condition.name, "immediately");
    assert!(condition.due_days.is_none());

    let json = serde_json::to_value(&condition).unwrap();
    assert!(json.get("dueDays").is_none());
    assert!(json.get("isInstant").is_none());
}

#[test]
fn test_miscellaneous_defaults_missing_collections() {
    let misc: Miscellaneous = serde_json::from_value(json!({
        "salutations": ["Mr", "Ms"],
        "vats": [7.0, 19.0]
    }))
    .unwrap();

    assert_eq!(misc.salutations.len(), 2);
    assert_eq!(misc.vats, vec![7.0, 19.0]);
    assert!(misc.article_units.is_empty());
    assert!(!misc.auto_create_articles);
}

// ============================================================================
// To-dos
// ============================================================================

#[test]
fn test_todo_roundtrip() {
    let entity: Entity<ToDo> = serde_json::from_value(json!({
        "id": 42,
        "date": "2025-01-01",
        "title": "Call back",
        "customerId": 7,
        "metaData": {"description": "about the offer"}
    }))
    .unwrap();

    assert_eq!(entity.id, 42);
    assert_eq!(entity.data.customer_id, Some(7));
    assert_eq!(
        entity.data.meta_data.as_ref().unwrap().description.as_deref(),
        Some("about the offer")
    );

    let json = serde_json::to_value(&entity).unwrap();
    assert_eq!(json["customerId"], 7);
    assert!(json.get("doneAt").is_none());
}

// ============================================================================
// Validation failures
// ============================================================================

#[test]
fn test_validation_failure_deserialization() {
    let failure: ValidationFailure = serde_json::from_value(json!({
        "name": "ValidationError",
        "message": "invalid",
        "meta": {
            "title": [{"code": "required"}],
            "date": [{"code": "required"}, {"code": "format"}]
        }
    }))
    .unwrap();

    assert_eq!(failure.name, "ValidationError");
    assert_eq!(failure.meta["title"][0].code, "required");
    assert_eq!(failure.meta["date"][1].code, "format");
}
