//! invoiz SDK
//!
//! A Rust client library for the invoiz invoicing API.
//!
//! This SDK provides:
//! - A typed async client for customers, articles, invoices, offers,
//!   expenses, to-dos and settings
//! - Transparent access-token lifecycle: the long-lived API key pair is
//!   exchanged for a token on first use, and a rejected token is refreshed
//!   and the call retried exactly once
//! - Fail-fast pagination: ordering and filter fields are validated against
//!   each resource's capabilities before any network call
//! - Typed error handling for authentication, validation, timeout,
//!   decoding and network failures
//!
//! # Example
//!
//! ```no_run
//! use invoiz_sdk::{ArticleListOptions, ArticleOrderBy, ClientConfig, InvoizClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = InvoizClient::new(
//!     ClientConfig::new("api-key", "api-key-secret").with_installation_id("my-install"),
//! );
//!
//! let page = client
//!     .list_articles(&ArticleListOptions {
//!         search_text: Some("screws".to_string()),
//!         order_by: Some(ArticleOrderBy::Title),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("{} of {} articles", page.items.len(), page.count);
//! for article in &page.items {
//!     println!("#{} {}", article.id, article.data.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod invoiz_api;

// Re-export commonly used types and functions
pub use invoiz_api::{
    client::{InvoizClient, DEFAULT_BASE_URL},
    endpoint::{Endpoint, ResourceDescriptor},
    pagination::{build_query, parse_query, Page, PageRequest, DEFAULT_LIMIT, DEFAULT_OFFSET},
    resources::{
        Article, ArticleListOptions, ArticleOrderBy, ArticleSetting, CalculationBase,
        CancellationInfo, Customer, CustomerAddress, CustomerData, CustomerKind,
        CustomerListOptions, CustomerOrderBy, DunningInfo, Entity, Expense, ExpenseFilter,
        ExpenseListOptions, ExpenseOrderBy, ExpensePayKind, ExpensePayKindFilter, ExpenseReceipt,
        ExpenseReceiptUpload, InfoSectionCustomField, Invoice, InvoiceDraft, InvoiceDraftOptions,
        InvoiceDraftTexts, InvoiceFilter, InvoiceListItem, InvoiceListOptions, InvoiceMailParams,
        InvoiceMetaData, InvoiceOrderBy, InvoicePayment, InvoicePaymentKind, InvoicePosition,
        InvoiceState, InvoiceType, Miscellaneous, NextDunningInfo, Offer, OfferListOptions,
        OfferOrderBy, PayCondition, PriceKind, ToDo, ToDoActiveFilter, ToDoListOptions,
        ToDoMetaData,
    },
    types::{ClientConfig, FieldError, InvoizError, ValidationFailure},
};
