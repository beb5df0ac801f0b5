use crate::invoiz_api::pagination::PageRequest;
use serde::{Deserialize, Serialize};

/// A persisted record: the business payload merged with its numeric `id`.
///
/// Payloads without an `id` are transient, not yet saved on the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity<T> {
    pub id: i64,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationBase {
    Gross,
    Net,
}

/// Catalog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub number: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_base: Option<CalculationBase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_alert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_gross: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_percent: Option<f64>,
}

/// Article-related tenant settings (`setting/article`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_articles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerKind {
    Company,
    Person,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    pub city: String,
    pub iso_country: String,
    pub street: String,
    pub zip_code: String,
}

/// Customer record. `name` and `kind` are always present; the service omits
/// most other fields in list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub kind: CustomerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<CustomerAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name_affix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_alert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_condition_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Condensed customer summary embedded in invoice and offer list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpensePayKind {
    Bank,
    Cash,
    Open,
}

/// Booked expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub date: String,
    pub pay_kind: ExpensePayKind,
    pub payee: String,
    pub price_total: f64,
    pub vat_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipts: Option<ExpenseReceipt>,
}

/// Receipt document attached to an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReceipt {
    pub id: i64,
}

/// Upload payload for `POST expense/receipt`: file name plus
/// base64-encoded content.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReceiptUpload {
    pub name: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceKind {
    Gross,
    Net,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceState {
    Draft,
    Locked,
    PartiallyPaid,
    Paid,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceType {
    Invoice,
    ClosingInvoice,
    DepositInvoice,
    RecurringInvoice,
    RecurringInvoiceTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePosition {
    pub id: i64,
    pub title: String,
}

/// Full invoice as returned by the single-item endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_discount_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_to_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outstanding_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_condition_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_condition_data: Option<Entity<PayCondition>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<InvoicePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_kind: Option<PriceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<InvoiceType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationInfo {
    pub date: String,
    pub id: i64,
    pub number: i64,
    pub total_net: f64,
    pub total_gross: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DunningInfo {
    pub date: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextDunningInfo {
    pub date: String,
    pub dunning_level: String,
    pub label: String,
}

/// Cancellation and dunning metadata attached to invoice list rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation: Option<CancellationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_dunning: Option<DunningInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_dunning: Option<NextDunningInfo>,
}

/// One row of the paginated invoice list. The list view carries its own
/// `id` and a condensed customer summary instead of the full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListItem {
    pub id: i64,
    pub date: String,
    pub state: InvoiceState,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_discount_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_to_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<InvoiceMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outstanding_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoicePaymentKind {
    Payment,
    Partial,
    Discount,
    Bankcharge,
    Surcharge,
}

/// Payment booked against an invoice (`POST invoice/{id}/payment`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayment {
    pub amount: f64,
    pub notes: String,
    #[serde(rename = "type")]
    pub kind: InvoicePaymentKind,
}

/// Parameters for dispatching an invoice per mail
/// (`POST invoice/{id}/email`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMailParams {
    pub attachment_name: String,
    pub recipients: Vec<String>,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoSectionCustomField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraftOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date_end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_article_number: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraftTexts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
}

/// Creation payload for `POST invoice`.
///
/// Exactly one of `customer_id` and `customer_data` should be set: an
/// existing customer by id, or inline customer data (the service accepts a
/// `kindCompany`/`kindPerson` wrapper object there, passed through as raw
/// JSON).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub date: String,
    pub pay_condition_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_section_custom_fields: Option<Vec<InfoSectionCustomField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<InvoiceDraftOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_kind: Option<PriceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<InvoiceDraftTexts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

/// Offer list/detail record; read-only on this API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub date: String,
    pub due_to_date: String,
    pub number: String,
    pub cash_discount_total: f64,
    pub outstanding_amount: f64,
    pub total_gross: f64,
    pub total_net: f64,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Payment condition (`setting/payCondition`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayCondition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_basic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_instant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_text: Option<String>,
}

/// Tenant-wide miscellaneous settings (`setting/miscellaneous`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Miscellaneous {
    #[serde(default)]
    pub article_categories: Vec<String>,
    #[serde(default)]
    pub article_units: Vec<String>,
    #[serde(default)]
    pub auto_create_articles: bool,
    #[serde(default)]
    pub customer_categories: Vec<String>,
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub salutations: Vec<String>,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub vats: Vec<f64>,
}

// ---------------------------------------------------------------------------
// To-dos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<ToDoMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// List options
// ---------------------------------------------------------------------------

fn base_request(
    limit: Option<u32>,
    offset: Option<u32>,
    descending: Option<bool>,
    search_text: Option<&String>,
) -> PageRequest {
    PageRequest {
        limit,
        offset,
        descending,
        search_text: search_text.cloned(),
        ..Default::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOrderBy {
    Number,
    Title,
}

impl ArticleOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleOrderBy::Number => "number",
            ArticleOrderBy::Title => "title",
        }
    }
}

/// Listing options for articles.
#[derive(Debug, Clone, Default)]
pub struct ArticleListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub descending: Option<bool>,
    pub search_text: Option<String>,
    pub order_by: Option<ArticleOrderBy>,
}

impl ArticleListOptions {
    pub fn page_request(&self) -> PageRequest {
        let mut request = base_request(
            self.limit,
            self.offset,
            self.descending,
            self.search_text.as_ref(),
        );
        request.order_by = self.order_by.map(|o| o.as_str().to_string());
        request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerOrderBy {
    Name,
    Number,
}

impl CustomerOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerOrderBy::Name => "name",
            CustomerOrderBy::Number => "number",
        }
    }
}

/// Listing options for customers.
#[derive(Debug, Clone, Default)]
pub struct CustomerListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub descending: Option<bool>,
    pub search_text: Option<String>,
    pub order_by: Option<CustomerOrderBy>,
}

impl CustomerListOptions {
    pub fn page_request(&self) -> PageRequest {
        let mut request = base_request(
            self.limit,
            self.offset,
            self.descending,
            self.search_text.as_ref(),
        );
        request.order_by = self.order_by.map(|o| o.as_str().to_string());
        request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseOrderBy {
    Date,
    Id,
    Payee,
    PayKind,
    PriceTotal,
}

impl ExpenseOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseOrderBy::Date => "date",
            ExpenseOrderBy::Id => "id",
            ExpenseOrderBy::Payee => "payee",
            ExpenseOrderBy::PayKind => "payKind",
            ExpenseOrderBy::PriceTotal => "priceTotal",
        }
    }
}

/// Payment-state filter of the expense list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseFilter {
    All,
    Open,
    Paid,
}

impl ExpenseFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseFilter::All => "all",
            ExpenseFilter::Open => "open",
            ExpenseFilter::Paid => "paid",
        }
    }
}

/// Pay-kind filter of the expense list. Narrower than
/// [`ExpensePayKind`]: `open` is a payment state, not a pay kind you can
/// filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpensePayKindFilter {
    Bank,
    Cash,
}

impl ExpensePayKindFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpensePayKindFilter::Bank => "bank",
            ExpensePayKindFilter::Cash => "cash",
        }
    }
}

/// Listing options for expenses.
#[derive(Debug, Clone, Default)]
pub struct ExpenseListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub descending: Option<bool>,
    pub search_text: Option<String>,
    pub order_by: Option<ExpenseOrderBy>,
    pub filter: Option<ExpenseFilter>,
    pub pay_kind: Option<ExpensePayKindFilter>,
}

impl ExpenseListOptions {
    pub fn page_request(&self) -> PageRequest {
        let mut request = base_request(
            self.limit,
            self.offset,
            self.descending,
            self.search_text.as_ref(),
        );
        request.order_by = self.order_by.map(|o| o.as_str().to_string());
        if let Some(filter) = self.filter {
            request
                .filters
                .insert("filter".to_string(), filter.as_str().to_string());
        }
        if let Some(pay_kind) = self.pay_kind {
            request
                .filters
                .insert("payKind".to_string(), pay_kind.as_str().to_string());
        }
        request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceOrderBy {
    CustomerName,
    Date,
    DueToDate,
    TotalNet,
    TotalGross,
}

impl InvoiceOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceOrderBy::CustomerName => "customerData.name",
            InvoiceOrderBy::Date => "date",
            InvoiceOrderBy::DueToDate => "dueToDate",
            InvoiceOrderBy::TotalNet => "totalNet",
            InvoiceOrderBy::TotalGross => "totalGross",
        }
    }
}

/// State filter of the invoice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceFilter {
    All,
    Dunned,
    PartiallyPaid,
    Paid,
    Draft,
    Locked,
    Cancelled,
}

impl InvoiceFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceFilter::All => "all",
            InvoiceFilter::Dunned => "dunned",
            InvoiceFilter::PartiallyPaid => "partiallyPaid",
            InvoiceFilter::Paid => "paid",
            InvoiceFilter::Draft => "draft",
            InvoiceFilter::Locked => "locked",
            InvoiceFilter::Cancelled => "cancelled",
        }
    }
}

/// Listing options for invoices.
#[derive(Debug, Clone, Default)]
pub struct InvoiceListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub descending: Option<bool>,
    pub search_text: Option<String>,
    pub order_by: Option<InvoiceOrderBy>,
    pub filter: Option<InvoiceFilter>,
}

impl InvoiceListOptions {
    pub fn page_request(&self) -> PageRequest {
        let mut request = base_request(
            self.limit,
            self.offset,
            self.descending,
            self.search_text.as_ref(),
        );
        request.order_by = self.order_by.map(|o| o.as_str().to_string());
        if let Some(filter) = self.filter {
            request
                .filters
                .insert("filter".to_string(), filter.as_str().to_string());
        }
        request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOrderBy {
    CustomerName,
    Number,
    Date,
    TotalNet,
    TotalGross,
}

impl OfferOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferOrderBy::CustomerName => "customerData.name",
            OfferOrderBy::Number => "number",
            OfferOrderBy::Date => "date",
            OfferOrderBy::TotalNet => "totalNet",
            OfferOrderBy::TotalGross => "totalGross",
        }
    }
}

/// Listing options for offers.
#[derive(Debug, Clone, Default)]
pub struct OfferListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub descending: Option<bool>,
    pub search_text: Option<String>,
    pub order_by: Option<OfferOrderBy>,
}

impl OfferListOptions {
    pub fn page_request(&self) -> PageRequest {
        let mut request = base_request(
            self.limit,
            self.offset,
            self.descending,
            self.search_text.as_ref(),
        );
        request.order_by = self.order_by.map(|o| o.as_str().to_string());
        request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToDoActiveFilter {
    All,
    Future,
    Overdue,
}

impl ToDoActiveFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToDoActiveFilter::All => "all",
            ToDoActiveFilter::Future => "future",
            ToDoActiveFilter::Overdue => "overdue",
        }
    }
}

/// Listing options for to-dos. No search, no ordering on this resource.
#[derive(Debug, Clone, Default)]
pub struct ToDoListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub active_filter: Option<ToDoActiveFilter>,
    pub customer_id: Option<i64>,
}

impl ToDoListOptions {
    pub fn page_request(&self) -> PageRequest {
        let mut request = PageRequest {
            limit: self.limit,
            offset: self.offset,
            ..Default::default()
        };
        if let Some(filter) = self.active_filter {
            request
                .filters
                .insert("activeFilter".to_string(), filter.as_str().to_string());
        }
        if let Some(customer_id) = self.customer_id {
            request
                .filters
                .insert("customerId".to_string(), customer_id.to_string());
        }
        request
    }
}
