use crate::invoiz_api::auth::CredentialStore;
use crate::invoiz_api::endpoint::Endpoint;
use crate::invoiz_api::envelope::{
    decode_no_content, decode_page, decode_single, RawResponse,
};
use crate::invoiz_api::pagination::{build_query, Page, PageRequest};
use crate::invoiz_api::resources::{
    Article, ArticleListOptions, ArticleSetting, Customer, CustomerListOptions, Entity, Expense,
    ExpenseListOptions, ExpenseReceipt, ExpenseReceiptUpload, Invoice, InvoiceDraft,
    InvoiceListItem, InvoiceListOptions, InvoiceMailParams, InvoicePayment, Miscellaneous, Offer,
    OfferListOptions, PayCondition, ToDo, ToDoListOptions,
};
use crate::invoiz_api::types::{ClientConfig, InvoizError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://app.invoiz.de/api";

/// Timeout applied to each HTTP exchange unless overridden.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const NO_BODY: Option<&()> = None;

/// HTTP client for the invoiz API
///
/// Wraps the generic authenticated-request engine: every operation maps to
/// exactly one HTTP exchange, with the access-token lifecycle handled
/// transparently. A missing token is issued on first use; a token the
/// service rejects mid-operation is re-issued and the exchange retried
/// exactly once.
#[derive(Debug)]
pub struct InvoizClient {
    base_url: String,
    http: reqwest::Client,
    timeout: Duration,
    store: CredentialStore,
}

impl InvoizClient {
    /// Create a new client against the production API.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use invoiz_sdk::{ClientConfig, InvoizClient};
    ///
    /// let client = InvoizClient::new(ClientConfig::new("api-key", "api-key-secret"));
    /// ```
    pub fn new(config: ClientConfig) -> Self {
        tracing::debug!("Creating InvoizClient for base URL: {}", DEFAULT_BASE_URL);
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
            store: CredentialStore::new(config),
        }
    }

    /// Point the client at a different base URL (builder pattern).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-exchange timeout (builder pattern). The automatic
    /// auth-retry gets its own timeout window.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build and send one authenticated exchange, classifying the raw
    /// response.
    ///
    /// On an authentication rejection the stored token is cleared, a fresh
    /// one issued (waiting on a concurrent issuance if one is in flight)
    /// and the exchange retried exactly once; a second rejection is
    /// surfaced. Every other failure is handed to the envelope decoder
    /// untouched.
    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint,
        tail: Option<&str>,
        query: &BTreeMap<String, String>,
        body: Option<&B>,
    ) -> Result<RawResponse, InvoizError> {
        let url = match tail {
            Some(tail) => format!("{}/{}/{}", self.base_url, endpoint.path(), tail),
            None => format!("{}/{}", self.base_url, endpoint.path()),
        };

        let mut retried = false;
        loop {
            let token = self
                .store
                .acquire(&self.http, &self.base_url, self.timeout)
                .await?;

            tracing::debug!("{} {}", method, url);

            let mut request = self
                .http
                .request(method.clone(), &url)
                .timeout(self.timeout)
                .bearer_auth(&token);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await.map_err(InvoizError::from)?;
            let status = response.status();

            if status == reqwest::StatusCode::UNAUTHORIZED {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unauthorized".to_string());
                if retried {
                    tracing::error!("Access token rejected again after refresh");
                    return Err(InvoizError::Authentication {
                        status: status.as_u16(),
                        message,
                    });
                }
                tracing::warn!("Access token rejected, refreshing and retrying once");
                self.store.invalidate(&token).await;
                retried = true;
                continue;
            }

            let body = response.text().await.map_err(InvoizError::from)?;
            return Ok(RawResponse {
                status: status.as_u16(),
                body,
            });
        }
    }

    async fn fetch_single<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        tail: Option<&str>,
    ) -> Result<T, InvoizError> {
        let raw = self
            .dispatch(Method::GET, endpoint, tail, &BTreeMap::new(), NO_BODY)
            .await?;
        decode_single(&raw)
    }

    /// List one page of a paginated resource. The page request is validated
    /// against the endpoint's descriptor before any network call.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: PageRequest,
    ) -> Result<Page<T>, InvoizError> {
        let query = build_query(endpoint.descriptor(), &request)?;
        let raw = self
            .dispatch(Method::GET, endpoint, None, &query, NO_BODY)
            .await?;
        decode_page(&raw, request)
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        tail: Option<&str>,
        body: &B,
    ) -> Result<T, InvoizError> {
        let raw = self
            .dispatch(Method::POST, endpoint, tail, &BTreeMap::new(), Some(body))
            .await?;
        decode_single(&raw)
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        tail: Option<&str>,
        body: &B,
    ) -> Result<T, InvoizError> {
        let raw = self
            .dispatch(Method::PUT, endpoint, tail, &BTreeMap::new(), Some(body))
            .await?;
        decode_single(&raw)
    }

    async fn remove(&self, endpoint: Endpoint, id: i64) -> Result<(), InvoizError> {
        let tail = id.to_string();
        let raw = self
            .dispatch(
                Method::DELETE,
                endpoint,
                Some(&tail),
                &BTreeMap::new(),
                NO_BODY,
            )
            .await?;
        decode_no_content(&raw)
    }

    // ========== Articles ==========

    /// List one page of articles.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use invoiz_sdk::{ArticleListOptions, ClientConfig, InvoizClient};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = InvoizClient::new(ClientConfig::new("key", "secret"));
    /// let mut page = client.list_articles(&ArticleListOptions::default()).await?;
    /// println!("{} articles total", page.count);
    /// while let Some(next) = page.next_request() {
    ///     page = client.list_articles_page(next).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_articles(
        &self,
        options: &ArticleListOptions,
    ) -> Result<Page<Entity<Article>>, InvoizError> {
        self.fetch_page(Endpoint::Article, options.page_request()).await
    }

    /// List articles from an explicit [`PageRequest`], e.g. one produced by
    /// [`Page::next_request`].
    pub async fn list_articles_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<Entity<Article>>, InvoizError> {
        self.fetch_page(Endpoint::Article, request).await
    }

    /// Get a single article by id.
    pub async fn get_article(&self, id: i64) -> Result<Entity<Article>, InvoizError> {
        self.fetch_single(Endpoint::Article, Some(&id.to_string())).await
    }

    /// Create an article.
    pub async fn create_article(&self, article: &Article) -> Result<Entity<Article>, InvoizError> {
        self.post(Endpoint::Article, None, article).await
    }

    /// Update an article by id.
    pub async fn update_article(
        &self,
        id: i64,
        article: &Article,
    ) -> Result<Entity<Article>, InvoizError> {
        self.put(Endpoint::Article, Some(&id.to_string()), article).await
    }

    /// Delete an article by id.
    pub async fn delete_article(&self, id: i64) -> Result<(), InvoizError> {
        self.remove(Endpoint::Article, id).await
    }

    // ========== Customers ==========

    /// List one page of customers.
    pub async fn list_customers(
        &self,
        options: &CustomerListOptions,
    ) -> Result<Page<Customer>, InvoizError> {
        self.fetch_page(Endpoint::Customer, options.page_request()).await
    }

    /// List customers from an explicit [`PageRequest`].
    pub async fn list_customers_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<Customer>, InvoizError> {
        self.fetch_page(Endpoint::Customer, request).await
    }

    /// Get a single customer by id.
    pub async fn get_customer(&self, id: i64) -> Result<Customer, InvoizError> {
        self.fetch_single(Endpoint::Customer, Some(&id.to_string())).await
    }

    /// Create a customer.
    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer, InvoizError> {
        self.post(Endpoint::Customer, None, customer).await
    }

    /// Update a customer by id.
    pub async fn update_customer(
        &self,
        id: i64,
        customer: &Customer,
    ) -> Result<Customer, InvoizError> {
        self.put(Endpoint::Customer, Some(&id.to_string()), customer).await
    }

    /// Delete a customer by id.
    pub async fn delete_customer(&self, id: i64) -> Result<(), InvoizError> {
        self.remove(Endpoint::Customer, id).await
    }

    // ========== Expenses ==========

    /// List one page of expenses.
    pub async fn list_expenses(
        &self,
        options: &ExpenseListOptions,
    ) -> Result<Page<Entity<Expense>>, InvoizError> {
        self.fetch_page(Endpoint::Expense, options.page_request()).await
    }

    /// List expenses from an explicit [`PageRequest`].
    pub async fn list_expenses_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<Entity<Expense>>, InvoizError> {
        self.fetch_page(Endpoint::Expense, request).await
    }

    /// Get a single expense by id.
    pub async fn get_expense(&self, id: i64) -> Result<Entity<Expense>, InvoizError> {
        self.fetch_single(Endpoint::Expense, Some(&id.to_string())).await
    }

    /// Create an expense.
    pub async fn create_expense(&self, expense: &Expense) -> Result<Entity<Expense>, InvoizError> {
        self.post(Endpoint::Expense, None, expense).await
    }

    /// Update an expense by id.
    pub async fn update_expense(
        &self,
        id: i64,
        expense: &Expense,
    ) -> Result<Entity<Expense>, InvoizError> {
        self.put(Endpoint::Expense, Some(&id.to_string()), expense).await
    }

    /// Delete an expense by id.
    pub async fn delete_expense(&self, id: i64) -> Result<(), InvoizError> {
        self.remove(Endpoint::Expense, id).await
    }

    /// Upload a receipt document; the returned id can be attached to an
    /// expense. The content is base64-encoded into a JSON body.
    pub async fn upload_expense_receipt(
        &self,
        file_name: impl Into<String>,
        content: &[u8],
    ) -> Result<ExpenseReceipt, InvoizError> {
        let payload = ExpenseReceiptUpload {
            name: file_name.into(),
            content: BASE64.encode(content),
        };
        tracing::debug!("Uploading receipt '{}' ({} bytes)", payload.name, content.len());
        self.post(Endpoint::ExpenseReceipt, None, &payload).await
    }

    // ========== Invoices ==========

    /// List one page of invoices.
    pub async fn list_invoices(
        &self,
        options: &InvoiceListOptions,
    ) -> Result<Page<InvoiceListItem>, InvoizError> {
        self.fetch_page(Endpoint::Invoice, options.page_request()).await
    }

    /// List invoices from an explicit [`PageRequest`].
    pub async fn list_invoices_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<InvoiceListItem>, InvoizError> {
        self.fetch_page(Endpoint::Invoice, request).await
    }

    /// Get a single invoice by id.
    pub async fn get_invoice(&self, id: i64) -> Result<Entity<Invoice>, InvoizError> {
        self.fetch_single(Endpoint::Invoice, Some(&id.to_string())).await
    }

    /// Create an invoice from a draft.
    pub async fn create_invoice(
        &self,
        draft: &InvoiceDraft,
    ) -> Result<Entity<Invoice>, InvoizError> {
        self.post(Endpoint::Invoice, None, draft).await
    }

    /// Update an invoice by id.
    pub async fn update_invoice(
        &self,
        id: i64,
        draft: &InvoiceDraft,
    ) -> Result<Entity<Invoice>, InvoizError> {
        self.put(Endpoint::Invoice, Some(&id.to_string()), draft).await
    }

    /// Delete an invoice by id.
    pub async fn delete_invoice(&self, id: i64) -> Result<(), InvoizError> {
        self.remove(Endpoint::Invoice, id).await
    }

    /// Book a payment against an invoice.
    pub async fn add_invoice_payment(
        &self,
        id: i64,
        payment: &InvoicePayment,
    ) -> Result<Entity<InvoicePayment>, InvoizError> {
        tracing::info!("Booking {:?} payment on invoice {}", payment.kind, id);
        let tail = format!("{}/payment", id);
        self.post(Endpoint::Invoice, Some(&tail), payment).await
    }

    /// Send an invoice per mail to the given recipients.
    pub async fn send_invoice_mail(
        &self,
        id: i64,
        params: &InvoiceMailParams,
    ) -> Result<(), InvoizError> {
        tracing::info!(
            "Sending invoice {} to {} recipient(s)",
            id,
            params.recipients.len()
        );
        let tail = format!("{}/email", id);
        self.post::<serde_json::Value, _>(Endpoint::Invoice, Some(&tail), params)
            .await
            .map(|_| ())
    }

    // ========== Offers ==========

    /// List one page of offers.
    pub async fn list_offers(
        &self,
        options: &OfferListOptions,
    ) -> Result<Page<Offer>, InvoizError> {
        self.fetch_page(Endpoint::Offer, options.page_request()).await
    }

    /// List offers from an explicit [`PageRequest`].
    pub async fn list_offers_page(&self, request: PageRequest) -> Result<Page<Offer>, InvoizError> {
        self.fetch_page(Endpoint::Offer, request).await
    }

    /// Get a single offer by id.
    pub async fn get_offer(&self, id: i64) -> Result<Offer, InvoizError> {
        self.fetch_single(Endpoint::Offer, Some(&id.to_string())).await
    }

    /// Delete an offer by id.
    pub async fn delete_offer(&self, id: i64) -> Result<(), InvoizError> {
        self.remove(Endpoint::Offer, id).await
    }

    // ========== Settings ==========

    /// Get the article settings.
    pub async fn article_settings(&self) -> Result<ArticleSetting, InvoizError> {
        self.fetch_single(Endpoint::SettingArticle, None).await
    }

    /// Replace the article settings.
    pub async fn update_article_settings(
        &self,
        settings: &ArticleSetting,
    ) -> Result<ArticleSetting, InvoizError> {
        self.put(Endpoint::SettingArticle, None, settings).await
    }

    /// Get all configured payment conditions.
    pub async fn pay_conditions(&self) -> Result<Vec<Entity<PayCondition>>, InvoizError> {
        self.fetch_single(Endpoint::SettingPayCondition, None).await
    }

    /// Get the miscellaneous tenant settings.
    pub async fn miscellaneous_settings(&self) -> Result<Miscellaneous, InvoizError> {
        self.fetch_single(Endpoint::SettingMiscellaneous, None).await
    }

    // ========== To-dos ==========

    /// List one page of to-dos.
    pub async fn list_todos(
        &self,
        options: &ToDoListOptions,
    ) -> Result<Page<Entity<ToDo>>, InvoizError> {
        self.fetch_page(Endpoint::ToDo, options.page_request()).await
    }

    /// List to-dos from an explicit [`PageRequest`].
    pub async fn list_todos_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<Entity<ToDo>>, InvoizError> {
        self.fetch_page(Endpoint::ToDo, request).await
    }

    /// Get a single to-do by id.
    pub async fn get_todo(&self, id: i64) -> Result<Entity<ToDo>, InvoizError> {
        self.fetch_single(Endpoint::ToDo, Some(&id.to_string())).await
    }

    /// Create a to-do.
    pub async fn create_todo(&self, todo: &ToDo) -> Result<Entity<ToDo>, InvoizError> {
        self.post(Endpoint::ToDo, None, todo).await
    }

    /// Update a to-do by id.
    pub async fn update_todo(&self, id: i64, todo: &ToDo) -> Result<Entity<ToDo>, InvoizError> {
        self.put(Endpoint::ToDo, Some(&id.to_string()), todo).await
    }

    /// Delete a to-do by id.
    pub async fn delete_todo(&self, id: i64) -> Result<(), InvoizError> {
        self.remove(Endpoint::ToDo, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InvoizClient::new(ClientConfig::new("key", "secret"));
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = InvoizClient::new(ClientConfig::new("key", "secret"))
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_with_timeout() {
        let client = InvoizClient::new(ClientConfig::new("key", "secret"))
            .with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
