use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Logical resource endpoints of the invoiz API.
///
/// Each variant maps to one path segment below the API base URL. Operations
/// (get/list/create/update/delete) are wired per resource in
/// [`crate::InvoizClient`]; this enum only names the endpoint and carries its
/// capabilities via [`Endpoint::descriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Article,
    AuthToken,
    Customer,
    Expense,
    ExpenseReceipt,
    Invoice,
    Offer,
    SettingArticle,
    SettingPayCondition,
    SettingMiscellaneous,
    ToDo,
}

impl Endpoint {
    /// Wire path segment for this endpoint, relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Article => "article",
            Endpoint::AuthToken => "auth/token",
            Endpoint::Customer => "customer",
            Endpoint::Expense => "expense",
            Endpoint::ExpenseReceipt => "expense/receipt",
            Endpoint::Invoice => "invoice",
            Endpoint::Offer => "offer",
            Endpoint::SettingArticle => "setting/article",
            Endpoint::SettingPayCondition => "setting/payCondition",
            Endpoint::SettingMiscellaneous => "setting/miscellaneous",
            Endpoint::ToDo => "todo",
        }
    }

    /// Static capability descriptor for this endpoint.
    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        DESCRIPTORS
            .get(self)
            .expect("every endpoint has a descriptor")
    }
}

/// Static, declarative description of one resource's listing capabilities.
///
/// Descriptors are immutable and defined once per resource kind. The
/// pagination adapter validates every [`crate::PageRequest`] against the
/// invoking descriptor before any network call is made.
#[derive(Debug)]
pub struct ResourceDescriptor {
    pub endpoint: Endpoint,
    /// Whether the resource supports the paginated list operation at all.
    pub supports_pagination: bool,
    /// Whether the resource accepts the `searchText` parameter. Resources
    /// without search also reject the `desc` ordering flag.
    pub searchable: bool,
    /// Field names accepted for `orderBy`.
    pub orderable_fields: HashSet<&'static str>,
    /// Resource-specific filter parameter names.
    pub filterable_fields: HashSet<&'static str>,
}

fn descriptor(
    endpoint: Endpoint,
    supports_pagination: bool,
    searchable: bool,
    orderable: &[&'static str],
    filterable: &[&'static str],
) -> (Endpoint, ResourceDescriptor) {
    (
        endpoint,
        ResourceDescriptor {
            endpoint,
            supports_pagination,
            searchable,
            orderable_fields: orderable.iter().copied().collect(),
            filterable_fields: filterable.iter().copied().collect(),
        },
    )
}

// Verb mapping per resource is GET (single/list), POST (create), PUT
// (update), DELETE (remove); command sub-paths are POST. The table below
// only describes listing capability.
static DESCRIPTORS: Lazy<HashMap<Endpoint, ResourceDescriptor>> = Lazy::new(|| {
    HashMap::from([
        descriptor(Endpoint::Article, true, true, &["number", "title"], &[]),
        descriptor(Endpoint::AuthToken, false, false, &[], &[]),
        descriptor(Endpoint::Customer, true, true, &["name", "number"], &[]),
        descriptor(
            Endpoint::Expense,
            true,
            true,
            &["date", "id", "payee", "payKind", "priceTotal"],
            &["filter", "payKind"],
        ),
        descriptor(Endpoint::ExpenseReceipt, false, false, &[], &[]),
        descriptor(
            Endpoint::Invoice,
            true,
            true,
            &["customerData.name", "date", "dueToDate", "totalNet", "totalGross"],
            &["filter"],
        ),
        descriptor(
            Endpoint::Offer,
            true,
            true,
            &["customerData.name", "number", "date", "totalNet", "totalGross"],
            &[],
        ),
        descriptor(Endpoint::SettingArticle, false, false, &[], &[]),
        descriptor(Endpoint::SettingPayCondition, false, false, &[], &[]),
        descriptor(Endpoint::SettingMiscellaneous, false, false, &[], &[]),
        // To-dos paginate but support neither free-text search nor ordering.
        descriptor(
            Endpoint::ToDo,
            true,
            false,
            &[],
            &["activeFilter", "customerId"],
        ),
    ])
});
