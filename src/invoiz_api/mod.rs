//! invoiz API integration module
//!
//! Provides the authenticated-request engine and the typed resource surface
//! of the invoiz API.
//!
//! ## Token lifecycle
//!
//! 1. Caller constructs a client from its long-lived API key pair
//! 2. The first operation exchanges the key pair for an access token
//!    (`POST auth/token`)
//! 3. Every exchange carries the token as a bearer credential
//! 4. The service returns no token expiry; a token is valid until rejected
//! 5. On a rejection the client re-issues once and retries the exchange
//!    once, then surfaces the failure

mod auth;
pub mod client;
pub mod endpoint;
mod envelope;
pub mod pagination;
pub mod resources;
pub mod types;

pub use client::{InvoizClient, DEFAULT_BASE_URL};
pub use endpoint::{Endpoint, ResourceDescriptor};
pub use pagination::{build_query, parse_query, Page, PageRequest};
pub use resources::*;
pub use types::{ClientConfig, FieldError, InvoizError, ValidationFailure};
