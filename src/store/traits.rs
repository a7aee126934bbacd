//! Trait abstraction for the CRM store to enable mocking in tests

use crate::state::{BusinessProfile, Lead, Order, Payment, Quote, SupportTicket};
use async_trait::async_trait;
use thiserror::Error;

/// Store failure taxonomy. Nothing here is fatal: NotFound renders as a
/// placeholder view and Rejected surfaces as a retryable submission error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("record rejected: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Injected read/write store over the shared collections.
///
/// Reads feed the screens and the metrics reducers; the only writes are the
/// append-and-link performed at wizard submission. All calls run on the
/// single-threaded event path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmStore: Send + Sync {
    /// All sales leads
    async fn load_leads(&self) -> StoreResult<Vec<Lead>>;

    /// All quotations
    async fn load_quotes(&self) -> StoreResult<Vec<Quote>>;

    /// All fabric orders
    async fn load_orders(&self) -> StoreResult<Vec<Order>>;

    /// All recorded payments
    async fn load_payments(&self) -> StoreResult<Vec<Payment>>;

    /// All customer profiles
    async fn load_profiles(&self) -> StoreResult<Vec<BusinessProfile>>;

    /// All support tickets
    async fn load_tickets(&self) -> StoreResult<Vec<SupportTicket>>;

    /// Look up one customer profile
    async fn find_profile(&self, id: &str) -> StoreResult<BusinessProfile>;

    /// Append a newly created profile; returns its id
    async fn append_profile(&mut self, profile: BusinessProfile) -> StoreResult<String>;

    /// Append a newly created ticket; returns its id
    async fn append_ticket(&mut self, ticket: SupportTicket) -> StoreResult<String>;

    /// One-time link established at submission: point the originating lead
    /// at the new profile and mark it converted
    async fn link_profile_to_lead(&mut self, lead_id: &str, profile_id: &str) -> StoreResult<()>;
}
