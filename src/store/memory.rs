//! In-memory store backing

use super::traits::{CrmStore, StoreError, StoreResult};
use crate::state::{BusinessProfile, Lead, LeadStatus, Order, Payment, Quote, SupportTicket};
use async_trait::async_trait;

/// Mock-data-backed store. Collections live for the process lifetime and
/// are only mutated from the UI event path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    leads: Vec<Lead>,
    quotes: Vec<Quote>,
    orders: Vec<Order>,
    payments: Vec<Payment>,
    profiles: Vec<BusinessProfile>,
    tickets: Vec<SupportTicket>,
}

impl InMemoryStore {
    pub fn new(
        leads: Vec<Lead>,
        quotes: Vec<Quote>,
        orders: Vec<Order>,
        payments: Vec<Payment>,
        profiles: Vec<BusinessProfile>,
        tickets: Vec<SupportTicket>,
    ) -> Self {
        Self {
            leads,
            quotes,
            orders,
            payments,
            profiles,
            tickets,
        }
    }

    /// Store seeded with the demo dataset
    pub fn seeded() -> Self {
        super::seed::sample_store()
    }
}

#[async_trait]
impl CrmStore for InMemoryStore {
    async fn load_leads(&self) -> StoreResult<Vec<Lead>> {
        Ok(self.leads.clone())
    }

    async fn load_quotes(&self) -> StoreResult<Vec<Quote>> {
        Ok(self.quotes.clone())
    }

    async fn load_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.clone())
    }

    async fn load_payments(&self) -> StoreResult<Vec<Payment>> {
        Ok(self.payments.clone())
    }

    async fn load_profiles(&self) -> StoreResult<Vec<BusinessProfile>> {
        Ok(self.profiles.clone())
    }

    async fn load_tickets(&self) -> StoreResult<Vec<SupportTicket>> {
        Ok(self.tickets.clone())
    }

    async fn find_profile(&self, id: &str) -> StoreResult<BusinessProfile> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "profile",
                id: id.to_string(),
            })
    }

    async fn append_profile(&mut self, profile: BusinessProfile) -> StoreResult<String> {
        if profile.company_name.trim().is_empty() {
            return Err(StoreError::Rejected(
                "profile is missing a company name".to_string(),
            ));
        }
        let id = profile.id.clone();
        self.profiles.push(profile);
        Ok(id)
    }

    async fn append_ticket(&mut self, ticket: SupportTicket) -> StoreResult<String> {
        if ticket.subject.trim().is_empty() {
            return Err(StoreError::Rejected(
                "ticket is missing a subject".to_string(),
            ));
        }
        let id = ticket.id.clone();
        self.tickets.push(ticket);
        Ok(id)
    }

    async fn link_profile_to_lead(&mut self, lead_id: &str, profile_id: &str) -> StoreResult<()> {
        let lead = self
            .leads
            .iter_mut()
            .find(|l| l.id == lead_id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "lead",
                id: lead_id.to_string(),
            })?;
        lead.business_profile_id = Some(profile_id.to_string());
        lead.status = LeadStatus::Converted;
        Ok(())
    }
}
