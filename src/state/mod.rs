//! State management module

mod app_state;
pub mod forms;
mod records;

pub use app_state::{
    AppState, LeadSortField, OrderSortField, SortDirection, View, WizardKind,
};
pub use records::{
    BusinessProfile, Lead, LeadPriority, LeadStatus, Order, OrderStatus, Payment, PaymentKind,
    PaymentStatus, ProfileStatus, Quote, QuoteStatus, RegisteredAddress, SupportTicket,
    TicketStatus,
};
