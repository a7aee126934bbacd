//! Application state definitions

use crate::state::forms::FormSession;
use crate::state::records::{
    BusinessProfile, Lead, LeadStatus, Order, Payment, Quote, SupportTicket, TicketStatus,
};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Leads,
    Customers,
    CustomerDetail,
    Orders,
    Tickets,
    ProfileWizard,
    TicketCreate,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::ProfileWizard | Self::TicketCreate)
    }
}

/// Which wizard is currently open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardKind {
    /// Converting a lead into a business profile
    Profile { lead_id: String },
    /// Raising a support ticket
    Ticket,
}

/// Sort field for leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadSortField {
    #[default]
    Priority,
    CompanyName,
    CreatedAt,
    Status,
}

impl LeadSortField {
    pub fn next(&self) -> Self {
        match self {
            Self::Priority => Self::CompanyName,
            Self::CompanyName => Self::CreatedAt,
            Self::CreatedAt => Self::Status,
            Self::Status => Self::Priority,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::CompanyName => "Company",
            Self::CreatedAt => "Created",
            Self::Status => "Status",
        }
    }
}

/// Sort field for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSortField {
    #[default]
    OrderDate,
    Amount,
    Status,
}

impl OrderSortField {
    pub fn next(&self) -> Self {
        match self {
            Self::OrderDate => Self::Amount,
            Self::Amount => Self::Status,
            Self::Status => Self::OrderDate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OrderDate => "Date",
            Self::Amount => "Amount",
            Self::Status => "Status",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Data (loaded from the injected store)
    pub leads: Vec<Lead>,
    pub quotes: Vec<Quote>,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub profiles: Vec<BusinessProfile>,
    pub tickets: Vec<SupportTicket>,

    // Selection
    pub selected_index: usize,
    pub selected_profile_id: Option<String>,

    // Sorting
    pub lead_sort_field: LeadSortField,
    pub lead_sort_direction: SortDirection,
    pub order_sort_field: OrderSortField,
    pub order_sort_direction: SortDirection,

    // Filters
    pub show_closed_leads: bool,
    pub show_closed_tickets: bool,

    // UI state
    pub scroll_offset: usize,

    // Wizard state
    pub wizard: Option<FormSession>,
    pub wizard_kind: Option<WizardKind>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Cycle lead sort field
    pub fn cycle_lead_sort_field(&mut self) {
        self.lead_sort_field = self.lead_sort_field.next();
        self.reset_selection();
    }

    /// Toggle lead sort direction
    pub fn toggle_lead_sort_direction(&mut self) {
        self.lead_sort_direction = self.lead_sort_direction.toggle();
        self.reset_selection();
    }

    /// Cycle order sort field
    pub fn cycle_order_sort_field(&mut self) {
        self.order_sort_field = self.order_sort_field.next();
        self.reset_selection();
    }

    /// Toggle order sort direction
    pub fn toggle_order_sort_direction(&mut self) {
        self.order_sort_direction = self.order_sort_direction.toggle();
        self.reset_selection();
    }

    /// Get sorted, filtered leads
    pub fn sorted_leads(&self) -> Vec<&Lead> {
        let mut leads: Vec<_> = self
            .leads
            .iter()
            .filter(|l| {
                self.show_closed_leads
                    || !matches!(l.status, LeadStatus::Converted | LeadStatus::Lost)
            })
            .collect();

        leads.sort_by(|a, b| {
            let cmp = match self.lead_sort_field {
                LeadSortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
                LeadSortField::CompanyName => a.company_name.cmp(&b.company_name),
                LeadSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                LeadSortField::Status => a.status.label().cmp(b.status.label()),
            };

            match self.lead_sort_direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });

        leads
    }

    /// Get sorted orders
    pub fn sorted_orders(&self) -> Vec<&Order> {
        let mut orders: Vec<_> = self.orders.iter().collect();

        orders.sort_by(|a, b| {
            let cmp = match self.order_sort_field {
                OrderSortField::OrderDate => a.order_date.cmp(&b.order_date),
                OrderSortField::Amount => a
                    .total_amount
                    .partial_cmp(&b.total_amount)
                    .unwrap_or(std::cmp::Ordering::Equal),
                OrderSortField::Status => a.status.label().cmp(b.status.label()),
            };

            match self.order_sort_direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });

        orders
    }

    /// Get filtered tickets, newest first
    pub fn visible_tickets(&self) -> Vec<&SupportTicket> {
        let mut tickets: Vec<_> = self
            .tickets
            .iter()
            .filter(|t| {
                self.show_closed_tickets
                    || !matches!(t.status, TicketStatus::Resolved | TicketStatus::Closed)
            })
            .collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets
    }

    /// Selected customer profile, if any
    pub fn selected_profile(&self) -> Option<&BusinessProfile> {
        let id = self.selected_profile_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Orders belonging to one customer
    pub fn orders_for(&self, profile_id: &str) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.profile_id == profile_id)
            .cloned()
            .collect()
    }

    /// Payments of one kind belonging to one customer
    pub fn payments_for(
        &self,
        profile_id: &str,
        kind: crate::state::records::PaymentKind,
    ) -> Vec<Payment> {
        self.payments
            .iter()
            .filter(|p| p.profile_id == profile_id && p.kind == kind)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::LeadPriority;
    use chrono::{Duration, Utc};

    fn lead(id: &str, company: &str, priority: LeadPriority, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            company_name: company.to_string(),
            contact_person: "test".to_string(),
            phone: "9876543210".to_string(),
            city: "Surat".to_string(),
            fabric_interest: "cotton".to_string(),
            priority,
            status,
            business_profile_id: None,
            created_at: Utc::now() - Duration::days(1),
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_move_selection_down_respects_max() {
            let mut state = AppState::default();
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_move_selection_down_empty_list_is_noop() {
            let mut state = AppState::default();
            state.move_selection_down(0);
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_move_selection_up_stops_at_zero() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_reset_selection_clears_scroll() {
            let mut state = AppState::default();
            state.selected_index = 3;
            state.scroll_offset = 5;
            state.reset_selection();
            assert_eq!(state.selected_index, 0);
            assert_eq!(state.scroll_offset, 0);
        }
    }

    mod lead_sorting {
        use super::*;

        #[test]
        fn test_default_sort_puts_hot_leads_first() {
            let mut state = AppState::default();
            state.leads = vec![
                lead("l1", "Cold Co", LeadPriority::Cold, LeadStatus::New),
                lead("l2", "Hot Co", LeadPriority::Hot, LeadStatus::New),
                lead("l3", "Warm Co", LeadPriority::Warm, LeadStatus::New),
            ];

            let sorted = state.sorted_leads();
            assert_eq!(sorted[0].company_name, "Hot Co");
            assert_eq!(sorted[1].company_name, "Warm Co");
            assert_eq!(sorted[2].company_name, "Cold Co");
        }

        #[test]
        fn test_closed_leads_hidden_by_default() {
            let mut state = AppState::default();
            state.leads = vec![
                lead("l1", "Open", LeadPriority::Hot, LeadStatus::New),
                lead("l2", "Won", LeadPriority::Hot, LeadStatus::Converted),
                lead("l3", "Gone", LeadPriority::Hot, LeadStatus::Lost),
            ];

            assert_eq!(state.sorted_leads().len(), 1);
            state.show_closed_leads = true;
            assert_eq!(state.sorted_leads().len(), 3);
        }

        #[test]
        fn test_sort_direction_reverses_order() {
            let mut state = AppState::default();
            state.leads = vec![
                lead("l1", "Alpha", LeadPriority::Hot, LeadStatus::New),
                lead("l2", "Beta", LeadPriority::Cold, LeadStatus::New),
            ];
            state.lead_sort_field = LeadSortField::CompanyName;
            state.lead_sort_direction = SortDirection::Desc;

            let sorted = state.sorted_leads();
            assert_eq!(sorted[0].company_name, "Beta");
        }

        #[test]
        fn test_cycle_sort_field_resets_selection() {
            let mut state = AppState::default();
            state.selected_index = 4;
            state.cycle_lead_sort_field();
            assert_eq!(state.selected_index, 0);
            assert_eq!(state.lead_sort_field, LeadSortField::CompanyName);
        }
    }

    mod view {
        use super::*;

        #[test]
        fn test_default_view_is_dashboard() {
            assert_eq!(View::default(), View::Dashboard);
        }

        #[test]
        fn test_form_views_flagged() {
            assert!(View::ProfileWizard.is_form_view());
            assert!(View::TicketCreate.is_form_view());
            assert!(!View::Leads.is_form_view());
        }
    }
}
