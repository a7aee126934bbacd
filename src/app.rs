//! Application logic: navigation, key handling, wizard submission

use crate::config::TuiConfig;
use crate::state::forms::{
    business_profile_steps, support_ticket_steps, Advance, FormSession, SubmissionState,
};
use crate::state::{
    AppState, BusinessProfile, LeadSortField, LeadStatus, OrderSortField, SortDirection,
    SupportTicket, View, WizardKind,
};
use crate::store::{CrmStore, InMemoryStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application
pub struct App {
    pub store: Box<dyn CrmStore>,
    pub state: AppState,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    quit: bool,
}

impl App {
    /// Create the app backed by the seeded demo store
    pub async fn new() -> Result<Self> {
        Self::with_store(Box::new(InMemoryStore::seeded())).await
    }

    /// Create the app with an injected store
    pub async fn with_store(store: Box<dyn CrmStore>) -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let mut state = AppState::default();
        state.show_closed_leads = config.show_closed_leads.unwrap_or(false);
        state.show_closed_tickets = config.show_closed_tickets.unwrap_or(false);
        state.lead_sort_field = parse_lead_sort(config.lead_sort_field.as_deref());
        state.lead_sort_direction = parse_direction(config.lead_sort_direction.as_deref());
        state.order_sort_field = parse_order_sort(config.order_sort_field.as_deref());
        state.order_sort_direction = parse_direction(config.order_sort_direction.as_deref());

        let mut app = Self {
            store,
            state,
            status_message: None,
            error_message: None,
            quit: false,
        };
        app.refresh_all().await?;
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Reload all collections from the store
    pub async fn refresh_all(&mut self) -> Result<()> {
        self.state.leads = self.store.load_leads().await?;
        self.state.quotes = self.store.load_quotes().await?;
        self.state.orders = self.store.load_orders().await?;
        self.state.payments = self.store.load_payments().await?;
        self.state.profiles = self.store.load_profiles().await?;
        self.state.tickets = self.store.load_tickets().await?;
        Ok(())
    }

    /// Navigate to a view, recording history
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view.clone());
        self.state.current_view = view;
        self.state.reset_selection();
    }

    /// Navigate back, skipping form views
    pub fn go_back(&mut self) {
        self.state.reset_selection();
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            return;
        }
        self.state.current_view = View::Dashboard;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;

        let in_wizard = self.state.wizard.is_some();

        // Global quit and view switching stay out of the wizard's way
        if !in_wizard {
            if key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                self.save_config();
                self.quit = true;
                return Ok(());
            }
            match key.code {
                KeyCode::Char('1') => {
                    self.navigate(View::Dashboard);
                    return Ok(());
                }
                KeyCode::Char('2') => {
                    self.navigate(View::Leads);
                    return Ok(());
                }
                KeyCode::Char('3') => {
                    self.navigate(View::Customers);
                    return Ok(());
                }
                KeyCode::Char('4') => {
                    self.navigate(View::Orders);
                    return Ok(());
                }
                KeyCode::Char('5') => {
                    self.navigate(View::Tickets);
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.state.current_view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Leads => self.handle_leads_key(key).await?,
            View::Customers => self.handle_customers_key(key),
            View::CustomerDetail => self.handle_customer_detail_key(key),
            View::Orders => self.handle_orders_key(key),
            View::Tickets => self.handle_tickets_key(key),
            View::ProfileWizard | View::TicketCreate => self.handle_wizard_key(key).await?,
        }
        Ok(())
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('j') | KeyCode::Down = key.code {
            self.state.scroll_down();
        } else if let KeyCode::Char('k') | KeyCode::Up = key.code {
            self.state.scroll_up();
        }
    }

    async fn handle_leads_key(&mut self, key: KeyEvent) -> Result<()> {
        let visible = self.state.sorted_leads().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(visible),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('s') => self.state.cycle_lead_sort_field(),
            KeyCode::Char('S') => self.state.toggle_lead_sort_direction(),
            KeyCode::Char('a') => {
                self.state.show_closed_leads = !self.state.show_closed_leads;
                self.state.reset_selection();
            }
            KeyCode::Enter | KeyCode::Char('c') => self.open_profile_wizard(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    fn handle_customers_key(&mut self, key: KeyEvent) {
        let count = self.state.profiles.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                if let Some(profile) = self.state.profiles.get(self.state.selected_index) {
                    self.state.selected_profile_id = Some(profile.id.clone());
                    self.navigate(View::CustomerDetail);
                }
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_customer_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_orders_key(&mut self, key: KeyEvent) {
        let count = self.state.orders.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('s') => self.state.cycle_order_sort_field(),
            KeyCode::Char('S') => self.state.toggle_order_sort_direction(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_tickets_key(&mut self, key: KeyEvent) {
        let visible = self.state.visible_tickets().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(visible),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('a') => {
                self.state.show_closed_tickets = !self.state.show_closed_tickets;
                self.state.reset_selection();
            }
            KeyCode::Char('n') => self.open_ticket_wizard(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Open the profile wizard for the selected lead, prefilled from it
    fn open_profile_wizard(&mut self) {
        let Some(lead) = self
            .state
            .sorted_leads()
            .get(self.state.selected_index)
            .map(|l| (*l).clone())
        else {
            return;
        };
        if lead.status == LeadStatus::Converted {
            self.status_message = Some("Lead is already converted".to_string());
            return;
        }

        let mut session = FormSession::new(business_profile_steps());
        session.update_field("company_name", lead.company_name);
        session.update_field("contact_person", lead.contact_person);
        session.update_field("phone", lead.phone);

        self.state.wizard_kind = Some(WizardKind::Profile { lead_id: lead.id });
        self.state.wizard = Some(session);
        self.navigate(View::ProfileWizard);
    }

    fn open_ticket_wizard(&mut self) {
        self.state.wizard_kind = Some(WizardKind::Ticket);
        self.state.wizard = Some(FormSession::new(support_ticket_steps()));
        self.navigate(View::TicketCreate);
    }

    /// Discard the wizard session entirely
    fn close_wizard(&mut self) {
        self.state.wizard = None;
        self.state.wizard_kind = None;
    }

    async fn handle_wizard_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(session) = self.state.wizard.as_mut() else {
            self.go_back();
            return Ok(());
        };

        // No edits or navigation while a submission is in flight
        if session.submission() == SubmissionState::Submitting {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                if session.current_step() > 0 {
                    session.retreat();
                } else {
                    self.close_wizard();
                    self.go_back();
                    self.status_message = Some("Cancelled".to_string());
                }
            }
            KeyCode::Tab | KeyCode::Down => session.next_field(),
            KeyCode::BackTab | KeyCode::Up => session.prev_field(),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Enter => {
                // Enter types a newline inside multiline fields; Ctrl+W
                // advances from anywhere
                if session.active_spec().multiline {
                    session.input_char('\n');
                } else if session.advance() == Advance::Submit {
                    self.submit_wizard().await;
                }
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if session.advance() == Advance::Submit {
                    self.submit_wizard().await;
                }
            }
            KeyCode::Char(c) => session.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Persist sort and filter preferences; failure is not fatal
    fn save_config(&self) {
        let config = TuiConfig {
            lead_sort_field: Some(self.state.lead_sort_field.label().to_lowercase()),
            lead_sort_direction: Some(direction_name(self.state.lead_sort_direction).to_string()),
            order_sort_field: Some(self.state.order_sort_field.label().to_lowercase()),
            order_sort_direction: Some(
                direction_name(self.state.order_sort_direction).to_string(),
            ),
            show_closed_leads: Some(self.state.show_closed_leads),
            show_closed_tickets: Some(self.state.show_closed_tickets),
        };
        if let Err(e) = config.save() {
            tracing::warn!("failed to save config: {e}");
        }
    }

    /// Run the terminal submission for whichever wizard is open
    async fn submit_wizard(&mut self) {
        match self.state.wizard_kind.clone() {
            Some(WizardKind::Profile { lead_id }) => self.submit_profile(lead_id).await,
            Some(WizardKind::Ticket) => self.submit_ticket().await,
            None => {}
        }
    }

    /// Construct the profile from accumulated fields, append it, then link
    /// the originating lead. Construction happens before any collection
    /// mutation, so a failure leaves nothing to roll back.
    async fn submit_profile(&mut self, lead_id: String) {
        let Some(session) = self.state.wizard.as_ref() else {
            return;
        };
        let profile = BusinessProfile::from_fields(session.fields());
        let company = profile.company_name.clone();

        let linked = match self.store.append_profile(profile).await {
            Ok(id) => self
                .store
                .link_profile_to_lead(&lead_id, &id)
                .await
                .map(|_| id),
            Err(e) => Err(e),
        };

        match linked {
            Ok(id) => {
                if let Some(session) = self.state.wizard.as_mut() {
                    session.mark_succeeded();
                }
                if let Err(e) = self.refresh_all().await {
                    tracing::warn!("refresh after profile creation failed: {e}");
                }
                self.close_wizard();
                self.state.selected_profile_id = Some(id);
                self.navigate(View::CustomerDetail);
                self.status_message = Some(format!("Customer profile created for {company}"));
            }
            Err(e) => {
                tracing::warn!("profile submission failed: {e}");
                if let Some(session) = self.state.wizard.as_mut() {
                    session.mark_failed(e.to_string());
                }
                self.error_message = Some(format!("Could not create profile: {e}"));
            }
        }
    }

    async fn submit_ticket(&mut self) {
        let Some(session) = self.state.wizard.as_ref() else {
            return;
        };
        let ticket = SupportTicket::from_fields(session.fields());

        match self.store.append_ticket(ticket).await {
            Ok(id) => {
                if let Some(session) = self.state.wizard.as_mut() {
                    session.mark_succeeded();
                }
                if let Err(e) = self.refresh_all().await {
                    tracing::warn!("refresh after ticket creation failed: {e}");
                }
                self.close_wizard();
                self.navigate(View::Tickets);
                self.status_message = Some(format!("Ticket {id} created"));
            }
            Err(e) => {
                tracing::warn!("ticket submission failed: {e}");
                if let Some(session) = self.state.wizard.as_mut() {
                    session.mark_failed(e.to_string());
                }
                self.error_message = Some(format!("Could not create ticket: {e}"));
            }
        }
    }
}

fn parse_lead_sort(name: Option<&str>) -> LeadSortField {
    match name {
        Some("company") => LeadSortField::CompanyName,
        Some("created") => LeadSortField::CreatedAt,
        Some("status") => LeadSortField::Status,
        _ => LeadSortField::Priority,
    }
}

fn parse_order_sort(name: Option<&str>) -> OrderSortField {
    match name {
        Some("amount") => OrderSortField::Amount,
        Some("status") => OrderSortField::Status,
        _ => OrderSortField::OrderDate,
    }
}

fn parse_direction(name: Option<&str>) -> SortDirection {
    match name {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    }
}

fn direction_name(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    }
}
