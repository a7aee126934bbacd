//! UI rendering module
//!
//! - `components`: shared widgets (buttons)
//! - `layout`: sidebar and status bar
//! - `forms`: profile and ticket wizards
//! - one module per screen

mod components;
mod customers;
mod dashboard;
mod forms;
mod layout;
mod leads;
mod orders;
mod tickets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Draw the complete UI for the current view
pub fn draw(frame: &mut Frame, app: &App) {
    let (sidebar_area, content_area) = layout::create_layout(frame.area());

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Dashboard => dashboard::draw(frame, content_area, app),
        View::Leads => leads::draw_list(frame, content_area, app),
        View::Customers => customers::draw_list(frame, content_area, app),
        View::CustomerDetail => customers::draw_detail(frame, content_area, app),
        View::Orders => orders::draw_list(frame, content_area, app),
        View::Tickets => tickets::draw_list(frame, content_area, app),
        View::ProfileWizard => forms::draw_profile_wizard(frame, content_area, app),
        View::TicketCreate => forms::draw_ticket_create(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
