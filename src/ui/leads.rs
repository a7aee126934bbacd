//! Lead pipeline view

use crate::app::App;
use crate::state::{Lead, LeadPriority, LeadStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sort / filter header
            Constraint::Min(0),    // List
        ])
        .split(area);

    draw_header(frame, chunks[0], app);

    let leads = app.state.sorted_leads();
    let items: Vec<ListItem> = leads.iter().map(|lead| lead_item(lead)).collect();

    let title = format!(" Leads ({}) ", leads.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !leads.is_empty() {
        state.select(Some(app.state.selected_index.min(leads.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);

    if leads.is_empty() {
        let empty = Paragraph::new("No open leads. Press 'a' to show converted and lost.")
            .style(Style::default().fg(Color::DarkGray));
        let inner = Rect {
            x: chunks[1].x + 2,
            y: chunks[1].y + 1,
            width: chunks[1].width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(empty, inner);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let filter = if app.state.show_closed_leads {
        "all"
    } else {
        "open only"
    };
    let header = Line::from(vec![
        Span::styled(" Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "{} {}",
                app.state.lead_sort_field.label(),
                app.state.lead_sort_direction.symbol()
            ),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  Filter: ", Style::default().fg(Color::DarkGray)),
        Span::styled(filter, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn lead_item(lead: &Lead) -> ListItem<'static> {
    let priority_color = match lead.priority {
        LeadPriority::Hot => Color::Red,
        LeadPriority::Warm => Color::Yellow,
        LeadPriority::Cold => Color::Blue,
    };
    let status_color = match lead.status {
        LeadStatus::Converted => Color::Green,
        LeadStatus::Lost => Color::DarkGray,
        _ => Color::Gray,
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("[{:<4}] ", lead.priority.label()),
            Style::default().fg(priority_color),
        ),
        Span::styled(
            format!("{:<28}", lead.company_name.clone()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} · {} · {}",
            lead.contact_person, lead.city, lead.fabric_interest
        )),
        Span::styled(
            format!("  [{}]", lead.status.label()),
            Style::default().fg(status_color),
        ),
    ]))
}
