//! Support ticket view

use crate::app::App;
use crate::state::{SupportTicket, TicketStatus};
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
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let filter = if app.state.show_closed_tickets {
        "all"
    } else {
        "open only"
    };
    let header = Line::from(vec![
        Span::styled(" Filter: ", Style::default().fg(Color::DarkGray)),
        Span::styled(filter, Style::default().fg(Color::Cyan)),
        Span::styled("  n: new ticket", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let tickets = app.state.visible_tickets();
    let items: Vec<ListItem> = tickets
        .iter()
        .map(|ticket| ticket_item(ticket, app))
        .collect();

    let title = format!(" Tickets ({}) ", tickets.len());
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
    if !tickets.is_empty() {
        state.select(Some(app.state.selected_index.min(tickets.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn ticket_item(ticket: &SupportTicket, app: &App) -> ListItem<'static> {
    let customer = ticket
        .profile_id
        .as_deref()
        .and_then(|id| app.state.profiles.iter().find(|p| p.id == id))
        .map(|p| p.company_name.clone())
        .unwrap_or_else(|| "unlinked".to_string());

    let priority_color = match ticket.priority {
        1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Blue,
    };
    let status_color = match ticket.status {
        TicketStatus::Open => Color::Red,
        TicketStatus::InProgress => Color::Yellow,
        TicketStatus::Resolved | TicketStatus::Closed => Color::Green,
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("[{:<6}] ", ticket.priority_label()),
            Style::default().fg(priority_color),
        ),
        Span::styled(
            format!("{:<34}", ticket.subject.clone()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} · {}", customer, ticket.category)),
        Span::styled(
            format!("  [{}]", ticket.status.label()),
            Style::default().fg(status_color),
        ),
        Span::styled(
            format!("  {}", ticket.created_at.format("%d %b")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}
