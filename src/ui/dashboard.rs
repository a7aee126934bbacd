//! Business dashboard view

use crate::app::App;
use crate::metrics::{compute_dashboard_summary, format_inr, DashboardSummary};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let summary = compute_dashboard_summary(
        &app.state.leads,
        &app.state.quotes,
        &app.state.orders,
        &app.state.profiles,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(0),    // Priorities
        ])
        .split(area);

    draw_cards(frame, chunks[0], &summary);
    draw_priorities(frame, chunks[1], app, &summary);
}

fn draw_cards(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    draw_card(
        frame,
        cards[0],
        "Pipeline",
        vec![
            Line::from(format!("{} leads", summary.total_leads)),
            Line::from(vec![
                Span::styled(
                    format!("{} hot", summary.hot_leads),
                    Style::default().fg(Color::Red),
                ),
                Span::raw(format!(
                    "  {} warm  {} cold",
                    summary.warm_leads, summary.cold_leads
                )),
            ]),
            Line::from(format!("{} quotes sent", summary.quotes_sent)),
        ],
    );

    draw_card(
        frame,
        cards[1],
        "Orders",
        vec![
            Line::from(format!("{} total", summary.total_orders)),
            Line::from(vec![Span::styled(
                format!("{} in progress", summary.active_orders),
                Style::default().fg(Color::Yellow),
            )]),
            Line::from(format!("{} delivered", summary.delivered_orders)),
        ],
    );

    draw_card(
        frame,
        cards[2],
        "Payments",
        vec![
            Line::from(format!("{} pending", summary.payments_pending)),
            Line::from(vec![Span::styled(
                format!("{} overdue", summary.payments_overdue),
                Style::default().fg(Color::Red),
            )]),
        ],
    );

    draw_card(
        frame,
        cards[3],
        "Business",
        vec![
            Line::from(vec![Span::styled(
                format_inr(summary.total_order_value),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(format!("{} customers", summary.total_customers)),
            Line::from(format!("{:.0}% conversion", summary.conversion_rate_pct)),
        ],
    );
}

fn draw_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let card = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}

/// Today's priorities, derived from the same collections
fn draw_priorities(frame: &mut Frame, area: Rect, app: &App, summary: &DashboardSummary) {
    let mut content = vec![Line::from("")];

    if summary.hot_leads > 0 {
        content.push(bullet(
            format!("Follow up {} hot lead(s)", summary.hot_leads),
            Color::Red,
        ));
    }
    if summary.payments_overdue > 0 {
        content.push(bullet(
            format!("Chase {} overdue payment(s)", summary.payments_overdue),
            Color::Red,
        ));
    }
    if summary.quotes_sent > 0 {
        content.push(bullet(
            format!("{} quote(s) awaiting customer response", summary.quotes_sent),
            Color::Yellow,
        ));
    }
    let open_tickets = app.state.visible_tickets().len();
    if open_tickets > 0 {
        content.push(bullet(
            format!("{open_tickets} open support ticket(s)"),
            Color::Yellow,
        ));
    }
    if content.len() == 1 {
        content.push(Line::from(Span::styled(
            "  Nothing urgent. Good day to call dormant customers.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Today's Priorities ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((app.state.scroll_offset as u16, 0));
    frame.render_widget(panel, area);
}

fn bullet(text: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ● ", Style::default().fg(color)),
        Span::raw(text),
    ])
}
