//! Order book view

use crate::app::App;
use crate::metrics::format_inr;
use crate::state::{Order, OrderStatus, PaymentStatus};
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

    let header = Line::from(vec![
        Span::styled(" Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "{} {}",
                app.state.order_sort_field.label(),
                app.state.order_sort_direction.symbol()
            ),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let orders = app.state.sorted_orders();
    let items: Vec<ListItem> = orders
        .iter()
        .map(|order| order_item(order, app))
        .collect();

    let title = format!(" Orders ({}) ", orders.len());
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
    if !orders.is_empty() {
        state.select(Some(app.state.selected_index.min(orders.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn order_item(order: &Order, app: &App) -> ListItem<'static> {
    let customer = app
        .state
        .profiles
        .iter()
        .find(|p| p.id == order.profile_id)
        .map(|p| p.company_name.clone())
        .unwrap_or_else(|| order.profile_id.clone());

    let status_color = match order.status {
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Cancelled => Color::DarkGray,
        _ => Color::Yellow,
    };
    let payment_color = match order.payment_status {
        PaymentStatus::Overdue => Color::Red,
        PaymentStatus::Pending => Color::Yellow,
        _ => Color::Green,
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<28}", customer),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} · {:.0} m · ",
            order.fabric, order.quantity_meters
        )),
        Span::styled(
            format_inr(order.total_amount),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("  [{}]", order.status.label()),
            Style::default().fg(status_color),
        ),
        Span::styled(
            format!(" [pay: {}]", order.payment_status.label()),
            Style::default().fg(payment_color),
        ),
        Span::styled(
            format!("  {}", order.order_date.format("%d %b %Y")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}
