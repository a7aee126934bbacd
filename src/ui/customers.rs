//! Customer list and 360° detail view

use crate::app::App;
use crate::metrics::{
    classify_growth, classify_risk, compute_customer_insights, format_inr, recommendations,
    GrowthTrend, RiskTier,
};
use crate::state::PaymentKind;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .profiles
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<30}", p.company_name.clone()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " {} · {} · {} orders · ",
                    p.contact_person, p.address.city, p.total_orders
                )),
                Span::styled(
                    format_inr(p.total_business_value),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let title = format!(" Customers ({}) ", app.state.profiles.len());
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
    if !app.state.profiles.is_empty() {
        state.select(Some(
            app.state.selected_index.min(app.state.profiles.len() - 1),
        ));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Customer 360°: identity, computed insights, recommendations.
/// The insight snapshot is recomputed on every render.
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(profile) = app.state.selected_profile() else {
        let message = Paragraph::new("Customer not found. Press Esc to go back.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Customer ").borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    };

    let orders = app.state.orders_for(&profile.id);
    let advances = app.state.payments_for(&profile.id, PaymentKind::Advance);
    let finals = app.state.payments_for(&profile.id, PaymentKind::Final);
    let insights =
        compute_customer_insights(&orders, &advances, &finals, profile.credit_limit, Utc::now());
    let risk = classify_risk(&insights);
    let growth = classify_growth(insights.yoy_growth_pct);

    let risk_color = match risk {
        RiskTier::Low => Color::Green,
        RiskTier::Medium => Color::Yellow,
        RiskTier::High => Color::Red,
    };
    let growth_color = match growth {
        GrowthTrend::HighGrowth | GrowthTrend::Growing => Color::Green,
        GrowthTrend::Stable => Color::Yellow,
        GrowthTrend::Declining => Color::Red,
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                profile.company_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", profile.status.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("  [{}]", risk.label()), Style::default().fg(risk_color)),
            Span::styled(
                format!("  [{}]", growth.label()),
                Style::default().fg(growth_color),
            ),
        ]),
        Line::from(format!(
            "{} · {} · {}",
            profile.contact_person, profile.phone, profile.email
        )),
        Line::from(format!(
            "GSTIN {}  PAN {}{}",
            profile.gstin,
            profile.pan,
            profile
                .secondary_gstin
                .as_deref()
                .map(|g| format!("  Branch GSTIN {g}"))
                .unwrap_or_default()
        )),
        Line::from(format!(
            "{}, {}, {} - {}",
            profile.address.street, profile.address.city, profile.address.state,
            profile.address.pincode
        )),
        Line::from(format!("Terms: {}", profile.payment_terms)),
        Line::from(""),
        Line::from(Span::styled(
            "Business",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        metric("Total order value", format_inr(insights.total_order_value)),
        metric("Paid", format_inr(insights.total_paid)),
        metric("Outstanding", format_inr(insights.outstanding)),
        metric(
            "Orders",
            format!(
                "{} active, {} completed",
                insights.active_orders, insights.completed_orders
            ),
        ),
        metric(
            "Average order",
            format_inr(insights.average_order_value),
        ),
        metric(
            "Payment reliability",
            format!("{:.0}%", insights.payment_reliability_pct),
        ),
        metric(
            "YoY growth",
            format!("{:+.1}%", insights.yoy_growth_pct),
        ),
        metric(
            "Order cadence",
            format!("every {:.0} days", insights.average_days_between_orders),
        ),
        metric(
            "Credit used",
            format!(
                "{:.0}% of {}",
                insights.credit_utilization_pct,
                format_inr(profile.credit_limit)
            ),
        ),
    ];

    let recs = recommendations(&insights, risk);
    if !recs.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Recommendations",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for rec in recs {
            lines.push(Line::from(vec![
                Span::styled("  → ", Style::default().fg(Color::Cyan)),
                Span::raw(rec),
            ]));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0))
        .block(
            Block::default()
                .title(" Customer 360° ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(panel, area);
}

fn metric(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<22}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}
