//! Wizard rendering: step indicator, fields, submission state

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::forms::{FormSession, SubmissionState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the profile wizard
pub fn draw_profile_wizard(frame: &mut Frame, area: Rect, app: &App) {
    draw_wizard(frame, area, app, " New Customer Profile ");
}

/// Draw the ticket creation wizard
pub fn draw_ticket_create(frame: &mut Frame, area: Rect, app: &App) {
    draw_wizard(frame, area, app, " New Support Ticket ");
}

fn draw_wizard(frame: &mut Frame, area: Rect, app: &App, title: &str) {
    let Some(session) = app.state.wizard.as_ref() else {
        let message = Paragraph::new("No form in progress")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let step = session.current();
    let field_count = step.fields.len();

    // Step indicator, fields, submission footer
    let mut constraints = vec![Constraint::Length(2)];
    for spec in &step.fields {
        constraints.push(Constraint::Length(if spec.multiline { 6 } else { 4 }));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    draw_step_indicator(frame, chunks[0], session);

    for (idx, spec) in step.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            session,
            spec,
            idx == session.active_field(),
        );
    }

    draw_submission_footer(frame, chunks[field_count + 2], session);
}

fn draw_step_indicator(frame: &mut Frame, area: Rect, session: &FormSession) {
    let mut spans = Vec::new();
    for index in 0..session.step_count() {
        let title = session.step(index).map(|s| s.title).unwrap_or("");
        let style = if index == session.current_step() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if index < session.current_step() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{}. {}", index + 1, title),
            style,
        ));
        if index + 1 < session.step_count() {
            spans.push(Span::styled(" → ", Style::default().fg(Color::DarkGray)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_submission_footer(frame: &mut Frame, area: Rect, session: &FormSession) {
    let line = match session.submission() {
        SubmissionState::Submitting => Line::from(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionState::Failed => Line::from(Span::styled(
            session
                .submit_error()
                .unwrap_or("Submission failed; press Enter to retry"),
            Style::default().fg(Color::Red),
        )),
        SubmissionState::Succeeded => {
            Line::from(Span::styled("Done", Style::default().fg(Color::Green)))
        }
        SubmissionState::Idle => {
            let action = if session.is_last_step() {
                "Enter: create"
            } else {
                "Enter: next step"
            };
            Line::from(Span::styled(action, Style::default().fg(Color::DarkGray)))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
