//! Layout components (form area, status bar)

use crate::app::App;
use crate::state::FormFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form gets, including its border
const MAX_FORM_WIDTH: u16 = 60;

/// Split the screen into the form area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Center the form horizontally
    let width = chunks[0].width.min(MAX_FORM_WIDTH);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    (columns[1], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let mut spans = vec![];

    // Form validity indicator
    let validity = if state.form.is_form_valid() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(validity);

    let focus = match state.focus {
        Some(FormFocus::Field(id)) => id.label(),
        Some(FormFocus::Submit) => "Submit",
        None => "no focus",
    };
    spans.push(Span::styled(focus, Style::default().fg(Color::DarkGray)));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("Submitted: {}", state.submission_count),
        Style::default().fg(Color::Blue),
    ));

    if let Some(at) = state.last_submitted_at {
        spans.push(Span::styled(
            format!(" (last {})", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
