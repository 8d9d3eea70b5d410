//! The name/email form

use super::field_renderer::{
    draw_field, draw_field_error, draw_help_text, ERROR_HEIGHT, FIELD_HEIGHT,
};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldDisplay, FormFocus, SimpleInputForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Submit button width including borders
const SUBMIT_WIDTH: u16 = 22;

/// Draw the form: one input + error row per active field, then submit
pub fn draw_simple_input(frame: &mut Frame, area: Rect, app: &App) {
    let form: &SimpleInputForm = &app.state.form;
    let fields = form.active_fields();

    let block = Block::default()
        .title(" Simple Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = Vec::with_capacity(fields.len() * 2 + 3);
    for _ in fields {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0)); // Padding
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (idx, &id) in fields.iter().enumerate() {
        let field = form.field(id);
        let is_active = app.state.is_focused(FormFocus::Field(id));
        let error = match form.display(id) {
            FieldDisplay::Invalid(err) => Some(err),
            FieldDisplay::Pristine | FieldDisplay::Valid => None,
        };
        draw_field(
            frame,
            chunks[idx * 2],
            id,
            field,
            is_active,
            form.shows_error(id),
        );
        draw_field_error(frame, chunks[idx * 2 + 1], error);
    }

    let button_row = chunks[fields.len() * 2];
    let button_area = Rect {
        width: button_row.width.min(SUBMIT_WIDTH),
        ..button_row
    };
    render_button(
        frame,
        button_area,
        "Submit",
        app.state.is_focused(FormFocus::Submit),
        form.is_form_valid(),
    );

    draw_help_text(
        frame,
        chunks[fields.len() * 2 + 2],
        &[
            ("Tab", "next"),
            ("Enter", "submit"),
            (SUBMIT_SHORTCUT, "submit"),
            ("Esc", "blur"),
            ("Ctrl+C", "quit"),
        ],
    );
}
