//! Application state and core logic

use crate::config::FormConfig;
use crate::sink::{LogSink, SubmissionSink};
use crate::state::{AppState, FieldId, FormFocus, SubmitOutcome};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives accepted submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that logs submissions
    pub fn new(config: &FormConfig) -> Self {
        Self::with_sink(AppState::new(config.collect_email()), Box::new(LogSink))
    }

    pub fn with_sink(state: AppState, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s')
                if ctrl || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit()
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Esc => self.state.clear_focus(),
            KeyCode::Enter => match self.state.focus {
                Some(FormFocus::Field(_)) => self.submit(),
                // A disabled button does nothing
                Some(FormFocus::Submit) if self.state.form.is_form_valid() => self.submit(),
                _ => {}
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Run a submit attempt and hand accepted values to the sink
    pub fn submit(&mut self) {
        match self.state.form.on_submit_attempt() {
            SubmitOutcome::Accepted(submission) => {
                self.sink.emit(&submission);

                let now = Local::now();
                self.state.submission_count += 1;
                self.state.last_submitted_at = Some(now);
                self.state.status_message = Some("Form submitted".to_string());
                // Fields were just reset; move focus without blurring
                self.state.focus = Some(FormFocus::Field(FieldId::Name));
            }
            SubmitOutcome::Rejected(errors) => {
                tracing::debug!("Submission rejected: {} invalid field(s)", errors.len());
            }
        }
    }
}
