//! Application state definitions

use super::forms::{FieldId, FormFocus, SimpleInputForm};
use chrono::{DateTime, Local};

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SimpleInputForm,
    /// Element with keyboard focus, `None` when nothing is focused
    pub focus: Option<FormFocus>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Number of accepted submissions in this session
    pub submission_count: usize,
    pub last_submitted_at: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new(collect_email: bool) -> Self {
        Self {
            form: SimpleInputForm::new(collect_email),
            focus: Some(FormFocus::Field(FieldId::Name)),
            ..Default::default()
        }
    }

    /// The field under the cursor, if focus is on a field
    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Some(FormFocus::Field(id)) => Some(id),
            _ => None,
        }
    }

    pub fn is_focused(&self, focus: FormFocus) -> bool {
        self.focus == Some(focus)
    }

    /// Move focus, blurring the field that loses it
    pub fn set_focus(&mut self, focus: Option<FormFocus>) {
        if self.focus == focus {
            return;
        }
        if let Some(id) = self.focused_field() {
            self.form.on_blur(id);
        }
        self.focus = focus;
    }

    pub fn next_focus(&mut self) {
        let next = self.form.next_focus(self.focus);
        self.set_focus(Some(next));
    }

    pub fn prev_focus(&mut self) {
        let prev = self.form.prev_focus(self.focus);
        self.set_focus(Some(prev));
    }

    /// Drop focus entirely (blurs the focused field)
    pub fn clear_focus(&mut self) {
        self.set_focus(None);
    }

    /// Type a character into the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(id) = self.focused_field() {
            let mut value = self.form.field(id).value.clone();
            value.push(c);
            self.form.on_change(id, value);
        }
    }

    /// Delete the last character of the focused field
    pub fn form_backspace(&mut self) {
        if let Some(id) = self.focused_field() {
            let mut value = self.form.field(id).value.clone();
            value.pop();
            self.form.on_change(id, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_focuses_name() {
        let state = AppState::new(true);
        assert_eq!(state.focus, Some(FormFocus::Field(FieldId::Name)));
        assert_eq!(state.focused_field(), Some(FieldId::Name));
        assert_eq!(state.submission_count, 0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = AppState::new(true);
        state.form_input_char('A');
        state.form_input_char('d');
        assert_eq!(state.form.field(FieldId::Name).value, "Ad");
        assert_eq!(state.form.field(FieldId::Email).value, "");
        assert!(!state.form.field(FieldId::Name).touched);
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let mut state = AppState::new(true);
        state.form_backspace();
        assert_eq!(state.form.field(FieldId::Name).value, "");
    }

    #[test]
    fn test_typing_without_field_focus_is_ignored() {
        let mut state = AppState::new(true);
        state.set_focus(Some(FormFocus::Submit));
        state.form_input_char('x');
        assert_eq!(state.form.field(FieldId::Name).value, "");
        assert_eq!(state.form.field(FieldId::Email).value, "");
    }

    #[test]
    fn test_leaving_field_blurs_it() {
        let mut state = AppState::new(true);
        state.next_focus();
        assert_eq!(state.focus, Some(FormFocus::Field(FieldId::Email)));
        assert!(state.form.field(FieldId::Name).touched);
        assert!(!state.form.field(FieldId::Email).touched);
        assert!(state.form.shows_error(FieldId::Name));
    }

    #[test]
    fn test_prev_focus_from_name_wraps_to_submit_and_blurs_name() {
        let mut state = AppState::new(true);
        state.prev_focus();
        assert_eq!(state.focus, Some(FormFocus::Submit));
        assert!(state.form.field(FieldId::Name).touched);
    }

    #[test]
    fn test_moving_off_submit_touches_nothing() {
        let mut state = AppState::new(true);
        state.focus = Some(FormFocus::Submit);
        state.next_focus();
        assert_eq!(state.focus, Some(FormFocus::Field(FieldId::Name)));
        assert!(!state.form.field(FieldId::Name).touched);
        assert!(!state.form.field(FieldId::Email).touched);
    }

    #[test]
    fn test_clear_focus_blurs() {
        let mut state = AppState::new(true);
        state.clear_focus();
        assert!(state.focus.is_none());
        assert!(state.form.field(FieldId::Name).touched);
    }

    #[test]
    fn test_set_focus_to_same_element_does_not_blur() {
        let mut state = AppState::new(true);
        state.set_focus(Some(FormFocus::Field(FieldId::Name)));
        assert!(!state.form.field(FieldId::Name).touched);
    }
}
