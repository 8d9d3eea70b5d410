//! Form state and the submission state machine

use super::field::{FieldDisplay, FieldId, FieldState};
use super::validation::FieldError;
use serde::Serialize;

/// Values handed to the submission sink, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form was valid; fields have been reset and these are the pre-reset values
    Accepted(Submission),
    /// Form was invalid; every active field is now touched and values are kept
    Rejected(Vec<(FieldId, FieldError)>),
}

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldId),
    Submit,
}

/// The name/email form.
///
/// Validity is never stored. Every query recomputes it from the current
/// values, so the UI can't drift out of sync with what was typed.
#[derive(Debug, Clone)]
pub struct SimpleInputForm {
    name: FieldState,
    email: FieldState,
    collect_email: bool,
}

impl SimpleInputForm {
    pub fn new(collect_email: bool) -> Self {
        Self {
            name: FieldState::default(),
            email: FieldState::default(),
            collect_email,
        }
    }

    /// Fields that participate in rendering and validity
    pub fn active_fields(&self) -> &'static [FieldId] {
        if self.collect_email {
            &[FieldId::Name, FieldId::Email]
        } else {
            &[FieldId::Name]
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
        }
    }

    /// Input event: replace the value, leave `touched` alone
    pub fn on_change(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).set_value(value.into());
    }

    /// Blur event: mark touched
    pub fn on_blur(&mut self, id: FieldId) {
        self.field_mut(id).touch();
    }

    /// Submit event.
    ///
    /// Touches every active field first so errors become visible even for
    /// fields the user never visited. On success the values are captured,
    /// then the form resets.
    pub fn on_submit_attempt(&mut self) -> SubmitOutcome {
        for &id in self.active_fields() {
            self.field_mut(id).touch();
        }

        let errors = self.errors();
        if !errors.is_empty() {
            return SubmitOutcome::Rejected(errors);
        }

        let submission = Submission {
            name: self.name.value.clone(),
            email: self.collect_email.then(|| self.email.value.clone()),
        };
        self.reset();
        SubmitOutcome::Accepted(submission)
    }

    /// All fields back to empty and untouched
    pub fn reset(&mut self) {
        self.name.reset();
        self.email.reset();
    }

    pub fn is_valid(&self, id: FieldId) -> bool {
        id.validate(&self.field(id).value).is_ok()
    }

    /// Conjunction of every active field's validity
    pub fn is_form_valid(&self) -> bool {
        self.active_fields().iter().all(|&id| self.is_valid(id))
    }

    /// Error indicator is visible iff touched and invalid
    pub fn shows_error(&self, id: FieldId) -> bool {
        matches!(self.display(id), FieldDisplay::Invalid(_))
    }

    pub fn display(&self, id: FieldId) -> FieldDisplay {
        self.field(id).display(id)
    }

    /// Current validation errors of active fields, touched or not
    pub fn errors(&self) -> Vec<(FieldId, FieldError)> {
        self.active_fields()
            .iter()
            .filter_map(|&id| {
                id.validate(&self.field(id).value)
                    .err()
                    .map(|err| (id, err))
            })
            .collect()
    }

    /// Tab order: each active field, then the submit button
    pub fn focus_order(&self) -> Vec<FormFocus> {
        self.active_fields()
            .iter()
            .map(|&id| FormFocus::Field(id))
            .chain(std::iter::once(FormFocus::Submit))
            .collect()
    }

    /// Focus after `current`, wrapping around
    pub fn next_focus(&self, current: Option<FormFocus>) -> FormFocus {
        let order = self.focus_order();
        match current.and_then(|f| order.iter().position(|&o| o == f)) {
            Some(idx) => order[(idx + 1) % order.len()],
            None => order[0],
        }
    }

    /// Focus before `current`, wrapping around
    pub fn prev_focus(&self, current: Option<FormFocus>) -> FormFocus {
        let order = self.focus_order();
        match current.and_then(|f| order.iter().position(|&o| o == f)) {
            Some(0) | None => order[order.len() - 1],
            Some(idx) => order[idx - 1],
        }
    }
}

impl Default for SimpleInputForm {
    fn default() -> Self {
        Self::new(true)
    }
}
