//! Form field value objects

use super::validation::{is_valid_email, is_valid_name, FieldError};

/// Identifies one of the form's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
}

impl FieldId {
    /// Label rendered above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
        }
    }

    /// Check a value against this field's predicate
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Name if is_valid_name(value) => Ok(()),
            Self::Name => Err(FieldError::EmptyName),
            Self::Email if is_valid_email(value) => Ok(()),
            Self::Email => Err(FieldError::InvalidEmail),
        }
    }
}

/// What the UI shows for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDisplay {
    /// Never blurred or submitted; no error shown even if empty
    Pristine,
    Valid,
    Invalid(FieldError),
}

/// Current value and touched flag of a single input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
}

impl FieldState {
    /// Replace the value. Does not touch the field.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Mark the field as interacted with
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Back to `{ "", false }`
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }

    pub fn display(&self, id: FieldId) -> FieldDisplay {
        if !self.touched {
            return FieldDisplay::Pristine;
        }
        match id.validate(&self.value) {
            Ok(()) => FieldDisplay::Valid,
            Err(err) => FieldDisplay::Invalid(err),
        }
    }
}
