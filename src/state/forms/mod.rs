//! Form domain layer
//!
//! Field values, validation predicates and the submission state machine.

mod field;
mod form_state;
mod validation;

pub use field::{FieldDisplay, FieldId, FieldState};
pub use form_state::{FormFocus, SimpleInputForm, Submission, SubmitOutcome};
pub use validation::FieldError;
