//! Trait abstraction for the submit callback to enable mocking in tests

use crate::state::Submission;

/// Receives the values of every accepted submission, once per submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn emit(&mut self, submission: &Submission);
}

/// Any closure taking a submission works as a sink
impl<F> SubmissionSink for F
where
    F: FnMut(&Submission),
{
    fn emit(&mut self, submission: &Submission) {
        self(submission)
    }
}
