//! Default sink that writes submissions to the log

use super::SubmissionSink;
use crate::state::Submission;

/// Logs each submission at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn emit(&mut self, submission: &Submission) {
        match serde_json::to_string(submission) {
            Ok(json) => tracing::info!(submission = %json, "Form submitted"),
            Err(err) => tracing::warn!("Could not serialize submission: {err}"),
        }
    }
}
