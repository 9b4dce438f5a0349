//! Destinations for submitted answers

use serde_json::Value;
use tracing::info;

/// Receives the answer tree when a form is submitted
pub trait SubmissionSink {
    fn submit(&self, snapshot: &Value);
}

impl<F> SubmissionSink for F
where
    F: Fn(&Value),
{
    fn submit(&self, snapshot: &Value) {
        self(snapshot)
    }
}

/// Logs the snapshot and does nothing else
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, snapshot: &Value) {
        info!("Form data to be sent to the backend: {}", snapshot);
    }
}
