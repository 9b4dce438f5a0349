//! Form session state
//!
//! One [`FormSession`] backs one form host. It is only changed through
//! [`FormSession::apply`], which takes a [`SessionEvent`] and reports what
//! happened as a [`SessionEffect`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::compiled::CompiledField;
use crate::compiler::compile_text;
use crate::error::SchemaError;
use crate::sink::SubmissionSink;

/// Tunables for session behaviour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Return to `NotSubmitted` whenever a new schema compiles
    pub reset_submitted_on_schema_change: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    Submitted,
}

/// Input events a form host reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    RawSchemaTextChanged(String),
    AnswerValuesChanged(Value),
    Submit,
}

/// Outcome of applying one event
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEffect {
    None,
    /// A new compiled schema is active
    Recompiled,
    /// The text did not parse; the previous schema stays active
    ParseFailed(SchemaError),
    /// Snapshot of the answers at submit time
    Submitted(Value),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormSession {
    options: SessionOptions,
    raw_text: String,
    compiled: Option<CompiledField>,
    form_data: Value,
    submission: SubmissionState,
    last_error: Option<SchemaError>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl FormSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            raw_text: String::new(),
            compiled: None,
            form_data: Value::Object(Map::new()),
            submission: SubmissionState::NotSubmitted,
            last_error: None,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> SessionEffect {
        match event {
            SessionEvent::RawSchemaTextChanged(text) => self.on_raw_schema_text_changed(text),
            SessionEvent::AnswerValuesChanged(values) => {
                self.on_answer_values_changed(values);
                SessionEffect::None
            }
            SessionEvent::Submit => SessionEffect::Submitted(self.on_submit()),
        }
    }

    /// Store the text and recompile it. A parse failure is logged and keeps
    /// the previously compiled schema.
    pub fn on_raw_schema_text_changed(&mut self, text: impl Into<String>) -> SessionEffect {
        self.raw_text = text.into();

        match compile_text(&self.raw_text) {
            Ok(schema) => {
                self.compiled = Some(schema);
                self.last_error = None;
                if self.options.reset_submitted_on_schema_change {
                    self.submission = SubmissionState::NotSubmitted;
                }
                SessionEffect::Recompiled
            }
            Err(e) => {
                warn!("Error parsing UI schema: {}", e);
                self.last_error = Some(e.clone());
                SessionEffect::ParseFailed(e)
            }
        }
    }

    /// Replace the answers with the tree the renderer reports
    pub fn on_answer_values_changed(&mut self, values: Value) {
        self.form_data = values;
    }

    /// Mark the form submitted and return a snapshot of the answers
    pub fn on_submit(&mut self) -> Value {
        self.submission = SubmissionState::Submitted;
        self.form_data.clone()
    }

    /// Submit and hand the snapshot to `sink`
    pub fn submit_to(&mut self, sink: &dyn SubmissionSink) {
        let snapshot = self.on_submit();
        info!("Form submitted");
        sink.submit(&snapshot);
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn compiled(&self) -> Option<&CompiledField> {
        self.compiled.as_ref()
    }

    pub fn form_data(&self) -> &Value {
        &self.form_data
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitted(&self) -> bool {
        self.submission == SubmissionState::Submitted
    }

    pub fn last_error(&self) -> Option<&SchemaError> {
        self.last_error.as_ref()
    }
}
