//! # uiform-core
//!
//! Platform-neutral core of uiform: turns a user-authored UI schema into the
//! JSON Schema subset understood by the form renderer, and owns the form
//! session state that reacts to edits, answer changes and submits.
//!
//! ## Quick Start
//!
//! ```rust
//! use uiform_core::compile_text;
//!
//! let schema = compile_text(
//!     r#"[{"jsonKey":"name","uiType":"Input","label":"Name","validate":{"required":true}}]"#,
//! )?;
//! assert_eq!(
//!     serde_json::to_value(&schema)?,
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": {
//!             "name": { "type": "string", "title": "Name", "minLength": 1 }
//!         }
//!     })
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Layout
//!
//! - **ui_schema**: input vocabulary (`UiField`, `UiType`, `Validate`)
//! - **compiled**: output document (`CompiledField`, `Properties`)
//! - **compiler**: the `uiType` rule table and the recursive tree map
//! - **session**: reducer-style form host state
//! - **validate**: answer validation against a compiled schema
//! - **sink**: where submitted answers go

pub mod compiled;
pub mod compiler;
pub mod error;
pub mod session;
pub mod sink;
pub mod ui_schema;
pub mod validate;

pub use compiled::{CompiledField, Properties, SchemaType};
pub use compiler::{
    compile, compile_field, compile_text, parse_ui_schema, parse_ui_schema_value, ChildList,
    UiTypeRule,
};
pub use error::SchemaError;
pub use session::{FormSession, SessionEffect, SessionEvent, SessionOptions, SubmissionState};
pub use sink::{LogSink, SubmissionSink};
pub use ui_schema::{UiField, UiOption, UiType, Validate};
pub use validate::{validate_value, ValidationCode, ValidationError};
