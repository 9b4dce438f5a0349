//! Schema-Driven Form Rendering
//!
//! Turns a compiled schema into inputs bound to an answer tree. Layout goes
//! through [`FormTemplates`] so hosts can restyle fields without touching
//! values or validation.

pub mod fields;
pub mod generator;
pub mod templates;
pub mod types;

pub use generator::*;
pub use types::*;
