pub mod form_host;
pub mod schema_form;
