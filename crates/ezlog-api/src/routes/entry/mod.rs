//! Entry routes - Free-text expense logging
//!
//! Structure:
//! - api.rs: POST and OPTIONS handlers
//! - page.rs: Test form

pub mod api;
pub mod page;

pub use api::{api_log_expense, api_log_preflight, LogInput, LogResponse};
pub use page::page_log_form;
