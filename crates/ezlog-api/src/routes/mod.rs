//! Route modules for the API server
//!
//! - entry: expense logging (JSON) and the test form
//! - expenses: expense table, JSON listing, clear
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints
//! - page.rs: HTML page rendering

pub mod expenses;
pub mod entry;
