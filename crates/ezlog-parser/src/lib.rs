//! Free-text expense parser
//!
//! Turns entries like `"coffee 5"` into an amount and an item description.

use std::sync::Arc;

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::parse_expense;
pub use types::{ParsedExpense, UNKNOWN_ITEM};

// ==================== Parser Trait ====================

/// Parser reference type
pub type ParserRef = Arc<dyn ExpenseParser>;

/// Trait for expense text parsers
pub trait ExpenseParser: Send + Sync {
    /// Parse one free-text entry
    fn parse(&self, text: &str) -> Result<ParsedExpense, ParseError>;
}

/// Default parser implementation
#[derive(Debug, Default)]
pub struct DefaultExpenseParser;

impl ExpenseParser for DefaultExpenseParser {
    fn parse(&self, text: &str) -> Result<ParsedExpense, ParseError> {
        parse_expense(text)
    }
}
