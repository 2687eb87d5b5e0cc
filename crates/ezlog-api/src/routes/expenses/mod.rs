//! Expense routes - Ledger table, JSON listing and reset

pub mod api;
pub mod page;

pub use api::{api_expenses, ExpensesResponse};
pub use page::{page_clear, page_expenses};
