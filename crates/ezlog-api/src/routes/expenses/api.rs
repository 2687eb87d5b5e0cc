//! Expenses API endpoints - JSON API

use crate::AppState;
use axum::extract::State;
use axum::Json;
use ezlog_core::{ExpenseRecord, LedgerOperations};
use serde::Serialize;

/// Full ledger listing
#[derive(Debug, Serialize)]
pub struct ExpensesResponse {
    /// Records in insertion order
    pub expenses: Vec<ExpenseRecord>,
    pub count: usize,
    pub total: f64,
}

/// Get all expenses with count and total (JSON API)
pub async fn api_expenses(State(state): State<AppState>) -> Json<ExpensesResponse> {
    let ledger = state.ledger.read().await;
    let summary = ledger.summary();

    Json(ExpensesResponse {
        expenses: ledger.records().to_vec(),
        count: summary.count,
        total: summary.total,
    })
}
