//! Core data models for the ledger

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// 1-based position in the ledger at creation time
    pub id: u64,
    /// Input text as received, trimmed
    #[serde(rename = "text")]
    pub raw_text: String,
    /// Description extracted from the text
    pub item: String,
    /// First number in the text
    pub amount: f64,
    /// Creation time (ISO-8601, process-local offset)
    pub timestamp: DateTime<Local>,
}

impl ExpenseRecord {
    /// Time of day as `HH:MM`
    pub fn time_of_day(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
