//! Parsed expense types

use serde::{Deserialize, Serialize};

/// Description used when the input carries nothing but numbers and punctuation
pub const UNKNOWN_ITEM: &str = "Unknown";

/// Result of parsing one free-text expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExpense {
    /// First number found in the text, 0.0 when there is none
    pub amount: f64,
    /// Text with every number removed and the edges trimmed
    pub item: String,
}

impl ParsedExpense {
    /// True when no description could be extracted
    pub fn is_unknown_item(&self) -> bool {
        self.item == UNKNOWN_ITEM
    }
}
