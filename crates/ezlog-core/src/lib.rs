//! Core ledger processing and business logic
//!
//! The [`Ledger`] is an append-only, in-memory list of [`ExpenseRecord`]s.
//! Record ids always equal their 1-based position, so `clear` restarts
//! numbering at 1.

pub mod error;
pub mod models;

use chrono::{DateTime, Local};
use ezlog_parser::{DefaultExpenseParser, ParserRef};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use models::ExpenseRecord;

/// Main ledger structure
pub struct Ledger {
    parser: ParserRef,
    records: Vec<ExpenseRecord>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Arc::new(DefaultExpenseParser))
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl Ledger {
    /// Create an empty ledger using the given parser
    pub fn new(parser: ParserRef) -> Self {
        Self {
            parser,
            records: Vec::new(),
        }
    }

    /// Parse `raw_text` and append it as a new record stamped with the current time
    pub fn append(&mut self, raw_text: &str) -> CoreResult<ExpenseRecord> {
        self.append_at(raw_text, Local::now())
    }

    /// Parse `raw_text` and append it with an explicit timestamp
    pub fn append_at(&mut self, raw_text: &str, timestamp: DateTime<Local>) -> CoreResult<ExpenseRecord> {
        let parsed = self.parser.parse(raw_text)?;

        let record = ExpenseRecord {
            id: self.records.len() as u64 + 1,
            raw_text: raw_text.trim().to_string(),
            item: parsed.item,
            amount: parsed.amount,
            timestamp,
        };
        self.records.push(record.clone());

        log::debug!("Ledger now holds {} records", self.records.len());
        Ok(record)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Records from the most recent to the oldest
    pub fn newest_first(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter().rev()
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record; the next append gets id 1
    pub fn clear(&mut self) {
        let removed = self.records.len();
        self.records.clear();
        log::info!("Cleared {} expenses", removed);
    }
}

// ==================== Ledger Operations ====================

/// Ledger operations trait
pub trait LedgerOperations {
    /// Get ledger summary
    fn summary(&self) -> LedgerSummary;
}

/// Ledger summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub count: usize,
    pub total: f64,
}

impl LedgerOperations for Ledger {
    fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            count: self.len(),
            total: self.total(),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ezlog_parser::{ExpenseParser, ParseError, ParsedExpense};

    #[test]
    fn test_append_coffee() {
        let mut ledger = Ledger::default();
        let record = ledger.append("coffee 5").unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.item, "coffee");
        assert_eq!(record.amount, 5.0);
        assert_eq!(record.raw_text, "coffee 5");
        assert_eq!(ledger.records(), &[record]);
    }

    #[test]
    fn test_append_number_only() {
        let mut ledger = Ledger::default();
        let record = ledger.append("5").unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.item, "Unknown");
        assert_eq!(record.amount, 5.0);
    }

    #[test]
    fn test_append_empty_rejected() {
        let mut ledger = Ledger::default();

        assert!(matches!(ledger.append(""), Err(CoreError::EmptyInput)));
        assert!(matches!(ledger.append("   "), Err(CoreError::EmptyInput)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_raw_text_is_trimmed() {
        let mut ledger = Ledger::default();
        let record = ledger.append("  tea 3 \n").unwrap();
        assert_eq!(record.raw_text, "tea 3");
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ledger = Ledger::default();
        for n in 1..=5 {
            let record = ledger.append(&format!("item {}", n)).unwrap();
            assert_eq!(record.id, n as u64);
        }

        let ids: Vec<u64> = ledger.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rejected_append_does_not_consume_id() {
        let mut ledger = Ledger::default();
        ledger.append("coffee 5").unwrap();
        assert!(ledger.append(" ").is_err());

        let record = ledger.append("tea 3").unwrap();
        assert_eq!(record.id, 2);
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut ledger = Ledger::default();
        ledger.append("coffee 5").unwrap();
        ledger.append("bagel 3").unwrap();

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);

        let record = ledger.append("tea 3").unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.item, "tea");
    }

    #[test]
    fn test_total_tracks_appends() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.total(), 0.0);

        let mut expected = 0.0;
        for text in ["coffee 5", "lunch 12.5", "note", "bus 2.25"] {
            let record = ledger.append(text).unwrap();
            expected += record.amount;
            assert_eq!(ledger.total(), expected);
        }
        assert_eq!(ledger.total(), 19.75);
    }

    #[test]
    fn test_newest_first() {
        let mut ledger = Ledger::default();
        ledger.append("first 1").unwrap();
        ledger.append("second 2").unwrap();

        let items: Vec<&str> = ledger.newest_first().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["second", "first"]);
    }

    #[test]
    fn test_append_at_keeps_timestamp() {
        let mut ledger = Ledger::default();
        let at = Local.with_ymd_and_hms(2024, 3, 9, 8, 5, 0).unwrap();
        let record = ledger.append_at("coffee 5", at).unwrap();

        assert_eq!(record.timestamp, at);
        assert_eq!(record.time_of_day(), "08:05");
    }

    #[test]
    fn test_summary() {
        let mut ledger = Ledger::default();
        ledger.append("coffee 5").unwrap();
        ledger.append("tea 2.5").unwrap();

        assert_eq!(ledger.summary(), LedgerSummary { count: 2, total: 7.5 });
    }

    #[test]
    fn test_record_json_shape() {
        let mut ledger = Ledger::default();
        let record = ledger.append("coffee 5").unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "coffee 5");
        assert_eq!(json["item"], "coffee");
        assert_eq!(json["amount"], 5.0);
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    struct FailingParser;

    impl ExpenseParser for FailingParser {
        fn parse(&self, _text: &str) -> Result<ParsedExpense, ParseError> {
            Err(ParseError::InvalidAmount { value: "x".to_string() })
        }
    }

    #[test]
    fn test_custom_parser_errors_propagate() {
        let mut ledger = Ledger::new(Arc::new(FailingParser));
        let err = ledger.append("coffee 5").unwrap_err();

        assert!(matches!(err, CoreError::ParseError { .. }));
        assert!(ledger.is_empty());
    }
}
