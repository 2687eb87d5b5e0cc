//! Free-text expense parser
//!
//! Grammar: a number is `[0-9]+\.?[0-9]*`. The first number in the text is the
//! amount. Every number is removed from the text, and what is left, trimmed of
//! whitespace and `$ , .` at both ends, is the item.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::types::{ParsedExpense, UNKNOWN_ITEM};

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("number pattern is valid"));

fn is_edge_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '$' | ',' | '.')
}

/// Parse one expense entry such as `"coffee 5"` or `"$12.50 lunch"`
pub fn parse_expense(text: &str) -> Result<ParsedExpense, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let amount = match NUMBER_PATTERN.find(text) {
        Some(m) => parse_amount(m.as_str())?,
        None => 0.0,
    };

    let stripped = NUMBER_PATTERN.replace_all(text, "");
    let item = stripped.trim_matches(is_edge_char);
    let item = if item.is_empty() { UNKNOWN_ITEM } else { item };

    Ok(ParsedExpense {
        amount,
        item: item.to_string(),
    })
}

fn parse_amount(value: &str) -> Result<f64, ParseError> {
    value
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ParseError::InvalidAmount {
            value: value.to_string(),
        })
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedExpense {
        parse_expense(text).unwrap()
    }

    #[test]
    fn test_item_then_amount() {
        let parsed = parse("coffee 5");
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.item, "coffee");
    }

    #[test]
    fn test_amount_then_item() {
        let parsed = parse("12 sandwich");
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.item, "sandwich");
    }

    #[test]
    fn test_decimal_amount() {
        let parsed = parse("lunch 12.75");
        assert_eq!(parsed.amount, 12.75);
        assert_eq!(parsed.item, "lunch");
    }

    #[test]
    fn test_only_number_is_unknown_item() {
        let parsed = parse("5");
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.item, UNKNOWN_ITEM);
        assert!(parsed.is_unknown_item());
    }

    #[test]
    fn test_no_digits() {
        let parsed = parse("  groceries  ");
        assert_eq!(parsed.amount, 0.0);
        assert_eq!(parsed.item, "groceries");
    }

    #[test]
    fn test_multiple_numbers_first_wins_all_stripped() {
        let parsed = parse("coffee 5 2");
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.item, "coffee");
    }

    #[test]
    fn test_inner_numbers_leave_inner_text() {
        let parsed = parse("bus 3 and train 4");
        assert_eq!(parsed.amount, 3.0);
        assert_eq!(parsed.item, "bus  and train");
    }

    #[test]
    fn test_currency_and_trailing_punctuation_trimmed() {
        let parsed = parse("coffee, $5.");
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.item, "coffee");

        let parsed = parse("$4.50 tea.");
        assert_eq!(parsed.amount, 4.5);
        assert_eq!(parsed.item, "tea");
    }

    #[test]
    fn test_trailing_dot_on_number() {
        let parsed = parse("5.");
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.item, UNKNOWN_ITEM);
    }

    #[test]
    fn test_punctuation_only_is_unknown() {
        let parsed = parse("$,.");
        assert_eq!(parsed.amount, 0.0);
        assert_eq!(parsed.item, UNKNOWN_ITEM);
    }

    #[test]
    fn test_no_sign_support() {
        let parsed = parse("refund -5");
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.item, "refund -");
    }

    #[test]
    fn test_non_ascii_digits_are_text() {
        let parsed = parse("chai ٥");
        assert_eq!(parsed.amount, 0.0);
        assert_eq!(parsed.item, "chai ٥");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(parse_expense(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_expense("   \t\n"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_overflowing_amount_rejected() {
        let huge = "9".repeat(400);
        let err = parse_expense(&format!("yacht {}", huge)).unwrap_err();
        assert!(matches!(err, ParseError::InvalidAmount { .. }));
    }
}
