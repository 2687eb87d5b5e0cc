//! Utility functions and helpers

/// Escape text for safe inclusion in HTML element content or quoted attributes
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format an amount with a currency prefix, e.g. `$5.00`
pub fn format_amount(amount: f64, symbol: &str, decimal_places: usize) -> String {
    format!("{}{:.*}", symbol, decimal_places, amount)
}
