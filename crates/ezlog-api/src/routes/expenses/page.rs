//! Expenses page rendering - Full page endpoints

use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use ezlog_core::{ExpenseRecord, LedgerOperations};
use ezlog_utils::{escape_html, format_amount};

const TABLE_STYLE: &str = r#"<style>
        table { border-collapse: collapse; width: 100%; margin-top: 20px; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
        th { background-color: #f2f2f2; }
        tr:hover { background-color: #f5f5f5; }
    </style>"#;

fn expense_row(record: &ExpenseRecord, symbol: &str, decimal_places: usize) -> String {
    format!(
        r#"<tr>
                <td>{}</td>
                <td><strong>{}</strong></td>
                <td>{}</td>
                <td>{}</td>
                <td><small>{}</small></td>
            </tr>"#,
        record.id,
        escape_html(&record.item),
        escape_html(&format_amount(record.amount, symbol, decimal_places)),
        record.time_of_day(),
        escape_html(&record.raw_text)
    )
}

/// Expense table, newest first, with the running total
pub async fn page_expenses(State(state): State<AppState>) -> Html<String> {
    let ledger = state.ledger.read().await;
    let summary = ledger.summary();
    let currency = &state.config.currency;

    let rows: Vec<String> = ledger
        .newest_first()
        .map(|record| expense_row(record, &currency.symbol, currency.decimal_places))
        .collect();

    let content = format!(
        r#"{}
        <h1>📊 EZ Log</h1>
        <p>Total logged: {} from {} expenses</p>
        <p><a href="/">Back to logging</a></p>
        <table>
            <tr>
                <th>ID</th>
                <th>Item</th>
                <th>Amount</th>
                <th>Time</th>
                <th>Raw Text</th>
            </tr>
            {}
        </table>"#,
        TABLE_STYLE,
        escape_html(&format_amount(summary.total, &currency.symbol, currency.decimal_places)),
        summary.count,
        rows.join("\n")
    );

    Html(crate::base_html("Expenses", &content))
}

/// Empty the ledger
pub async fn page_clear(State(state): State<AppState>) -> Html<&'static str> {
    state.ledger.write().await.clear();
    Html(r#"<h3>All expenses cleared</h3><a href="/">Go back</a>"#)
}
