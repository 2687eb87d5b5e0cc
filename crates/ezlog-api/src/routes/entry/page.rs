//! Entry page rendering - Test form for logging by hand

use axum::response::Html;

/// Static form that posts to `/log` (no ledger access)
pub async fn page_log_form() -> Html<String> {
    let content = r#"<form method="POST" action="/log">
        <h3>Test Expense Logging</h3>
        <input type="text" name="text" placeholder="coffee, 5" style="padding: 10px; width: 300px;">
        <button type="submit" style="padding: 10px;">Log Expense</button>
    </form>
    <p>Or send POST request with JSON: <code>{"text": "coffee 5"}</code></p>
    <p><a href="/expenses">View all expenses</a></p>"#;

    Html(crate::base_html("Log Expense", content))
}
