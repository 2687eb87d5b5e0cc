//! HTTP API server and HTML pages
//!
//! Routes are organized into modules:
//! - routes::entry: `POST /log`, the `GET /log` test form, `OPTIONS /log`
//! - routes::expenses: `/expenses` table, `/api/expenses` JSON, `/clear`

pub mod error;
pub mod routes;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::{routing::get, Router};
use ezlog_config::Config;
use ezlog_core::{Ledger, LedgerOperations};
use ezlog_utils::escape_html;
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, ledger: Arc<RwLock<Ledger>>) -> Self {
        Self { ledger, config }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::entry::{api_log_expense, api_log_preflight, page_log_form};
    use routes::expenses::{api_expenses, page_clear, page_expenses};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/expenses", get(api_expenses))
        .route(
            "/log",
            get(page_log_form).post(api_log_expense).options(api_log_preflight),
        )
        // Page routes
        .route("/", get(index_page))
        .route("/expenses", get(page_expenses))
        .route("/clear", get(page_clear))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Turn a handler panic into the internal error JSON body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };
    log::error!(target: "ezlog::error", "Handler panicked: {}", message);

    ApiError::Internal { message }.into_response()
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        body {{ font-family: Arial; padding: 20px; }}
    </style>
</head>
<body>
    {}
</body>
</html>"#,
        escape_html(title),
        content
    )
}

/// Base URL the client used to reach us, for the usage examples
fn host_url(headers: &HeaderMap, config: &Config) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", config.server.port));
    format!("http://{}/", host)
}

/// Landing page with usage instructions
async fn index_page(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let count = state.ledger.read().await.summary().count;
    let url = escape_html(&host_url(&headers, &state.config));

    let content = format!(
        r#"<style>
            body {{ max-width: 800px; margin: 0 auto; padding: 40px; }}
            code {{ background: #f4f4f4; padding: 10px; display: block; margin: 10px 0; }}
            .endpoint {{ background: #e8f4f8; padding: 15px; border-radius: 5px; margin: 20px 0; }}
        </style>
        <h1>💰 EZ Log API</h1>
        <p><strong>API is running!</strong> Logged {count} expenses so far.</p>

        <div class="endpoint">
            <h3>📝 Log an Expense</h3>
            <p><a href="/log">Click here to log via web form</a></p>
            <p>Or send POST request:</p>
            <code>curl -X POST {url}log -H "Content-Type: application/json" -d '{{"text": "coffee 5"}}'</code>
        </div>

        <div class="endpoint">
            <h3>📊 View Expenses</h3>
            <p><a href="/expenses">View all expenses as HTML table</a></p>
            <p>Or GET: <code>{url}api/expenses</code></p>
        </div>

        <div class="endpoint">
            <h3>📱 Apple Shortcuts Setup</h3>
            <ol>
                <li>Open Shortcuts app on iPhone</li>
                <li>Create new shortcut</li>
                <li>Add "Ask for Input" action</li>
                <li>Add "Get contents of URL" action</li>
                <li>URL: <code>{url}log</code></li>
                <li>Method: POST, Request Body: JSON</li>
                <li>Add: <code>{{"text": "Provided Input"}}</code></li>
                <li>Add to home screen!</li>
            </ol>
        </div>"#
    );

    Html(base_html("EZ Log API", &content))
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: Config, ledger: Arc<RwLock<Ledger>>) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let router = create_router(AppState::new(config, ledger));

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting ezlog server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Usage)");
    log::info!("  - /log (GET form, POST JSON or form)");
    log::info!("  - /expenses (Expense table)");
    log::info!("  - /clear (Reset ledger)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Tests ====================
