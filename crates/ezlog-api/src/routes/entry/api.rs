//! Entry API endpoints
//!
//! `POST /log` accepts `{"text": "..."}` as JSON or a `text` form field.

use crate::{ApiError, AppState};
use async_trait::async_trait;
use axum::extract::{FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::{Form, Json};
use ezlog_core::{DefaultErrorLogger, ErrorContext, ErrorLogger, ExpenseRecord};
use ezlog_utils::format_amount;
use serde::{Deserialize, Serialize};

/// Request body for `POST /log`
#[derive(Debug, Default, Deserialize)]
struct LogRequest {
    #[serde(default)]
    text: Option<String>,
}

/// Expense text pulled from a JSON or form-encoded body
///
/// Any other content type yields empty text.
#[derive(Debug)]
pub struct LogInput(pub String);

#[async_trait]
impl<S> FromRequest<S> for LogInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        let body = if content_type.starts_with("application/json") {
            let Json(body) = Json::<LogRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest { message: e.body_text() })?;
            body
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<LogRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest { message: e.body_text() })?;
            body
        } else {
            LogRequest::default()
        };

        Ok(LogInput(body.text.unwrap_or_default()))
    }
}

/// Successful log response
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub success: bool,
    pub message: String,
    pub expense: ExpenseRecord,
}

/// Log an expense (JSON API)
pub async fn api_log_expense(
    State(state): State<AppState>,
    LogInput(text): LogInput,
) -> Result<Json<LogResponse>, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::MissingText);
    }

    let result = state.ledger.write().await.append(text);
    let record = result.map_err(|e| {
        let context = ErrorContext::new("log_expense").with_data("text", serde_json::json!(text));
        DefaultErrorLogger.log_error(&e, &context);
        ApiError::from(e)
    })?;

    let currency = &state.config.currency;
    let amount = format_amount(record.amount, &currency.symbol, currency.decimal_places);
    log::info!("Logged expense #{}: {} - {}", record.id, record.item, amount);

    Ok(Json(LogResponse {
        success: true,
        message: format!("Logged: {} - {}", record.item, amount),
        expense: record,
    }))
}

/// Cross-origin preflight for `/log`
pub async fn api_log_preflight() -> StatusCode {
    StatusCode::OK
}
