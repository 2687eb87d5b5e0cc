//! Error types for ezlog-core
//!
//! Every error carries a stable code and a severity so the HTTP layer can
//! map it to a status and the logger can pick a level.

use ezlog_parser::ParseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No text was supplied
    EmptyInput,
    /// Text could not be parsed
    ParseError,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::EmptyInput => write!(f, "EMPTY_INPUT"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Caller mistake, nothing to investigate
    Info,
    /// Operation rejected
    Warning,
    /// Operation failed unexpectedly
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for suggestion in &self.suggestions {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

/// Main error type for ezlog-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No text provided")]
    EmptyInput,

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::EmptyInput => ErrorCode::EmptyInput,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::EmptyInput => ErrorSeverity::Info,
            CoreError::ParseError { .. } => ErrorSeverity::Warning,
            CoreError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::EmptyInput => details.with_suggestion(
                "Send text such as \"coffee 5\".".to_string(),
            ),
            CoreError::ParseError { .. } => details.with_suggestion(
                "Amounts are plain decimals like 5 or 12.50.".to_string(),
            ),
            CoreError::InternalError { .. } => details,
        }
    }
}

impl From<ParseError> for CoreError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::EmptyInput => CoreError::EmptyInput,
            other => CoreError::ParseError { message: other.to_string() },
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            data: serde_json::json!({}),
        }
    }

    /// Add context data
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error at a level matching its severity
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Debug, Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        let level = match error.severity() {
            ErrorSeverity::Info => log::Level::Debug,
            ErrorSeverity::Warning => log::Level::Warn,
            ErrorSeverity::Critical => log::Level::Error,
        };
        log::log!(
            target: "ezlog::error",
            level,
            "{} - Operation: {} - Context: {}",
            error.to_details(),
            context.operation,
            context.data
        );
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::EmptyInput.to_string(), "EMPTY_INPUT");
        assert_eq!(ErrorCode::ParseError.to_string(), "PARSE_ERROR");
        assert_eq!(ErrorCode::InternalError.to_string(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_core_error_code_and_severity() {
        assert_eq!(CoreError::EmptyInput.code(), ErrorCode::EmptyInput);
        assert_eq!(CoreError::EmptyInput.severity(), ErrorSeverity::Info);

        let error = CoreError::InternalError { message: "boom".to_string() };
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_from_parse_error() {
        assert!(matches!(CoreError::from(ParseError::EmptyInput), CoreError::EmptyInput));

        let error = CoreError::from(ParseError::InvalidAmount { value: "9e999".to_string() });
        assert_eq!(error.code(), ErrorCode::ParseError);
        assert!(error.to_string().contains("9e999"));
    }

    #[test]
    fn test_error_details() {
        let details = CoreError::EmptyInput.to_details();
        assert_eq!(details.code, ErrorCode::EmptyInput);
        assert_eq!(details.message, "No text provided");
        assert_eq!(details.suggestions.len(), 1);
        assert!(details.to_string().starts_with("[EMPTY_INPUT]"));
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("log_expense")
            .with_data("text", serde_json::json!("coffee 5"));

        assert_eq!(context.operation, "log_expense");
        assert_eq!(context.data["text"], "coffee 5");
    }
}
