//! Error types for ezlog-parser

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("No text provided")]
    EmptyInput,

    #[error("Invalid amount '{value}'")]
    InvalidAmount { value: String },
}
