//! Error types for the bakery tracker
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core order/cake errors
//! - `ParseError`: Errors turning a line of user input into an intent
//! - `AppError`: Application layer errors (what the front end reports)

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Identifier space exhausted")]
    IdsExhausted,
}

/// Parse error for intent parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid JSON intent: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Application layer errors - surfaced to the front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Render(e.to_string())
    }
}
