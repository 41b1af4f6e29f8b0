//! Unified error handling for the phone bill calculator
//!
//! `ParseError` covers malformed call log lines. `AppError` is the type every
//! public operation returns and wraps `ParseError` unchanged.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Call log line parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected 3 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("Phone number is empty")]
    EmptyPhoneNumber,

    #[error("Timestamp '{value}' is not in dd-MM-yyyy HH:mm:ss format")]
    MalformedTimestamp { value: String },

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Call ends at {end} before it starts at {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Input Errors ====================
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    // ==================== Configuration Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),
}

impl AppError {
    /// Returns the error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Parse(ParseError::FieldCount { .. }) => "field_count",
            AppError::Parse(ParseError::EmptyPhoneNumber) => "empty_phone_number",
            AppError::Parse(ParseError::MalformedTimestamp { .. })
            | AppError::Parse(ParseError::InvalidTimestamp { .. }) => "invalid_timestamp",
            AppError::Parse(ParseError::EndBeforeStart { .. }) => "end_before_start",
            AppError::Config(_) => "config_error",
            AppError::InvalidTariff(_) => "invalid_tariff",
        }
    }
}

// ==================== From implementations ====================

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
