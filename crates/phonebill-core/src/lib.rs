//! PhoneBill Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the phone bill calculator. It includes:
//!
//! - Domain models (CallRecord, Tariff, BillingState, Bill)
//! - The call log line parser
//! - Common traits for the rating and billing services
//! - Unified error handling
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::{AppError, ParseError};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
