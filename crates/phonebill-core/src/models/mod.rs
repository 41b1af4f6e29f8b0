//! Domain models for the phone bill calculator
//!
//! This module contains all the core domain models used throughout the application.

pub mod bill;
pub mod call;
pub mod tariff;

pub use bill::{Bill, BillingState};
pub use call::{CallRecord, TIMESTAMP_FORMAT};
pub use tariff::Tariff;
