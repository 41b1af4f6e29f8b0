//! Business logic services for the phone bill calculator
//!
//! This crate contains the calculation pipeline that turns a call log into
//! the amount due.
//!
//! # Architecture
//!
//! Each stage is a plain value with no state beyond one invocation:
//! - Each service owns its configuration (tariff schedule, ranking rule)
//! - Stages meet at the traits in `phonebill_core::traits`
//! - All operations are instrumented with tracing
//! - Errors surface as `AppError`
//!
//! # Services
//!
//! - `TariffEngine` - Per-call pricing under the peak/off-peak schedule and volume discount
//! - `BillAggregator` - Per-number totals and call counts
//! - `PromotionRule` - Waives the most frequent caller when several callers appear
//! - `BillCalculator` - Orchestrates the pipeline over raw call log lines

pub mod aggregator;
pub mod calculator;
pub mod promotion;
pub mod tariff_engine;

pub use aggregator::BillAggregator;
pub use calculator::BillCalculator;
pub use promotion::PromotionRule;
pub use tariff_engine::TariffEngine;
