//! Tariff schedule model
//!
//! Rates, the peak window, and the free-minute threshold used to price calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::AppError;

/// Tariff schedule
///
/// Immutable for the life of a calculation. The default schedule charges
/// 1.00 per minute between 08:00 and 16:00, 0.50 otherwise, and reprices
/// every minute past the fifth at 0.20.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    /// Rate per minute inside the peak window
    pub peak_rate: Decimal,

    /// Rate per minute outside the peak window
    pub off_peak_rate: Decimal,

    /// Rate per minute for minutes beyond `free_minutes`
    pub reduced_rate: Decimal,

    /// First hour of the peak window (inclusive)
    pub peak_start_hour: u32,

    /// Last hour of the peak window (exclusive)
    pub peak_end_hour: u32,

    /// Minutes per call billed at the zone rate before the reduced rate applies
    pub free_minutes: i64,
}

impl Tariff {
    /// Peak window as an hour-of-day range
    #[inline]
    pub fn peak_hours(&self) -> Range<u32> {
        self.peak_start_hour..self.peak_end_hour
    }

    /// Check whether an hour of day falls in the peak window
    #[inline]
    pub fn is_peak_hour(&self, hour: u32) -> bool {
        self.peak_hours().contains(&hour)
    }

    /// Rate charged for a minute starting in the given hour of day
    #[inline]
    pub fn zone_rate(&self, hour: u32) -> Decimal {
        if self.is_peak_hour(hour) {
            self.peak_rate
        } else {
            self.off_peak_rate
        }
    }

    /// Validate the schedule
    ///
    /// # Errors
    /// Returns `AppError::InvalidTariff` when the peak window is empty or
    /// leaves the day, a rate is negative, or the reduced rate exceeds the
    /// peak rate (which would make discounted calls cost more).
    pub fn validate(&self) -> Result<(), AppError> {
        if self.peak_start_hour >= self.peak_end_hour || self.peak_end_hour > 24 {
            return Err(AppError::InvalidTariff(format!(
                "peak window [{}, {}) must be a non-empty range within 0..24",
                self.peak_start_hour, self.peak_end_hour
            )));
        }

        for (name, rate) in [
            ("peak_rate", self.peak_rate),
            ("off_peak_rate", self.off_peak_rate),
            ("reduced_rate", self.reduced_rate),
        ] {
            if rate.is_sign_negative() {
                return Err(AppError::InvalidTariff(format!(
                    "{} must not be negative, got {}",
                    name, rate
                )));
            }
        }

        if self.reduced_rate > self.peak_rate {
            return Err(AppError::InvalidTariff(format!(
                "reduced_rate {} exceeds peak_rate {}",
                self.reduced_rate, self.peak_rate
            )));
        }

        if self.free_minutes < 0 {
            return Err(AppError::InvalidTariff(format!(
                "free_minutes must not be negative, got {}",
                self.free_minutes
            )));
        }

        Ok(())
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            peak_rate: Decimal::new(100, 2),
            off_peak_rate: Decimal::new(50, 2),
            reduced_rate: Decimal::new(20, 2),
            peak_start_hour: 8,
            peak_end_hour: 16,
            free_minutes: 5,
        }
    }
}
