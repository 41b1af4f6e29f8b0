//! Common traits for the rating and billing services
//!
//! Defines the seams between the calculation stages so each stage can be
//! exercised with a stand-in for the one below it.

use crate::models::{Bill, CallRecord};
use crate::AppResult;
use rust_decimal::Decimal;

/// Prices a single call
pub trait CallRater {
    /// Cost of one call under the rater's tariff
    fn rate(&self, record: &CallRecord) -> Decimal;
}

/// Turns a call log into the amount due
pub trait TelephoneBillCalculator {
    /// Itemized bill for the given raw call log lines
    ///
    /// # Errors
    /// Returns `AppError::Parse` for the first malformed line; no partial
    /// result is produced.
    fn itemize<'a, I>(&self, lines: I) -> AppResult<Bill>
    where
        I: IntoIterator<Item = &'a str>;

    /// Amount due for the given raw call log lines
    fn calculate<'a, I>(&self, lines: I) -> AppResult<Decimal>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.itemize(lines).map(|bill| bill.total)
    }
}

impl<R: CallRater + ?Sized> CallRater for &R {
    fn rate(&self, record: &CallRecord) -> Decimal {
        (**self).rate(record)
    }
}
