//! Promotion rule
//!
//! The most frequent caller in a log calls for free, provided the log holds
//! more than one caller.

use phonebill_core::models::BillingState;
use std::cmp::Reverse;
use tracing::{debug, info};

/// Minimum number of distinct callers for the promotion to apply
const MIN_PROMOTION_NUMBERS: usize = 2;

/// Promotion rule
#[derive(Debug, Clone, Copy, Default)]
pub struct PromotionRule;

impl PromotionRule {
    /// Number whose calls are waived, if the promotion applies
    ///
    /// Candidates are ranked by call count descending, then phone number
    /// ascending; the first candidate wins. A log with fewer than two distinct
    /// numbers has no free number.
    pub fn free_number<'a>(&self, state: &'a BillingState) -> Option<&'a str> {
        if state.distinct_numbers() < MIN_PROMOTION_NUMBERS {
            debug!(
                distinct_numbers = state.distinct_numbers(),
                "Promotion not applicable"
            );
            return None;
        }

        state
            .call_count_by_number
            .iter()
            .min_by_key(|&(number, &count)| (Reverse(count), number.as_str()))
            .map(|(number, _)| number.as_str())
    }

    /// Remove the free number's total from the state
    ///
    /// States with fewer than two distinct numbers are returned unchanged.
    pub fn apply(&self, mut state: BillingState) -> BillingState {
        if let Some(number) = self.free_number(&state).map(str::to_owned) {
            let waived = state.totals_by_number.remove(&number);
            info!(
                free_number = %number,
                waived = ?waived,
                "Promotion applied"
            );
        }
        state
    }
}
