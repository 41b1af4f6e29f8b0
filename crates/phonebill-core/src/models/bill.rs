//! Billing state and bill models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Working state of one calculation run
///
/// Per-number running totals and call counts. Built by folding call records,
/// filtered once by the promotion rule, then summed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingState {
    /// Phone number -> accumulated cost
    pub totals_by_number: HashMap<String, Decimal>,

    /// Phone number -> number of calls
    pub call_count_by_number: HashMap<String, u32>,
}

impl BillingState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one priced call for a number
    pub fn record_call(&mut self, phone_number: &str, cost: Decimal) {
        *self
            .totals_by_number
            .entry(phone_number.to_string())
            .or_insert(Decimal::ZERO) += cost;
        *self
            .call_count_by_number
            .entry(phone_number.to_string())
            .or_insert(0) += 1;
    }

    /// Number of distinct callers seen
    #[inline]
    pub fn distinct_numbers(&self) -> usize {
        self.call_count_by_number.len()
    }

    /// Total number of calls folded in
    pub fn call_count(&self) -> usize {
        self.call_count_by_number.values().map(|&c| c as usize).sum()
    }

    /// Sum of all remaining per-number totals (zero when empty)
    pub fn total(&self) -> Decimal {
        self.totals_by_number.values().copied().sum()
    }
}

/// Itemized bill
///
/// The outcome of one calculation: what each number pays after the promotion,
/// which number (if any) was freed, and the amount due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Phone number -> amount due, promoted number excluded
    pub charges: BTreeMap<String, Decimal>,

    /// Number whose calls were waived by the promotion
    pub free_number: Option<String>,

    /// Amount waived by the promotion
    pub waived: Decimal,

    /// Number of calls in the log
    pub call_count: usize,

    /// Amount due across all charged numbers
    pub total: Decimal,
}
