//! Bill aggregator
//!
//! Folds priced calls into per-number totals and call counts.

use phonebill_core::{
    models::{BillingState, CallRecord},
    traits::CallRater,
};
use tracing::debug;

/// Bill aggregator
///
/// Prices every record with its rater and accumulates the result per number.
/// Records are priced independently, so folding order does not matter.
pub struct BillAggregator<R: CallRater> {
    rater: R,
}

impl<R: CallRater> BillAggregator<R> {
    /// Create an aggregator pricing calls with `rater`
    pub fn new(rater: R) -> Self {
        Self { rater }
    }

    /// Price one record and add it to `state`
    pub fn add(&self, state: &mut BillingState, record: &CallRecord) {
        let cost = self.rater.rate(record);
        debug!(
            phone_number = %record.phone_number,
            start = %record.start,
            minutes = record.billable_minutes(),
            %cost,
            "Rated call"
        );
        state.record_call(&record.phone_number, cost);
    }

    /// Fold a sequence of records into a fresh billing state
    pub fn fold<'a, I>(&self, records: I) -> BillingState
    where
        I: IntoIterator<Item = &'a CallRecord>,
    {
        records
            .into_iter()
            .fold(BillingState::new(), |mut state, record| {
                self.add(&mut state, record);
                state
            })
    }
}
