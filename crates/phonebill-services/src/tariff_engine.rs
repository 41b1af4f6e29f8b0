//! Tariff engine
//!
//! Prices a call minute by minute against the peak/off-peak schedule and
//! applies the volume discount.

use chrono::{NaiveDateTime, Timelike};
use phonebill_core::{
    models::{CallRecord, Tariff},
    traits::CallRater,
};
use rust_decimal::Decimal;
use tracing::trace;

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: u32 = 24;
const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY as i64;

/// Tariff engine
///
/// Each minute of a call is charged the zone rate of the hour it starts in.
/// Calls longer than the free-minute threshold then have their excess minutes
/// repriced from the peak rate to the reduced rate, whatever zone those
/// minutes were actually charged in.
#[derive(Debug, Clone)]
pub struct TariffEngine {
    tariff: Tariff,
    /// Cost of 1440 consecutive minutes; identical for any starting instant
    day_cost: Decimal,
}

impl TariffEngine {
    /// Create an engine for the given schedule
    pub fn new(tariff: Tariff) -> Self {
        let minutes_per_hour = Decimal::from(MINUTES_PER_HOUR);
        let day_cost = (0..HOURS_PER_DAY)
            .map(|hour| tariff.zone_rate(hour) * minutes_per_hour)
            .sum();

        Self { tariff, day_cost }
    }

    /// Schedule this engine prices against
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Cost of a call starting at `start` and lasting `duration_minutes`
    ///
    /// Zero or negative durations cost nothing.
    pub fn cost_of(&self, start: NaiveDateTime, duration_minutes: i64) -> Decimal {
        if duration_minutes <= 0 {
            return Decimal::ZERO;
        }

        // Whole days repeat the same hour-of-day pattern, so only the
        // remainder needs walking. Adding whole minutes never changes the
        // seconds, so the hour of `start + i minutes` follows from the
        // minute of day alone and no date arithmetic is needed.
        let full_days = duration_minutes / MINUTES_PER_DAY;
        let remainder = duration_minutes % MINUTES_PER_DAY;
        let start_minute = i64::from(start.hour()) * MINUTES_PER_HOUR + i64::from(start.minute());

        let mut total = self.day_cost * Decimal::from(full_days);
        for offset in 0..remainder {
            let minute_of_day = (start_minute + offset) % MINUTES_PER_DAY;
            let hour = (minute_of_day / MINUTES_PER_HOUR) as u32;
            total += self.tariff.zone_rate(hour);
        }

        if duration_minutes > self.tariff.free_minutes {
            let excess = Decimal::from(duration_minutes - self.tariff.free_minutes);
            total += (self.tariff.reduced_rate - self.tariff.peak_rate) * excess;
        }

        trace!(%start, duration_minutes, %total, "Priced call");

        total
    }

    /// Cost of a parsed call, using its billable (rounded-up) minutes
    pub fn cost_of_call(&self, record: &CallRecord) -> Decimal {
        self.cost_of(record.start, record.billable_minutes())
    }
}

impl Default for TariffEngine {
    fn default() -> Self {
        Self::new(Tariff::default())
    }
}

impl CallRater for TariffEngine {
    fn rate(&self, record: &CallRecord) -> Decimal {
        self.cost_of_call(record)
    }
}
