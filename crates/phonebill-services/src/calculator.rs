//! Bill calculator
//!
//! Runs the whole pipeline over a call log: parse, rate and aggregate,
//! apply the promotion, sum.

use phonebill_core::{
    models::{Bill, CallRecord, Tariff},
    traits::TelephoneBillCalculator,
    AppError, AppResult,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

use crate::aggregator::BillAggregator;
use crate::promotion::PromotionRule;
use crate::tariff_engine::TariffEngine;

/// Minimum number of decimal places on reported amounts
const MONEY_SCALE: u32 = 2;

/// Bill calculator
///
/// Stateless between calls: every invocation builds and discards its own
/// billing state.
#[derive(Debug, Clone, Default)]
pub struct BillCalculator {
    engine: TariffEngine,
    promotion: PromotionRule,
}

impl BillCalculator {
    /// Create a calculator for the given schedule
    pub fn new(tariff: Tariff) -> Self {
        Self {
            engine: TariffEngine::new(tariff),
            promotion: PromotionRule,
        }
    }

    /// Parse every line, stopping at the first malformed one
    fn parse_all<'a, I>(lines: I) -> AppResult<Vec<CallRecord>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                CallRecord::parse(line).map_err(|e| {
                    error!(line = index + 1, "Rejecting call log line: {}", e);
                    AppError::from(e)
                })
            })
            .collect()
    }
}

impl TelephoneBillCalculator for BillCalculator {
    #[instrument(skip_all)]
    fn itemize<'a, I>(&self, lines: I) -> AppResult<Bill>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = Self::parse_all(lines)?;

        let state = BillAggregator::new(&self.engine).fold(&records);

        let free_number = self.promotion.free_number(&state).map(str::to_owned);
        let waived = free_number
            .as_deref()
            .and_then(|number| state.totals_by_number.get(number).copied())
            .unwrap_or(Decimal::ZERO);

        let state = self.promotion.apply(state);
        let total = to_money(state.total());

        let charges = state
            .totals_by_number
            .into_iter()
            .map(|(number, amount)| (number, to_money(amount)))
            .collect::<BTreeMap<_, _>>();

        info!(
            calls = records.len(),
            numbers = charges.len() + usize::from(free_number.is_some()),
            %total,
            "Bill calculated"
        );

        Ok(Bill {
            charges,
            free_number,
            waived: to_money(waived),
            call_count: records.len(),
            total,
        })
    }
}

/// Scale an amount to at least two decimal places
fn to_money(mut amount: Decimal) -> Decimal {
    if amount.scale() < MONEY_SCALE {
        amount.rescale(MONEY_SCALE);
    }
    amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebill_core::ParseError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_log_is_zero() {
        let calculator = BillCalculator::default();
        let total = calculator.calculate(Vec::<&str>::new()).unwrap();
        assert_eq!(total, Decimal::ZERO);
        assert_eq!(total.to_string(), "0.00");
    }

    #[test]
    fn test_single_number_pays_in_full() {
        let calculator = BillCalculator::default();
        let total = calculator
            .calculate(["111,13-01-2020 10:00:00,13-01-2020 10:01:00"])
            .unwrap();
        assert_eq!(total, dec!(1.00));
    }

    #[test]
    fn test_total_has_two_decimal_places() {
        let calculator = BillCalculator::new(Tariff {
            peak_rate: dec!(1),
            ..Default::default()
        });
        let total = calculator
            .calculate(["111,13-01-2020 10:00:00,13-01-2020 10:01:00"])
            .unwrap();
        assert_eq!(total.to_string(), "1.00");
    }

    #[test]
    fn test_itemize_reports_promotion() {
        let calculator = BillCalculator::default();
        let bill = calculator
            .itemize([
                "111,13-01-2020 18:10:15,13-01-2020 18:12:57",
                "222,13-01-2020 20:00:00,13-01-2020 20:00:30",
                "222,14-01-2020 20:00:00,14-01-2020 20:00:30",
            ])
            .unwrap();

        assert_eq!(bill.free_number.as_deref(), Some("222"));
        assert_eq!(bill.waived, dec!(1.00));
        assert_eq!(bill.call_count, 3);
        assert_eq!(bill.charges.len(), 1);
        assert_eq!(bill.charges["111"], dec!(1.50));
        assert_eq!(bill.total, dec!(1.50));
    }

    #[test]
    fn test_first_parse_error_aborts() {
        let calculator = BillCalculator::default();
        let err = calculator
            .calculate([
                "111,13-01-2020 10:00:00,13-01-2020 10:01:00",
                "222;13-01-2020 10:00:00;13-01-2020 10:01:00",
                "333,bad,13-01-2020 10:01:00",
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Parse(ParseError::FieldCount { found: 1 })
        ));
    }

    #[test]
    fn test_to_money_keeps_finer_scale() {
        assert_eq!(to_money(dec!(1.5)).to_string(), "1.50");
        assert_eq!(to_money(dec!(1.255)).to_string(), "1.255");
    }
}
