//! End-to-end tests for the bill calculator
//!
//! Each test drives the full pipeline from raw call log lines to the amount due.

#[cfg(test)]
mod tests {
    use phonebill_core::{models::Tariff, traits::TelephoneBillCalculator, AppError, ParseError};
    use phonebill_services::BillCalculator;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn lines(log: &str) -> Vec<&str> {
        log.lines().filter(|line| !line.trim().is_empty()).collect()
    }

    #[test]
    fn test_single_peak_minute() {
        let calculator = BillCalculator::default();
        let total = calculator
            .calculate(["420774577453,13-01-2020 10:00:00,13-01-2020 10:00:45"])
            .unwrap();

        assert_eq!(total, dec!(1.00));
    }

    #[test]
    fn test_most_frequent_caller_is_free() {
        let calculator = BillCalculator::default();
        let total = calculator
            .calculate([
                "A,13-01-2020 18:00:00,13-01-2020 18:03:00",
                "B,13-01-2020 19:00:00,13-01-2020 19:01:00",
                "B,13-01-2020 20:00:00,13-01-2020 20:01:00",
            ])
            .unwrap();

        assert_eq!(total, dec!(1.50));
    }

    #[test]
    fn test_single_number_long_peak_call() {
        let calculator = BillCalculator::default();
        let total = calculator
            .calculate(["420774577453,13-01-2020 10:00:00,13-01-2020 10:06:00"])
            .unwrap();

        assert_eq!(total, dec!(5.20));
    }

    #[test]
    fn test_equal_counts_free_smallest_number() {
        let calculator = BillCalculator::default();
        let bill = calculator
            .itemize([
                "222,13-01-2020 10:00:00,13-01-2020 10:01:00",
                "111,13-01-2020 10:00:00,13-01-2020 10:02:00",
            ])
            .unwrap();

        assert_eq!(bill.free_number.as_deref(), Some("111"));
        assert_eq!(bill.total, dec!(1.00));
    }

    #[test]
    fn test_fixture_promotion_by_frequency() {
        let log = include_str!("fixtures/promotion_by_frequency.csv");
        let calculator = BillCalculator::default();

        let bill = calculator.itemize(lines(log)).unwrap();

        assert_eq!(bill.free_number.as_deref(), Some("420776562353"));
        assert_eq!(bill.waived, dec!(6.70));
        assert_eq!(bill.total, dec!(1.50));
        assert_eq!(bill.total.to_string(), "1.50");
    }

    #[test]
    fn test_fixture_single_number() {
        let log = include_str!("fixtures/single_number.csv");
        let calculator = BillCalculator::default();

        let bill = calculator.itemize(lines(log)).unwrap();

        assert_eq!(bill.free_number, None);
        assert_eq!(bill.waived, Decimal::ZERO);
        assert_eq!(bill.call_count, 2);
        assert_eq!(bill.total, dec!(5.50));
    }

    #[test]
    fn test_fixture_tie_break() {
        let log = include_str!("fixtures/tie_break.csv");
        let calculator = BillCalculator::default();

        let bill = calculator.itemize(lines(log)).unwrap();

        assert_eq!(bill.free_number.as_deref(), Some("111"));
        assert_eq!(bill.waived, dec!(5.70));
        assert_eq!(bill.charges["222"], dec!(2.50));
        assert_eq!(bill.charges["333"], dec!(1.00));
        assert_eq!(bill.total, dec!(3.50));
    }

    #[test]
    fn test_zero_length_call_counts_toward_frequency() {
        let calculator = BillCalculator::default();
        let bill = calculator
            .itemize([
                "111,13-01-2020 10:00:00,13-01-2020 10:05:00",
                "222,13-01-2020 10:00:00,13-01-2020 10:00:00",
                "222,13-01-2020 11:00:00,13-01-2020 11:00:00",
            ])
            .unwrap();

        assert_eq!(bill.free_number.as_deref(), Some("222"));
        assert_eq!(bill.waived, Decimal::ZERO);
        assert_eq!(bill.total, dec!(5.00));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let calculator = BillCalculator::default();
        let err = calculator
            .calculate(["111,13-01-2020 10:05:00,13-01-2020 10:00:00"])
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Parse(ParseError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_out_of_range_year_is_rejected() {
        let calculator = BillCalculator::default();
        let err = calculator
            .calculate(["111,31-12-+262142 23:59:00,31-12-+262142 23:59:59"])
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Parse(ParseError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn test_two_digit_year_is_rejected() {
        let calculator = BillCalculator::default();
        let err = calculator
            .calculate(["111,13-01-20 10:00:00,13-01-20 10:01:00"])
            .unwrap_err();

        assert_eq!(err.error_code(), "invalid_timestamp");
    }

    #[test]
    fn test_single_caller_long_off_peak_bill_is_negative() {
        let calculator = BillCalculator::default();
        let total = calculator
            .calculate(["111,13-01-2020 20:00:00,13-01-2020 20:20:00"])
            .unwrap();

        assert_eq!(total, dec!(-2.00));
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let calculator = BillCalculator::default();
        let err = calculator
            .calculate([
                "111,13-01-2020 10:00:00,13-01-2020 10:01:00",
                "222,13/01/2020 10:00:00,13-01-2020 10:01:00",
            ])
            .unwrap_err();

        assert_eq!(err.error_code(), "invalid_timestamp");
    }

    #[test]
    fn test_custom_tariff() {
        let calculator = BillCalculator::new(Tariff {
            peak_rate: dec!(2.00),
            off_peak_rate: dec!(1.00),
            reduced_rate: dec!(0.10),
            peak_start_hour: 9,
            peak_end_hour: 17,
            free_minutes: 1,
        });

        // 08:59 off-peak, 09:00 peak; 1 excess minute adjusted by (0.10 - 2.00)
        let total = calculator
            .calculate(["111,13-01-2020 08:59:00,13-01-2020 09:01:00"])
            .unwrap();

        assert_eq!(total, dec!(1.10));
    }
}
