//! Pay period boundaries.
//!
//! A month is paid in two windows: the 26th of the previous month through
//! the 10th, then the 11th through the 25th.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriods, Period};

/// Day of the previous month on which the first period starts.
pub const FIRST_PERIOD_START_DAY: u32 = 26;
/// Day of the selected month on which the first period ends.
pub const FIRST_PERIOD_END_DAY: u32 = 10;
/// Day of the selected month on which the second period starts.
pub const SECOND_PERIOD_START_DAY: u32 = 11;
/// Day of the selected month on which the second period ends.
pub const SECOND_PERIOD_END_DAY: u32 = 25;

/// Computes the two pay periods for a zero-based month of a year.
///
/// For January the first period starts on December 26th of the previous
/// year.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month > 11`, or
/// [`EngineError::CalculationError`] when the year is outside the range
/// chrono can represent.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::compute_pay_periods;
/// use chrono::NaiveDate;
///
/// let periods = compute_pay_periods(2026, 0).unwrap();
/// assert_eq!(periods.first_period.start, NaiveDate::from_ymd_opt(2025, 12, 26).unwrap());
/// assert_eq!(periods.first_period.end, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
/// assert_eq!(periods.second_period.start, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
/// assert_eq!(periods.second_period.end, NaiveDate::from_ymd_opt(2026, 1, 25).unwrap());
/// ```
pub fn compute_pay_periods(year: i32, month: u32) -> EngineResult<PayPeriods> {
    if month > 11 {
        return Err(EngineError::InvalidMonth { month });
    }

    // chrono months are 1-based, so the selected month is `month + 1` and
    // the previous month is `month` (or December of last year).
    let selected = month + 1;
    let (previous_year, previous) = if month == 0 {
        (year.saturating_sub(1), 12)
    } else {
        (year, month)
    };

    Ok(PayPeriods {
        first_period: Period {
            start: date(previous_year, previous, FIRST_PERIOD_START_DAY)?,
            end: date(year, selected, FIRST_PERIOD_END_DAY)?,
        },
        second_period: Period {
            start: date(year, selected, SECOND_PERIOD_START_DAY)?,
            end: date(year, selected, SECOND_PERIOD_END_DAY)?,
        },
    })
}

fn date(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::CalculationError {
        message: format!("date {}-{:02}-{:02} is out of range", year, month, day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_march_periods() {
        let periods = compute_pay_periods(2026, 2).unwrap();
        assert_eq!(periods.first_period.start, make_date(2026, 2, 26));
        assert_eq!(periods.first_period.end, make_date(2026, 3, 10));
        assert_eq!(periods.second_period.start, make_date(2026, 3, 11));
        assert_eq!(periods.second_period.end, make_date(2026, 3, 25));
    }

    #[test]
    fn test_january_rolls_back_to_previous_december() {
        let periods = compute_pay_periods(2026, 0).unwrap();
        assert_eq!(periods.first_period.start, make_date(2025, 12, 26));
        assert_eq!(periods.first_period.end, make_date(2026, 1, 10));
    }

    #[test]
    fn test_december_stays_in_year() {
        let periods = compute_pay_periods(2026, 11).unwrap();
        assert_eq!(periods.first_period.start, make_date(2026, 11, 26));
        assert_eq!(periods.second_period.end, make_date(2026, 12, 25));
    }

    #[test]
    fn test_invalid_month_rejected() {
        match compute_pay_periods(2026, 12) {
            Err(EngineError::InvalidMonth { month }) => assert_eq!(month, 12),
            other => panic!("Expected InvalidMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_periods_are_contiguous_for_every_month() {
        for month in 0..12 {
            let periods = compute_pay_periods(2026, month).unwrap();
            assert_eq!(
                periods.first_period.end.succ_opt().unwrap(),
                periods.second_period.start
            );
            assert_eq!(periods.first_period.end.day(), 10);
            assert_eq!(periods.second_period.end.day(), 25);
            assert_eq!(periods.first_period.start.day(), 26);
            assert_eq!(periods.second_period.end.month(), month + 1);
        }
    }

    #[test]
    fn test_leap_year_february_first_period() {
        // March 2024: first period spans the end of a 29-day February
        let periods = compute_pay_periods(2024, 2).unwrap();
        assert_eq!(periods.first_period.len_days(), 14);
    }

    #[test]
    fn test_out_of_range_year_is_calculation_error() {
        assert!(matches!(
            compute_pay_periods(i32::MAX, 5),
            Err(EngineError::CalculationError { .. })
        ));
    }
}
