//! Working day detection.
//!
//! A working day is any Monday through Friday. Weekends are never paid.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true if the date is a Monday through Friday.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::is_working_day;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// // 2026-01-12 is a Monday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
/// ```
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the weekdays from `start` to `end`, both inclusive.
///
/// Returns zero when `start` is after `end`.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::count_weekdays;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// assert_eq!(count_weekdays(start, end), 9);
/// ```
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekdays_are_working_days() {
        // 2026-01-12 (Mon) through 2026-01-16 (Fri)
        for day in 12..=16 {
            assert!(is_working_day(make_date(&format!("2026-01-{}", day))));
        }
    }

    #[test]
    fn test_weekend_is_not_working() {
        assert!(!is_working_day(make_date("2026-01-17")));
        assert!(!is_working_day(make_date("2026-01-18")));
    }

    #[test]
    fn test_full_week_has_five_weekdays() {
        assert_eq!(
            count_weekdays(make_date("2026-01-12"), make_date("2026-01-18")),
            5
        );
    }

    #[test]
    fn test_single_day_ranges() {
        assert_eq!(
            count_weekdays(make_date("2026-01-14"), make_date("2026-01-14")),
            1
        );
        assert_eq!(
            count_weekdays(make_date("2026-01-17"), make_date("2026-01-17")),
            0
        );
    }

    #[test]
    fn test_inverted_range_is_zero() {
        assert_eq!(
            count_weekdays(make_date("2026-01-20"), make_date("2026-01-10")),
            0
        );
    }

    #[test]
    fn test_range_across_year_boundary() {
        // 2025-12-26 (Fri) through 2026-01-10 (Sat)
        assert_eq!(
            count_weekdays(make_date("2025-12-26"), make_date("2026-01-10")),
            11
        );
    }

    #[test]
    fn test_second_period_of_march_2026() {
        assert_eq!(
            count_weekdays(make_date("2026-03-11"), make_date("2026-03-25")),
            11
        );
    }
}
