//! Pay period models.
//!
//! This module contains the [`Period`] date range and the [`PayPeriods`]
//! pair that splits a month into two semi-monthly windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range.
///
/// # Example
///
/// ```
/// use budget_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period {
///     start: NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
/// };
///
/// assert_eq!(period.len_days(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The first day of the period (inclusive).
    pub start: NaiveDate,
    /// The last day of the period (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Number of calendar days covered, counting both ends.
    pub fn len_days(&self) -> u32 {
        if self.end < self.start {
            return 0;
        }
        ((self.end - self.start).num_days() + 1) as u32
    }
}

/// The two semi-monthly pay windows of a month.
///
/// The first period runs from the 26th of the previous month to the 10th;
/// the second from the 11th to the 25th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriods {
    /// 26th of the previous month through the 10th.
    pub first_period: Period,
    /// 11th through the 25th.
    pub second_period: Period,
}
