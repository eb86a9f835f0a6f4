//! Gross wage calculation.

use rust_decimal::Decimal;

use crate::config::DEFAULT_HOURS_PER_DAY;
use crate::error::{EngineError, EngineResult};

/// Computes the gross wage for a number of working days at the default
/// eight-hour day: `hourly_rate * 8 * working_days`.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::compute_gross_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_gross_salary(Decimal::from(250), 9).unwrap(), Decimal::from(18_000));
/// ```
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the wage does not fit in a
/// [`Decimal`].
pub fn compute_gross_salary(hourly_rate: Decimal, working_days: u32) -> EngineResult<Decimal> {
    compute_gross_salary_with_hours(hourly_rate, DEFAULT_HOURS_PER_DAY, working_days)
}

/// Computes `hourly_rate * hours_per_day * working_days`.
pub fn compute_gross_salary_with_hours(
    hourly_rate: Decimal,
    hours_per_day: u32,
    working_days: u32,
) -> EngineResult<Decimal> {
    hourly_rate
        .checked_mul(Decimal::from(hours_per_day))
        .and_then(|daily| daily.checked_mul(Decimal::from(working_days)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "gross wage overflows for hourly rate {} over {} days",
                hourly_rate, working_days
            ),
        })
}
