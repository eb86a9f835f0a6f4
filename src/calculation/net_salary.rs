//! Net salary calculation.
//!
//! Each period receives its allowance and loses its statutory
//! contributions: SSS comes out of the first period, HDMF and PhilHealth
//! out of the second. The month's taxable total is the sum of both
//! periods; the resulting tax is withheld from the first period.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::Salary;

use super::tax::compute_tax_with_table;

/// Computes the salary summary from the gross wage of each period.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when a period total does not
/// fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use budget_engine::calculation::compute_net_salary;
/// use budget_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = compute_net_salary(
///     Decimal::from(18_000),
///     Decimal::from(22_000),
///     &PayrollPolicy::default(),
/// )
/// .unwrap();
///
/// // (18000 + 1000 - 1750) + (22000 + 1000 - 1825)
/// assert_eq!(salary.total, Decimal::from(38_425));
/// assert_eq!(salary.tax, Decimal::from_str("2893.40").unwrap());
/// assert_eq!(salary.net, Decimal::from_str("35531.60").unwrap());
/// ```
pub fn compute_net_salary(
    first_period_gross: Decimal,
    second_period_gross: Decimal,
    policy: &PayrollPolicy,
) -> EngineResult<Salary> {
    let allowances = policy.allowances();
    let deductions = policy.deductions();

    let first_period = take_home(
        first_period_gross,
        allowances.first_period,
        deductions.first_period(),
    )?;
    let second_period = take_home(
        second_period_gross,
        allowances.second_period,
        deductions.second_period(),
    )?;
    let total = first_period
        .checked_add(second_period)
        .ok_or_else(|| overflow("taxable total"))?;

    let tax = compute_tax_with_table(policy.tax_table(), total).unwrap_or(Decimal::ZERO);

    Ok(Salary {
        first_period: first_period
            .checked_sub(tax)
            .ok_or_else(|| overflow("first period"))?,
        second_period,
        total,
        tax,
        net: total.checked_sub(tax).ok_or_else(|| overflow("net salary"))?,
    })
}

fn take_home(gross: Decimal, allowance: Decimal, deductions: Decimal) -> EngineResult<Decimal> {
    gross
        .checked_add(allowance)
        .and_then(|amount| amount.checked_sub(deductions))
        .ok_or_else(|| overflow("period take-home"))
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} does not fit in a decimal", what),
    }
}
