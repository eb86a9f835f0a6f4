//! Breakdown calculation.
//!
//! Runs every calculation step for one [`Breakdown`] and records each
//! decision in an [`AuditTrace`].

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::models::{AuditTrace, Breakdown, BreakdownResult, Period, PeriodPay};

use super::{
    allocate, compute_gross_salary_with_hours, compute_net_salary, compute_pay_periods,
    count_weekdays, find_bracket, parse_amount, total_percentage, try_parse_amount,
};

/// Calculates pay periods, salary and allocations for a breakdown.
///
/// `year` is the calendar year the breakdown's month belongs to. Percentages
/// that do not sum to 100 are accepted and reported as an audit warning.
///
/// # Errors
///
/// Fails when the month index is out of range, or with
/// [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// when an amount grows past what a [`Decimal`] can hold.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::calculate_breakdown;
/// use budget_engine::config::PayrollPolicy;
/// use budget_engine::models::{Breakdown, BudgetItem};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = Breakdown::new(
///     "250",
///     2,
///     vec![BudgetItem::new("Everything", Decimal::from(100))],
/// );
/// let result = calculate_breakdown(&breakdown, 2026, &PayrollPolicy::default()).unwrap();
///
/// assert_eq!(result.first_period.working_days, 9);
/// assert_eq!(result.second_period.working_days, 11);
/// assert_eq!(result.salary.net, Decimal::from_str("35531.60").unwrap());
/// assert_eq!(result.allocations.total(), Some(result.salary.net));
/// ```
pub fn calculate_breakdown(
    breakdown: &Breakdown,
    year: i32,
    policy: &PayrollPolicy,
) -> EngineResult<BreakdownResult> {
    let mut trace = AuditTrace::default();

    let hourly_rate = parse_amount(&breakdown.hourly_rate);
    match try_parse_amount(&breakdown.hourly_rate) {
        None if !breakdown.hourly_rate.trim().is_empty() => trace.warn(
            "UNPARSEABLE_RATE",
            format!("Hourly rate '{}' is not a number; using 0", breakdown.hourly_rate),
        ),
        Some(raw) if raw.is_sign_negative() && !raw.is_zero() => trace.warn(
            "NEGATIVE_RATE",
            format!("Hourly rate '{}' is negative; using 0", breakdown.hourly_rate),
        ),
        _ => {}
    }
    trace.record(
        "hourly_rate",
        "Hourly Rate",
        serde_json::json!({ "input": breakdown.hourly_rate }),
        serde_json::json!({ "hourly_rate": hourly_rate.to_string() }),
        format!("Hourly rate parsed as {}", hourly_rate),
    );

    let pay_periods = compute_pay_periods(year, breakdown.month)?;
    trace.record(
        "pay_periods",
        "Pay Periods",
        serde_json::json!({ "year": year, "month": breakdown.month }),
        serde_json::to_value(pay_periods)?,
        format!(
            "First period {} to {} ({} days), second period {} to {} ({} days)",
            pay_periods.first_period.start,
            pay_periods.first_period.end,
            pay_periods.first_period.len_days(),
            pay_periods.second_period.start,
            pay_periods.second_period.end,
            pay_periods.second_period.len_days()
        ),
    );

    let first_days = count_working_days(&mut trace, "first", pay_periods.first_period);
    let second_days = count_working_days(&mut trace, "second", pay_periods.second_period);

    let hours_per_day = policy.hours_per_day();
    let first_gross = compute_gross_salary_with_hours(hourly_rate, hours_per_day, first_days)?;
    let second_gross = compute_gross_salary_with_hours(hourly_rate, hours_per_day, second_days)?;
    trace.record(
        "gross_salary",
        "Gross Salary",
        serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "hours_per_day": hours_per_day,
            "first_period_days": first_days,
            "second_period_days": second_days
        }),
        serde_json::json!({
            "first_period": first_gross.to_string(),
            "second_period": second_gross.to_string()
        }),
        format!(
            "{} x {}h x {} days = {}; {} x {}h x {} days = {}",
            hourly_rate,
            hours_per_day,
            first_days,
            first_gross,
            hourly_rate,
            hours_per_day,
            second_days,
            second_gross
        ),
    );

    let salary = compute_net_salary(first_gross, second_gross, policy)?;
    let bracket = find_bracket(policy.tax_table(), salary.total);
    trace.record(
        "withholding_tax",
        "Withholding Tax",
        serde_json::json!({ "taxable_total": salary.total.to_string() }),
        serde_json::json!({
            "bracket": bracket.map(|b| serde_json::json!({
                "min": b.min.to_string(),
                "max": b.max.to_string()
            })),
            "tax": salary.tax.to_string()
        }),
        match bracket {
            Some(b) => format!(
                "{} falls in [{}, {}]: {} + ({} - {}) x {} = {}",
                salary.total, b.min, b.max, b.base, salary.total, b.min, b.marginal_rate, salary.tax
            ),
            None => format!("{} is outside every tax bracket; no tax", salary.total),
        },
    );

    let allowances = policy.allowances();
    let deductions = policy.deductions();
    let first_period = PeriodPay {
        period: pay_periods.first_period,
        working_days: first_days,
        gross: first_gross,
        allowance: allowances.first_period,
        deductions: deductions.first_period(),
        tax: salary.tax,
        net: salary.first_period,
    };
    let second_period = PeriodPay {
        period: pay_periods.second_period,
        working_days: second_days,
        gross: second_gross,
        allowance: allowances.second_period,
        deductions: deductions.second_period(),
        tax: Decimal::ZERO,
        net: salary.second_period,
    };
    trace.record(
        "net_salary",
        "Net Salary",
        serde_json::json!({
            "allowances": (allowances.first_period + allowances.second_period).to_string(),
            "sss": deductions.sss.to_string(),
            "hdmf": deductions.hdmf.to_string(),
            "philhealth": deductions.philhealth.to_string(),
            "tax": salary.tax.to_string()
        }),
        serde_json::json!({
            "first_period": salary.first_period.to_string(),
            "second_period": salary.second_period.to_string(),
            "net": salary.net.to_string()
        }),
        format!(
            "Net salary {} = taxable total {} - tax {}",
            salary.net, salary.total, salary.tax
        ),
    );

    let budget_total = total_percentage(&breakdown.budget_items);
    match budget_total {
        Some(total) if total == Decimal::ONE_HUNDRED => {}
        Some(total) => trace.warn(
            "BUDGET_NOT_100",
            format!("Budget percentages add up to {}%, not 100%", total),
        ),
        None => trace.warn(
            "BUDGET_NOT_100",
            "Budget percentages add up to more than a decimal can hold",
        ),
    }
    let allocations = allocate(salary.net, &breakdown.budget_items)?;
    trace.record(
        "allocation",
        "Budget Allocation",
        serde_json::json!({
            "net": salary.net.to_string(),
            "items": breakdown.budget_items.len(),
            "total_percentage": budget_total.map(|total| total.to_string())
        }),
        serde_json::to_value(&allocations)?,
        match allocations.total() {
            Some(total) => format!("Allocated {} across {} items", total, allocations.len()),
            None => format!(
                "Allocated across {} items; the sum exceeds the decimal range",
                allocations.len()
            ),
        },
    );

    info!(
        year,
        month = breakdown.month,
        net = %salary.net,
        tax = %salary.tax,
        items = allocations.len(),
        "Breakdown calculated"
    );

    Ok(BreakdownResult {
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year,
        month: breakdown.month,
        hourly_rate,
        pay_periods,
        first_period,
        second_period,
        salary,
        allocations,
        audit_trace: trace,
    })
}

/// Calculates a breakdown for the current local calendar year.
pub fn calculate_breakdown_for_current_year(
    breakdown: &Breakdown,
    policy: &PayrollPolicy,
) -> EngineResult<BreakdownResult> {
    calculate_breakdown(breakdown, Local::now().year(), policy)
}

fn count_working_days(trace: &mut AuditTrace, label: &str, period: Period) -> u32 {
    let days = count_weekdays(period.start, period.end);
    debug!(period = label, start = %period.start, end = %period.end, days, "Counted working days");
    trace.record(
        &format!("{}_period_working_days", label),
        "Working Days",
        serde_json::to_value(period).unwrap_or_default(),
        serde_json::json!({ "working_days": days }),
        format!(
            "{} weekdays between {} and {} inclusive",
            days, period.start, period.end
        ),
    );
    days
}
