//! Rendering helpers for amounts, dates and breakdown reports.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BreakdownResult, Period};

/// Currency symbol of the built-in policy.
pub const CURRENCY_SYMBOL: &str = "₱";

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a zero-based month.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// Renders an amount with the currency symbol, grouped thousands and at
/// most two fraction digits.
///
/// # Example
///
/// ```
/// use budget_engine::format::format_peso;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_peso(Decimal::from_str("35531.60").unwrap()), "₱ 35,531.6");
/// assert_eq!(format_peso(Decimal::from_str("1234567.891").unwrap()), "₱ 1,234,567.89");
/// assert_eq!(format_peso(Decimal::from(-1575)), "₱ -1,575");
/// ```
pub fn format_peso(amount: Decimal) -> String {
    format_money(CURRENCY_SYMBOL, amount)
}

/// Like [`format_peso`], with a caller-chosen currency symbol.
pub fn format_money(currency_symbol: &str, amount: Decimal) -> String {
    format!("{} {}", currency_symbol, group_thousands(amount))
}

fn group_thousands(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Renders a date as `Mar 10, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Renders a period as `Feb 26, 2026 - Mar 10, 2026`.
pub fn format_period(period: &Period) -> String {
    format!("{} - {}", format_date(period.start), format_date(period.end))
}

/// The breakdown as plain text: net salary, both periods with their date
/// ranges, then every budget category.
///
/// Amounts are prefixed with `currency_symbol`, normally the policy's
/// [`currency_symbol`](crate::config::PolicyMetadata::currency_symbol).
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// The calculated breakdown.
    pub result: &'a BreakdownResult,
    /// Symbol placed before every amount.
    pub currency_symbol: &'a str,
}

impl Report<'_> {
    fn money(&self, amount: Decimal) -> String {
        format_money(self.currency_symbol, amount)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "Net Salary")?;
        writeln!(f, "  {}", self.money(result.salary.net))?;
        if let Some(name) = month_name(result.month) {
            writeln!(f, "  Month of {} {}", name, result.year)?;
        }
        writeln!(f)?;

        for (label, pay) in [
            ("First Period", &result.first_period),
            ("Second Period", &result.second_period),
        ] {
            writeln!(f, "{}", label)?;
            writeln!(f, "  {}", self.money(pay.net))?;
            writeln!(
                f,
                "  {} ({} working days)",
                format_period(&pay.period),
                pay.working_days
            )?;
            writeln!(f)?;
        }

        writeln!(f, "Tax: {}", self.money(result.salary.tax))?;
        writeln!(f)?;

        for allocation in &result.allocations {
            writeln!(f, "{}", allocation.name)?;
            writeln!(f, "  {}", self.money(allocation.amount))?;
            writeln!(f, "  {}% Allocated", allocation.percentage.normalize())?;
        }

        for warning in &result.audit_trace.warnings {
            writeln!(f, "warning: {}", warning.message)?;
        }

        Ok(())
    }
}

/// Renders a breakdown [`Report`] to a string.
pub fn render_report(result: &BreakdownResult, currency_symbol: &str) -> String {
    Report {
        result,
        currency_symbol,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_breakdown;
    use crate::config::PayrollPolicy;
    use crate::models::{Breakdown, BudgetItem};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }

    #[test]
    fn test_format_peso_small_amounts() {
        assert_eq!(format_peso(dec("0")), "₱ 0");
        assert_eq!(format_peso(dec("999")), "₱ 999");
        assert_eq!(format_peso(dec("1000")), "₱ 1,000");
        assert_eq!(format_peso(dec("7106.32")), "₱ 7,106.32");
    }

    #[test]
    fn test_format_peso_rounds_to_cents() {
        assert_eq!(format_peso(dec("0.005")), "₱ 0.01");
        assert_eq!(format_peso(dec("2893.404")), "₱ 2,893.4");
    }

    #[test]
    fn test_format_peso_trims_trailing_zeros() {
        assert_eq!(format_peso(dec("21175.00")), "₱ 21,175");
    }

    #[test]
    fn test_format_date_and_period() {
        let period = Period {
            start: NaiveDate::from_ymd_opt(2025, 12, 26).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        };
        assert_eq!(format_date(period.end), "Jan 10, 2026");
        assert_eq!(format_period(&period), "Dec 26, 2025 - Jan 10, 2026");
    }

    #[test]
    fn test_render_report() {
        let breakdown = Breakdown::new(
            "250",
            2,
            vec![
                BudgetItem::new("Needs", dec("40")),
                BudgetItem::new("Wants", dec("40")),
                BudgetItem::new("Savings", dec("20")),
            ],
        );
        let result = calculate_breakdown(&breakdown, 2026, &PayrollPolicy::default()).unwrap();
        let report = render_report(&result, CURRENCY_SYMBOL);

        assert!(report.contains("₱ 35,531.6"));
        assert!(report.contains("Month of March 2026"));
        assert!(report.contains("Feb 26, 2026 - Mar 10, 2026 (9 working days)"));
        assert!(report.contains("Mar 11, 2026 - Mar 25, 2026 (11 working days)"));
        assert!(report.contains("Savings\n  ₱ 7,106.32\n  20% Allocated"));
        assert!(!report.contains("warning:"));
    }

    #[test]
    fn test_render_report_uses_given_symbol() {
        let breakdown = Breakdown::new("250", 2, vec![BudgetItem::new("All", dec("100"))]);
        let result = calculate_breakdown(&breakdown, 2026, &PayrollPolicy::default()).unwrap();
        let report = render_report(&result, "PHP");

        assert!(report.contains("  PHP 35,531.6\n"));
        assert!(report.contains("Tax: PHP 2,893.4"));
        assert!(!report.contains(CURRENCY_SYMBOL));
    }

    #[test]
    fn test_format_money_with_symbol() {
        assert_eq!(format_money("$", dec("1234.5")), "$ 1,234.5");
    }
}
