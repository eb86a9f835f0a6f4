//! Calculation result models for the budget engine.
//!
//! This module contains the [`BreakdownResult`] type and its associated
//! structures that capture all outputs derived from a [`Breakdown`](super::Breakdown):
//! pay periods, per-period pay, salary totals, per-category allocations and
//! an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayPeriods, Period};

/// Pay detail for one semi-monthly period.
///
/// `net` is `gross + allowance - deductions - tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPay {
    /// The date range this pay covers.
    pub period: Period,
    /// Weekdays inside the range.
    pub working_days: u32,
    /// Hourly wage for every working day.
    pub gross: Decimal,
    /// Fixed allowance added to the period.
    pub allowance: Decimal,
    /// Statutory contributions withheld from the period.
    pub deductions: Decimal,
    /// Withholding tax taken from the period.
    pub tax: Decimal,
    /// Take-home pay for the period.
    pub net: Decimal,
}

/// Salary figures derived from a breakdown.
///
/// `total` is the pre-tax taxable total, not the post-tax figure some
/// payslips call "total"; that post-tax figure is `net`. Allowances and
/// contributions are applied once, inside the two period amounts.
///
/// # Example
///
/// ```
/// use budget_engine::models::Salary;
/// use rust_decimal::Decimal;
///
/// let salary = Salary {
///     first_period: Decimal::from(18_000),
///     second_period: Decimal::from(20_000),
///     total: Decimal::from(40_000),
///     tax: Decimal::from(2_000),
///     net: Decimal::from(38_000),
/// };
/// assert_eq!(salary.first_period + salary.second_period, salary.net);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    /// Take-home pay of the first period (tax is withheld here).
    pub first_period: Decimal,
    /// Take-home pay of the second period.
    pub second_period: Decimal,
    /// Taxable total: both periods after allowances and contributions, before tax.
    pub total: Decimal,
    /// Withholding tax for the month (zero outside the tax table).
    pub tax: Decimal,
    /// Final net salary for the month.
    pub net: Decimal,
}

/// The share of net salary assigned to one budget item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// The id of the budget item.
    pub id: String,
    /// The name of the budget item.
    pub name: String,
    /// The item's percentage.
    pub percentage: Decimal,
    /// `net * percentage / 100`.
    pub amount: Decimal,
}

/// Allocations in budget item order, addressable by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocations(Vec<Allocation>);

impl Allocations {
    /// Wraps a list of allocations.
    pub fn new(allocations: Vec<Allocation>) -> Self {
        Self(allocations)
    }

    /// Returns the amount allocated to the item with the given id.
    pub fn get(&self, id: &str) -> Option<Decimal> {
        self.0.iter().find(|a| a.id == id).map(|a| a.amount)
    }

    /// Sum of every allocated amount, or `None` if the sum overflows.
    pub fn total(&self) -> Option<Decimal> {
        self.0
            .iter()
            .try_fold(Decimal::ZERO, |sum, a| sum.checked_add(a.amount))
    }

    /// Iterates the allocations in item order.
    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.0.iter()
    }

    /// Number of allocations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no allocations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Allocations {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were accepted but look suspicious, such as an
/// hourly rate that did not parse or a budget that does not add up to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Appends a step, numbering it after the existing ones.
    pub fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: impl Into<String>,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning: reasoning.into(),
        });
    }

    /// Appends a warning.
    pub fn warn(&mut self, code: &str, message: impl Into<String>) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message: message.into(),
        });
    }
}

/// Everything derived from one breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownResult {
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Reference year of the calculation.
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
    /// The hourly rate after input parsing.
    pub hourly_rate: Decimal,
    /// The two pay windows.
    pub pay_periods: PayPeriods,
    /// Detail for the first period.
    pub first_period: PeriodPay,
    /// Detail for the second period.
    pub second_period: PeriodPay,
    /// Salary summary.
    pub salary: Salary,
    /// Net salary split across budget items.
    pub allocations: Allocations,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
