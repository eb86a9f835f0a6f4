//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! built-in policy constants used when no configuration directory is given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of paid hours in one working day.
pub const DEFAULT_HOURS_PER_DAY: u32 = 8;

/// Default SSS contribution, deducted from the first period.
pub const DEFAULT_SSS_CONTRIBUTION: Decimal = Decimal::from_parts(1750, 0, 0, false, 0);

/// Default Pag-IBIG (HDMF) contribution, deducted from the second period.
pub const DEFAULT_HDMF_CONTRIBUTION: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Default PhilHealth contribution, deducted from the second period.
pub const DEFAULT_PHILHEALTH_CONTRIBUTION: Decimal = Decimal::from_parts(1625, 0, 0, false, 0);

/// Default allowance added to each pay period.
pub const DEFAULT_PERIOD_ALLOWANCE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Metadata about the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier of the policy (e.g., "ph_semi_monthly").
    pub code: String,
    /// Human-readable name of the policy.
    pub name: String,
    /// Currency symbol used when rendering amounts.
    pub currency_symbol: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "ph_semi_monthly".to_string(),
            name: "Semi-monthly payroll (26th-10th, 11th-25th)".to_string(),
            currency_symbol: "₱".to_string(),
        }
    }
}

/// Fixed statutory contributions withheld every month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// Social Security System contribution (first period).
    pub sss: Decimal,
    /// Pag-IBIG / HDMF contribution (second period).
    pub hdmf: Decimal,
    /// PhilHealth contribution (second period).
    pub philhealth: Decimal,
}

impl StatutoryDeductions {
    /// Amount withheld from the first period.
    pub fn first_period(&self) -> Decimal {
        self.sss
    }

    /// Amount withheld from the second period.
    pub fn second_period(&self) -> Decimal {
        self.hdmf + self.philhealth
    }

    /// Sum of every contribution.
    pub fn total(&self) -> Decimal {
        self.first_period() + self.second_period()
    }
}

impl Default for StatutoryDeductions {
    fn default() -> Self {
        Self {
            sss: DEFAULT_SSS_CONTRIBUTION,
            hdmf: DEFAULT_HDMF_CONTRIBUTION,
            philhealth: DEFAULT_PHILHEALTH_CONTRIBUTION,
        }
    }
}

/// Fixed allowances added on top of wages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAllowances {
    /// Allowance paid with the first period.
    pub first_period: Decimal,
    /// Allowance paid with the second period.
    pub second_period: Decimal,
}

impl Default for PeriodAllowances {
    fn default() -> Self {
        Self {
            first_period: DEFAULT_PERIOD_ALLOWANCE,
            second_period: DEFAULT_PERIOD_ALLOWANCE,
        }
    }
}

/// One row of the withholding tax table.
///
/// A bracket applies when `min <= income <= max`. Tax is
/// `base + (income - min) * marginal_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lowest taxable income covered by this bracket (inclusive).
    pub min: Decimal,
    /// Highest taxable income covered by this bracket (inclusive).
    pub max: Decimal,
    /// Fixed tax at the lower bound.
    pub base: Decimal,
    /// Rate applied to the excess over `min`.
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    /// Returns true if the income falls inside this bracket.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.min && income <= self.max
    }
}

/// The built-in two-bracket withholding table.
///
/// Incomes outside both brackets (and in the gap between them) are not taxed.
pub fn default_tax_table() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            min: Decimal::new(33333, 0),
            max: Decimal::new(66666, 0),
            base: Decimal::new(1875, 0),
            marginal_rate: Decimal::new(20, 2),
        },
        TaxBracket {
            min: Decimal::new(66667, 0),
            max: Decimal::new(166666, 0),
            base: Decimal::new(845180, 2),
            marginal_rate: Decimal::new(25, 2),
        },
    ]
}

/// A budget category offered to new drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBudgetItem {
    /// Category name.
    pub name: String,
    /// Share of net salary, in percent.
    pub percentage: Decimal,
}

/// The built-in 40/40/20 split.
pub fn default_budget_split() -> Vec<DefaultBudgetItem> {
    [("Needs", 40), ("Wants", 40), ("Savings", 20)]
        .into_iter()
        .map(|(name, percentage)| DefaultBudgetItem {
            name: name.to_string(),
            percentage: Decimal::from(percentage),
        })
        .collect()
}

/// Policy configuration file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Paid hours per working day.
    pub hours_per_day: u32,
    /// Statutory deductions.
    pub deductions: StatutoryDeductions,
    /// Period allowances.
    pub allowances: PeriodAllowances,
    /// Budget split offered to new drafts.
    #[serde(default = "default_budget_split")]
    pub default_budget: Vec<DefaultBudgetItem>,
}

/// Tax table configuration file structure (`tax_table.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableFile {
    /// The brackets, in ascending order of income.
    pub brackets: Vec<TaxBracket>,
}

/// The complete payroll policy.
///
/// `PayrollPolicy::default()` carries the fixed policy constants; a
/// [`ConfigLoader`](super::ConfigLoader) can restate or override them
/// from YAML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollPolicy {
    metadata: PolicyMetadata,
    hours_per_day: u32,
    deductions: StatutoryDeductions,
    allowances: PeriodAllowances,
    tax_table: Vec<TaxBracket>,
    default_budget: Vec<DefaultBudgetItem>,
}

impl PayrollPolicy {
    /// Creates a new PayrollPolicy from its component parts.
    pub fn new(
        metadata: PolicyMetadata,
        hours_per_day: u32,
        deductions: StatutoryDeductions,
        allowances: PeriodAllowances,
        tax_table: Vec<TaxBracket>,
        default_budget: Vec<DefaultBudgetItem>,
    ) -> Self {
        let mut sorted_table = tax_table;
        sorted_table.sort_by(|a, b| a.min.cmp(&b.min));
        Self {
            metadata,
            hours_per_day,
            deductions,
            allowances,
            tax_table: sorted_table,
            default_budget,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the paid hours per working day.
    pub fn hours_per_day(&self) -> u32 {
        self.hours_per_day
    }

    /// Returns the statutory deductions.
    pub fn deductions(&self) -> &StatutoryDeductions {
        &self.deductions
    }

    /// Returns the period allowances.
    pub fn allowances(&self) -> &PeriodAllowances {
        &self.allowances
    }

    /// Returns the tax brackets, sorted by lower bound.
    pub fn tax_table(&self) -> &[TaxBracket] {
        &self.tax_table
    }

    /// Returns the budget split offered to new drafts.
    pub fn default_budget(&self) -> &[DefaultBudgetItem] {
        &self.default_budget
    }
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self::new(
            PolicyMetadata::default(),
            DEFAULT_HOURS_PER_DAY,
            StatutoryDeductions::default(),
            PeriodAllowances::default(),
            default_tax_table(),
            default_budget_split(),
        )
    }
}
