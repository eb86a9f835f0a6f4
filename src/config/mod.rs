//! Payroll policy configuration.
//!
//! This module provides the [`PayrollPolicy`] used by the calculation engine
//! (paid hours per day, statutory deductions, period allowances, the
//! withholding tax table and the default budget split) and a loader that
//! reads it from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use budget_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph_semi_monthly").unwrap();
//! println!("Loaded policy: {}", config.policy().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_HDMF_CONTRIBUTION, DEFAULT_HOURS_PER_DAY, DEFAULT_PERIOD_ALLOWANCE,
    DEFAULT_PHILHEALTH_CONTRIBUTION, DEFAULT_SSS_CONTRIBUTION, DefaultBudgetItem, PayrollPolicy,
    PeriodAllowances, PolicyMetadata, StatutoryDeductions, TaxBracket, default_budget_split,
    default_tax_table,
};
