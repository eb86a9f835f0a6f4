//! Core data models for the budget engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod budget_item;
mod calculation_result;
mod pay_period;

pub use breakdown::Breakdown;
pub use budget_item::BudgetItem;
pub use calculation_result::{
    Allocation, Allocations, AuditStep, AuditTrace, AuditWarning, BreakdownResult, PeriodPay,
    Salary,
};
pub use pay_period::{PayPeriods, Period};
