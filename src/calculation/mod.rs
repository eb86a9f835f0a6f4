//! Calculation logic for the budget engine.
//!
//! This module contains the pure calculation functions: input parsing,
//! pay period boundaries, working day counting, gross wage, withholding
//! tax, net salary, budget allocation, and the breakdown calculation that
//! ties them together.

mod allocation;
mod breakdown;
mod gross_salary;
mod input;
mod net_salary;
mod pay_periods;
mod tax;
mod working_days;

pub use allocation::{allocate, total_percentage, validate_budget};
pub use breakdown::{calculate_breakdown, calculate_breakdown_for_current_year};
pub use gross_salary::{compute_gross_salary, compute_gross_salary_with_hours};
pub use input::{parse_amount, parse_percentage, try_parse_amount};
pub use net_salary::compute_net_salary;
pub use pay_periods::{
    FIRST_PERIOD_END_DAY, FIRST_PERIOD_START_DAY, SECOND_PERIOD_END_DAY, SECOND_PERIOD_START_DAY,
    compute_pay_periods,
};
pub use tax::{compute_tax, compute_tax_with_table, find_bracket};
pub use working_days::{count_weekdays, is_working_day};
