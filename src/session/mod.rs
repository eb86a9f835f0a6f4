//! The calculator form layer.
//!
//! A [`Session`] holds the calculator draft (hourly rate, selected month,
//! budget items), the last submitted [`Breakdown`](crate::models::Breakdown)
//! and the active [`Tab`]. Every change is written through to an injected
//! [`KeyValueStore`](crate::storage::KeyValueStore) under flat keys, one
//! JSON value per key:
//!
//! | Key | Value |
//! |---|---|
//! | `hourlyRate` | JSON string |
//! | `selectedMonth` | zero-based month number |
//! | `budgetItems` | array of budget items |
//! | `breakdown` | the last submitted breakdown |
//! | `tab` | `"calculator"` or `"breakdown"` |

mod state;
mod tab;

pub use state::{BudgetField, PERCENTAGE_ERROR_MESSAGE, Session};
pub use tab::Tab;

/// Store key for the draft hourly rate.
pub const HOURLY_RATE_KEY: &str = "hourlyRate";
/// Store key for the draft month.
pub const SELECTED_MONTH_KEY: &str = "selectedMonth";
/// Store key for the draft budget items.
pub const BUDGET_ITEMS_KEY: &str = "budgetItems";
/// Store key for the last submitted breakdown.
pub const BREAKDOWN_KEY: &str = "breakdown";
/// Store key for the active tab.
pub const TAB_KEY: &str = "tab";
