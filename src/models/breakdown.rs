//! Breakdown input snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_amount;

use super::BudgetItem;

/// The inputs a breakdown is calculated from.
///
/// A breakdown is produced by submitting a calculator draft and is never
/// edited afterwards; a new submission replaces it wholesale. It is stored
/// with camelCase field names:
///
/// ```
/// use budget_engine::models::Breakdown;
///
/// let json = r#"{"hourlyRate": "250", "month": 2, "budgetItems": []}"#;
/// let breakdown: Breakdown = serde_json::from_str(json).unwrap();
/// assert_eq!(breakdown.month, 2);
/// assert_eq!(breakdown.hourly_rate, "250");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Hourly rate exactly as entered.
    pub hourly_rate: String,
    /// Zero-based month index (0 = January).
    pub month: u32,
    /// Budget categories, in display order.
    pub budget_items: Vec<BudgetItem>,
}

impl Breakdown {
    /// Creates a new breakdown snapshot.
    pub fn new(hourly_rate: impl Into<String>, month: u32, budget_items: Vec<BudgetItem>) -> Self {
        Self {
            hourly_rate: hourly_rate.into(),
            month,
            budget_items,
        }
    }

    /// Returns the parsed hourly rate (zero when it does not parse).
    pub fn hourly_rate_value(&self) -> Decimal {
        parse_amount(&self.hourly_rate)
    }
}
