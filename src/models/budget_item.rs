//! Budget item model.
//!
//! A budget item is a named category that receives a percentage share of
//! the month's net salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::calculation::parse_percentage;

/// A named budget category with a percentage share of net salary.
///
/// Percentages are normalized to [`Decimal`] when an item is read. Stored
/// drafts may carry the percentage as a JSON number or as a string (an
/// empty or unparseable string reads as zero).
///
/// # Example
///
/// ```
/// use budget_engine::models::BudgetItem;
/// use rust_decimal::Decimal;
///
/// let item: BudgetItem =
///     serde_json::from_str(r#"{"id": "a", "name": "Rent", "percentage": "40"}"#).unwrap();
/// assert_eq!(item.percentage, Decimal::from(40));
///
/// let blank: BudgetItem =
///     serde_json::from_str(r#"{"id": "b", "name": "", "percentage": ""}"#).unwrap();
/// assert_eq!(blank.percentage, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier for the item.
    pub id: String,
    /// The category name (e.g., "Savings").
    pub name: String,
    /// Share of net salary in percent (0-100).
    #[serde(deserialize_with = "deserialize_percentage")]
    pub percentage: Decimal,
}

impl BudgetItem {
    /// Creates an item with a freshly generated id.
    pub fn new(name: impl Into<String>, percentage: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            percentage,
        }
    }

    /// Creates an unnamed item with a zero share, as added by the form.
    pub fn blank() -> Self {
        Self::new(String::new(), Decimal::ZERO)
    }

    /// Returns the share as a fraction (`percentage / 100`).
    pub fn fraction(&self) -> Option<Decimal> {
        self.percentage.checked_div(Decimal::ONE_HUNDRED)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPercentage {
    Number(Decimal),
    Text(String),
}

fn deserialize_percentage<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPercentage::deserialize(deserializer)? {
        RawPercentage::Number(value) => value,
        RawPercentage::Text(text) => parse_percentage(&text),
    })
}
