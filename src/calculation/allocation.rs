//! Budget allocation.
//!
//! Net salary is split across budget items by percentage. The engine does
//! not require the percentages to add up to 100; callers that need a
//! meaningful split gate on [`validate_budget`] first.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Allocation, Allocations, BudgetItem};

/// Splits `net` across the items, `net * percentage / 100` each, in item order.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when an amount does not fit in
/// a [`Decimal`].
///
/// # Example
///
/// ```
/// use budget_engine::calculation::allocate;
/// use budget_engine::models::BudgetItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     BudgetItem::new("Needs", Decimal::from(40)),
///     BudgetItem::new("Wants", Decimal::from(60)),
/// ];
/// let allocations = allocate(Decimal::from(10_000), &items).unwrap();
///
/// assert_eq!(allocations.get(&items[0].id), Some(Decimal::from(4_000)));
/// assert_eq!(allocations.get(&items[1].id), Some(Decimal::from(6_000)));
/// ```
pub fn allocate(net: Decimal, items: &[BudgetItem]) -> EngineResult<Allocations> {
    let allocations = items
        .iter()
        .map(|item| {
            let amount = item
                .fraction()
                .and_then(|fraction| net.checked_mul(fraction))
                .ok_or_else(|| EngineError::CalculationError {
                    message: format!(
                        "allocation for '{}' overflows: {}% of {}",
                        item.name, item.percentage, net
                    ),
                })?;
            Ok(Allocation {
                id: item.id.clone(),
                name: item.name.clone(),
                percentage: item.percentage,
                amount,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(Allocations::new(allocations))
}

/// Sums the percentages of the items, or `None` if the sum overflows.
pub fn total_percentage(items: &[BudgetItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.percentage))
}

/// Checks that the percentages add up to exactly 100.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBudget`] carrying the actual total otherwise.
/// A total too large to represent is reported saturated at the decimal limit.
pub fn validate_budget(items: &[BudgetItem]) -> EngineResult<()> {
    match total_percentage(items) {
        Some(total) if total == Decimal::ONE_HUNDRED => Ok(()),
        Some(total) => Err(EngineError::InvalidBudget { total }),
        None => Err(EngineError::InvalidBudget {
            total: items
                .iter()
                .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.percentage)),
        }),
    }
}
