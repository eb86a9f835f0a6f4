//! Withholding tax lookup.
//!
//! The table is a simplified two-bracket approximation of a progressive
//! schedule. It is not a complete table: income below the first bracket,
//! above the last one, or in the gap between brackets yields no tax.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, default_tax_table};

/// Finds the bracket that covers the given taxable income.
pub fn find_bracket(table: &[TaxBracket], income: Decimal) -> Option<&TaxBracket> {
    table.iter().find(|bracket| bracket.contains(income))
}

/// Computes the month's withholding tax using the built-in table.
///
/// - `[33333, 66666]`: `1875 + (income - 33333) * 0.20`
/// - `[66667, 166666]`: `8451.80 + (income - 66667) * 0.25`
///
/// Returns `None` when no bracket covers the income.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::compute_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(compute_tax(Decimal::from(50_000)), Some(Decimal::from_str("5208.40").unwrap()));
/// assert_eq!(compute_tax(Decimal::from(10_000)), None);
/// ```
pub fn compute_tax(total_taxable: Decimal) -> Option<Decimal> {
    compute_tax_with_table(&default_tax_table(), total_taxable)
}

/// Computes the withholding tax against an explicit table.
pub fn compute_tax_with_table(table: &[TaxBracket], total_taxable: Decimal) -> Option<Decimal> {
    find_bracket(table, total_taxable)
        .map(|bracket| bracket.base + (total_taxable - bracket.min) * bracket.marginal_rate)
}
