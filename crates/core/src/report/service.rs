//! Consolidated report computation.

use std::collections::HashMap;

use budgetone_shared::types::{Currency, LocationId};

use crate::account::Category;
use crate::budget::BudgetRecord;
use crate::location::Location;

use super::error::ReportError;
use super::types::{ConsolidatedReport, ConsolidatedRow};

/// Computes the consolidated total per category across all locations.
///
/// Pure and side-effect free; recomputed fresh on each invocation, never
/// cached. Rows follow category declaration order. A category appears only
/// if its total is strictly positive or it has at least one contributing
/// record, so a single record summing to zero still shows up while a
/// category with no records never does.
///
/// # Errors
///
/// Returns `ReportError::MixedCurrencies` if contributing locations disagree
/// on currency, or `ReportError::UnknownLocation` if a record references a
/// location that is not in the location store.
pub fn consolidate(
    categories: &[Category],
    locations: &[Location],
    records: &[BudgetRecord],
) -> Result<ConsolidatedReport, ReportError> {
    let currency_by_location: HashMap<LocationId, Currency> =
        locations.iter().map(|l| (l.id, l.currency)).collect();

    // All contributing locations must report in one currency; summing raw
    // figures across currencies would be meaningless.
    let mut currency: Option<Currency> = None;
    for record in records {
        let record_currency = currency_by_location
            .get(&record.location_id)
            .copied()
            .ok_or(ReportError::UnknownLocation(record.location_id))?;
        match currency {
            None => currency = Some(record_currency),
            Some(existing) if existing != record_currency => {
                return Err(ReportError::MixedCurrencies(existing, record_currency));
            }
            Some(_) => {}
        }
    }

    let rows = categories
        .iter()
        .map(|category| {
            let entries: Vec<&BudgetRecord> = records
                .iter()
                .filter(|r| r.category_id == category.id)
                .collect();
            let total_amount = entries.iter().map(|r| r.amounts.total()).sum();

            ConsolidatedRow {
                category_code: category.code.clone(),
                category_name: category.name.clone(),
                total_amount,
                entries_count: entries.len(),
            }
        })
        .filter(|row| row.total_amount > rust_decimal::Decimal::ZERO || row.entries_count > 0)
        .collect();

    Ok(ConsolidatedReport { currency, rows })
}
