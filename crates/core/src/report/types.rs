//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use budgetone_shared::types::Currency;

/// One consolidated row per category with activity.
///
/// Derived, never persisted; recomputed on every report view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRow {
    /// Account code of the category.
    pub category_code: String,
    /// Category display name.
    pub category_name: String,
    /// Total across all locations and months.
    pub total_amount: Decimal,
    /// Number of budget records contributing to this category.
    pub entries_count: usize,
}

/// The cross-location, per-category total view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    /// The single currency all contributing locations report in;
    /// `None` when nothing contributes.
    pub currency: Option<Currency>,
    /// Rows in category declaration order.
    pub rows: Vec<ConsolidatedRow>,
}
