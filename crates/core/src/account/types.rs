//! Chart-of-accounts data types.

use serde::{Deserialize, Serialize};

use budgetone_shared::types::CategoryId;

/// Category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    /// Income line (revenue).
    Income,
    /// Expense line.
    Expense,
    /// Asset line (e.g., capital expenditure).
    Asset,
    /// Liability line.
    Liability,
}

/// A line item in the chart of accounts.
///
/// A category without a `parent_id` is a group header; it never carries
/// amounts directly. Leaf categories reference their group through
/// `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Account code (e.g., "100.01").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Classification; usually set on group headers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryKind>,
    /// Parent category for leaf lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    /// Declaration order; reports iterate categories in this order.
    pub position: i32,
}

impl Category {
    /// Returns true if this category is a group header (no parent).
    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.parent_id.is_none()
    }
}
