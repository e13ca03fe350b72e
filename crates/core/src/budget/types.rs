//! Budget ledger data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use budgetone_shared::types::{BudgetRecordId, CategoryId, LocationId};

use super::error::BudgetError;

/// Number of monthly slots per record; index 0 is the first fiscal month.
pub const MONTHS_PER_YEAR: usize = 12;

/// The amounts carried by a budget record.
///
/// Persisted data may still contain the legacy shape: a single scalar
/// `amount` with no monthly breakdown. It is normalized to `Monthly` on
/// first write and never re-introduced.
///
/// The serde representation matches the persisted JSON of both shapes: a
/// `monthly_amounts` array field for the current shape, a scalar `amount`
/// field for the legacy one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetAmounts {
    /// Current shape: twelve monthly slots.
    Monthly {
        /// Amounts by month, index 0 = first fiscal month.
        monthly_amounts: [Decimal; MONTHS_PER_YEAR],
    },
    /// Legacy shape: one scalar, no monthly breakdown.
    Legacy {
        /// The legacy scalar amount.
        amount: Decimal,
    },
}

impl BudgetAmounts {
    /// All-zero monthly amounts.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self::Monthly {
            monthly_amounts: [Decimal::ZERO; MONTHS_PER_YEAR],
        }
    }

    /// Returns true for the legacy scalar shape.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy { .. })
    }

    /// Normalizes to the monthly shape.
    ///
    /// A legacy scalar moves into month index 0; the remaining slots are
    /// zero. Already-monthly amounts pass through unchanged.
    #[must_use]
    pub fn normalize(self) -> [Decimal; MONTHS_PER_YEAR] {
        match self {
            Self::Monthly { monthly_amounts } => monthly_amounts,
            Self::Legacy { amount } => {
                let mut months = [Decimal::ZERO; MONTHS_PER_YEAR];
                months[0] = amount;
                months
            }
        }
    }

    /// Sum of all slots; a legacy record contributes its scalar once.
    #[must_use]
    pub fn total(&self) -> Decimal {
        match self {
            Self::Monthly { monthly_amounts } => monthly_amounts.iter().copied().sum(),
            Self::Legacy { amount } => *amount,
        }
    }
}

impl Default for BudgetAmounts {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Validates a month index against `[0, 12)`.
///
/// # Errors
///
/// Returns `BudgetError::MonthOutOfRange` for indexes `>= 12`.
pub const fn validate_month_index(month_index: usize) -> Result<(), BudgetError> {
    if month_index < MONTHS_PER_YEAR {
        Ok(())
    } else {
        Err(BudgetError::MonthOutOfRange(month_index))
    }
}

/// Sets one monthly slot, normalizing a legacy shape first.
///
/// This is the single point-update primitive shared by every store variant;
/// the result is always the monthly shape.
///
/// # Errors
///
/// Returns `BudgetError::MonthOutOfRange` without touching the amounts if
/// the index is invalid.
pub fn set_month(
    amounts: BudgetAmounts,
    month_index: usize,
    amount: Decimal,
) -> Result<BudgetAmounts, BudgetError> {
    validate_month_index(month_index)?;
    let mut monthly_amounts = amounts.normalize();
    monthly_amounts[month_index] = amount;
    Ok(BudgetAmounts::Monthly { monthly_amounts })
}

/// One budget record per distinct `(location, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Record ID.
    pub id: BudgetRecordId,
    /// Owning location.
    pub location_id: LocationId,
    /// Referenced category.
    pub category_id: CategoryId,
    /// The monthly (or legacy scalar) amounts.
    #[serde(flatten)]
    pub amounts: BudgetAmounts,
    /// Set once, when the record is first created.
    pub created_at: DateTime<Utc>,
    /// Stamped on every successful write.
    pub updated_at: DateTime<Utc>,
}

impl BudgetRecord {
    /// Creates a fresh all-zero record for a `(location, category)` pair.
    #[must_use]
    pub fn new(location_id: LocationId, category_id: CategoryId, now: DateTime<Utc>) -> Self {
        Self {
            id: BudgetRecordId::new(),
            location_id,
            category_id,
            amounts: BudgetAmounts::zeroed(),
            created_at: now,
            updated_at: now,
        }
    }
}
