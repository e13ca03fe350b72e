//! Budget repository: the relational variant of the budget ledger.
//!
//! One row per `(location_id, category_id)` pair (unique index). The upsert
//! updates only the affected row inside a transaction holding a `FOR UPDATE`
//! row lock, so two writers on different keys never clobber each other and
//! writers on the same key serialize instead of losing updates.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use budgetone_core::budget::{
    BudgetAmounts, BudgetRecord, MONTHS_PER_YEAR, set_month, validate_month_index,
};
use budgetone_shared::types::{BudgetRecordId, CategoryId, LocationId};

use crate::entities::budgets;

/// Error types for budget ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Month index outside `[0, 12)`.
    #[error(transparent)]
    Validation(#[from] budgetone_core::budget::BudgetError),

    /// A stored `monthly_amounts` payload failed to parse.
    #[error("corrupt monthly_amounts payload on record {0}: {1}")]
    CorruptRecord(Uuid, String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl BudgetError {
    /// True when the write collided with the `(location_id, category_id)`
    /// unique index, i.e. a concurrent first write created the row between
    /// our lookup and our insert. Callers should surface this as a conflict
    /// rather than a storage failure.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::Database(db_err)
                if matches!(db_err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
        )
    }
}

/// Budget repository for ledger operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists budget records, optionally filtered to one location, in no
    /// guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored payload is corrupt.
    pub async fn list_records(
        &self,
        location_id: Option<Uuid>,
    ) -> Result<Vec<BudgetRecord>, BudgetError> {
        let mut query = budgets::Entity::find();
        if let Some(location_id) = location_id {
            query = query.filter(budgets::Column::LocationId.eq(location_id));
        }
        let models = query.all(&self.db).await?;

        models.into_iter().map(record_from_model).collect()
    }

    /// Sets one monthly amount for a `(location, category)` pair.
    ///
    /// Creates an all-zero record on first entry for the pair. A legacy
    /// scalar row migrates (scalar into month 0, scalar column cleared)
    /// before the new value is applied. `updated_at` is stamped on every
    /// write, `created_at` only on creation. Idempotent per call.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Validation` without touching the store if the
    /// month index is invalid; `BudgetError::Database` if the transaction
    /// fails (including a duplicate-key conflict from a concurrent creation,
    /// which the unique index turns into an error instead of a second row).
    pub async fn upsert_monthly_amount(
        &self,
        location_id: Uuid,
        category_id: Uuid,
        month_index: usize,
        amount: Decimal,
    ) -> Result<BudgetRecord, BudgetError> {
        // Reject before opening a transaction so nothing is created or
        // altered on a bad index.
        validate_month_index(month_index)?;

        let txn = self.db.begin().await?;

        let existing = budgets::Entity::find()
            .filter(budgets::Column::LocationId.eq(location_id))
            .filter(budgets::Column::CategoryId.eq(category_id))
            .lock_exclusive()
            .one(&txn)
            .await?;

        let now = Utc::now();
        let model = match existing {
            Some(model) => {
                let amounts = amounts_from_model(&model)?;
                let updated = set_month(amounts, month_index, amount)?;

                let mut active: budgets::ActiveModel = model.into();
                active.amount = Set(None);
                active.monthly_amounts = Set(Some(monthly_json(&updated)));
                active.updated_at = Set(now.into());
                active.update(&txn).await?
            }
            None => {
                let amounts = set_month(BudgetAmounts::zeroed(), month_index, amount)?;

                let active = budgets::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    location_id: Set(location_id),
                    category_id: Set(category_id),
                    amount: Set(None),
                    monthly_amounts: Set(Some(monthly_json(&amounts))),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                };
                active.insert(&txn).await?
            }
        };

        txn.commit().await?;
        record_from_model(model)
    }
}

/// Serializes monthly amounts for the jsonb column.
fn monthly_json(amounts: &BudgetAmounts) -> serde_json::Value {
    let months = amounts.normalize();
    // Decimal serializes as a JSON string, which survives jsonb round trips
    // without precision loss.
    serde_json::to_value(months).unwrap_or(serde_json::Value::Null)
}

/// Reads the amounts out of a row, preserving the legacy shape.
fn amounts_from_model(model: &budgets::Model) -> Result<BudgetAmounts, BudgetError> {
    match (&model.monthly_amounts, model.amount) {
        (Some(json), _) => serde_json::from_value::<[Decimal; MONTHS_PER_YEAR]>(json.clone())
            .map(|monthly_amounts| BudgetAmounts::Monthly { monthly_amounts })
            .map_err(|e| BudgetError::CorruptRecord(model.id, e.to_string())),
        (None, Some(amount)) => Ok(BudgetAmounts::Legacy { amount }),
        (None, None) => Ok(BudgetAmounts::zeroed()),
    }
}

/// Maps a database row to the domain type.
fn record_from_model(model: budgets::Model) -> Result<BudgetRecord, BudgetError> {
    let amounts = amounts_from_model(&model)?;

    Ok(BudgetRecord {
        id: BudgetRecordId::from_uuid(model.id),
        location_id: LocationId::from_uuid(model.location_id),
        category_id: CategoryId::from_uuid(model.category_id),
        amounts,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "budget_integration_tests.rs"]
mod integration_tests;
