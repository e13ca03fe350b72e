//! In-memory budget ledger.
//!
//! This is the flat key-value store variant: the whole record collection
//! lives in memory and serializes to a single JSON array, with single-writer
//! semantics. The relational variant in `budgetone-db` shares the same
//! point-update primitive (`set_month`) against individual rows.

use chrono::Utc;
use rust_decimal::Decimal;

use budgetone_shared::types::{CategoryId, LocationId};

use super::error::BudgetError;
use super::types::{BudgetRecord, set_month};

/// An explicit ledger handle over the budget record collection.
///
/// Callers receive this by reference (dependency injection); there is no
/// process-wide singleton.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<BudgetRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a ledger over an existing record collection.
    ///
    /// Legacy scalar records are accepted as-is; they migrate on first write.
    #[must_use]
    pub fn from_records(records: Vec<BudgetRecord>) -> Self {
        Self { records }
    }

    /// All records, in no guaranteed order.
    #[must_use]
    pub fn records(&self) -> &[BudgetRecord] {
        &self.records
    }

    /// Records for one location.
    #[must_use]
    pub fn records_for(&self, location_id: LocationId) -> Vec<&BudgetRecord> {
        self.records
            .iter()
            .filter(|r| r.location_id == location_id)
            .collect()
    }

    /// Sets one monthly amount for a `(location, category)` pair.
    ///
    /// Creates an all-zero record on first entry for the pair. A legacy
    /// scalar record migrates (scalar into month 0) before the new value is
    /// applied. `updated_at` is stamped on every write, `created_at` only on
    /// creation. Idempotent per call.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::MonthOutOfRange` without creating or altering
    /// any record if the index is invalid.
    pub fn upsert_monthly_amount(
        &mut self,
        location_id: LocationId,
        category_id: CategoryId,
        month_index: usize,
        amount: Decimal,
    ) -> Result<&BudgetRecord, BudgetError> {
        // Validate before find-or-create so a rejected call leaves no record.
        super::types::validate_month_index(month_index)?;

        let now = Utc::now();
        let index = self
            .records
            .iter()
            .position(|r| r.location_id == location_id && r.category_id == category_id);

        let index = match index {
            Some(i) => i,
            None => {
                self.records
                    .push(BudgetRecord::new(location_id, category_id, now));
                self.records.len() - 1
            }
        };

        let record = &mut self.records[index];
        record.amounts = set_month(record.amounts, month_index, amount)?;
        record.updated_at = now;

        Ok(&self.records[index])
    }

    /// Serializes the record collection to JSON.
    ///
    /// The snapshot covers budget records only. Users, locations and
    /// categories are reference data owned by their own stores and are
    /// persisted separately.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    /// Loads a ledger from a JSON record collection.
    ///
    /// Accepts both the monthly and the legacy scalar record shapes.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            records: serde_json::from_str(json)?,
        })
    }
}
