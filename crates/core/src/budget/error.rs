//! Budget ledger error types.

use thiserror::Error;

/// Budget ledger errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Month index outside `[0, 12)`.
    #[error("month index {0} out of range (expected 0..12)")]
    MonthOutOfRange(usize),
}
