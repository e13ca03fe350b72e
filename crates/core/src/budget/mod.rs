//! The budget ledger.
//!
//! One record per `(location, category)` pair, each carrying twelve monthly
//! amounts for the fiscal year. Supports point updates (single month) and
//! migration of legacy single-scalar records.

pub mod error;
pub mod ledger;
pub mod types;


pub use error::BudgetError;
pub use ledger::Ledger;
pub use types::{BudgetAmounts, BudgetRecord, MONTHS_PER_YEAR, set_month, validate_month_index};
