//! Report error types.

use thiserror::Error;

use budgetone_shared::types::{Currency, LocationId};

/// Consolidated report errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Contributing locations report in different currencies.
    ///
    /// Summing raw figures across currencies is a correctness bug, so the
    /// aggregator refuses rather than producing a meaningless total.
    #[error("cannot consolidate across currencies: {0} vs {1}")]
    MixedCurrencies(Currency, Currency),

    /// A budget record references a location that does not exist.
    #[error("budget record references unknown location {0}")]
    UnknownLocation(LocationId),
}
