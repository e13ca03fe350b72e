//! Consolidated cross-location reporting.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

pub use error::ReportError;
pub use service::consolidate;
pub use types::{ConsolidatedReport, ConsolidatedRow};
