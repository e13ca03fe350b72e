//! Chart of accounts.

pub mod tree;
pub mod types;

pub use tree::{ChartError, validate_chart};
pub use types::{Category, CategoryKind};
