//! Branch locations and manager associations.

pub mod types;

pub use types::{Location, find_by_manager};
