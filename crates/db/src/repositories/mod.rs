//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Each repository holds an explicit connection handle; there
//! is no process-wide store.

pub mod budget;
pub mod category;
pub mod location;
pub mod user;

pub use budget::{BudgetError, BudgetRepository};
pub use category::{CategoryError, CategoryRepository};
pub use location::{LocationError, LocationRepository};
pub use user::UserRepository;
