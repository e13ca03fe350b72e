//! `SeaORM` entity definitions.

pub mod budgets;
pub mod categories;
pub mod locations;
pub mod sea_orm_active_enums;
pub mod users;
