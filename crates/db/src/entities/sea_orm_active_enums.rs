//! Active enums mapped to database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User role enum (`user_role` database type).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum UserRole {
    /// Head-office administrator.
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Branch manager.
    #[sea_orm(string_value = "location_manager")]
    LocationManager,
}

impl From<UserRole> for budgetone_shared::auth::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::LocationManager => Self::LocationManager,
        }
    }
}

impl From<budgetone_shared::auth::UserRole> for UserRole {
    fn from(role: budgetone_shared::auth::UserRole) -> Self {
        match role {
            budgetone_shared::auth::UserRole::Admin => Self::Admin,
            budgetone_shared::auth::UserRole::LocationManager => Self::LocationManager,
        }
    }
}

/// Category classification enum (`category_kind` database type).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category_kind")]
pub enum CategoryKind {
    /// Income line.
    #[sea_orm(string_value = "income")]
    Income,
    /// Expense line.
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Asset line.
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Liability line.
    #[sea_orm(string_value = "liability")]
    Liability,
}

impl From<CategoryKind> for budgetone_core::account::CategoryKind {
    fn from(kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Income => Self::Income,
            CategoryKind::Expense => Self::Expense,
            CategoryKind::Asset => Self::Asset,
            CategoryKind::Liability => Self::Liability,
        }
    }
}

impl From<budgetone_core::account::CategoryKind> for CategoryKind {
    fn from(kind: budgetone_core::account::CategoryKind) -> Self {
        match kind {
            budgetone_core::account::CategoryKind::Income => Self::Income,
            budgetone_core::account::CategoryKind::Expense => Self::Expense,
            budgetone_core::account::CategoryKind::Asset => Self::Asset,
            budgetone_core::account::CategoryKind::Liability => Self::Liability,
        }
    }
}
