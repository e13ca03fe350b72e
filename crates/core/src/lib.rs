//! Core business logic for BudgetOne.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `account` - Chart of accounts (categories) and tree validation
//! - `location` - Branch locations and manager associations
//! - `budget` - The budget ledger: per-(location, category) monthly amounts
//! - `report` - Consolidated cross-location reporting
//! - `auth` - Password hashing

pub mod account;
pub mod auth;
pub mod budget;
pub mod location;
pub mod report;
