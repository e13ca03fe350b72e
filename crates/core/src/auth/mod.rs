//! Authentication logic.

pub mod password;

pub use password::{PasswordError, hash_password, verify_password};
