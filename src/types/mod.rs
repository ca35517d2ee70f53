//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity and its operations
//! - `transaction`: history record types and their rendering
//! - `error`: error types for the session engine

pub mod account;
pub mod error;
pub mod transaction;

pub use account::Account;
pub use error::AtmError;
pub use transaction::{TransactionKind, TransactionRecord};
