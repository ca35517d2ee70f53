//! ATM Session Engine Library
//! # Overview
//!
//! This library models a single-account automated teller interaction: PIN
//! authentication with a bounded retry budget, balance inquiry, cash
//! withdrawal and deposit, PIN change, and transaction history retrieval,
//! driven by a text menu loop.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, AtmError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::directory`] - Account lookup by identifier
//!   - [`core::session`] - Authentication state machine and menu dispatch
//! - [`io`] - Account directory seeding from CSV or built-in samples
//!
//! # Session Flow
//!
//! A session authenticates against one account from an [`AccountDirectory`]:
//! an unknown identifier ends the session immediately, three incorrect PINs
//! lock it. Once authenticated, the menu loop dispatches to the account
//! operations until the user exits.
//!
//! # Account Invariants
//!
//! Each account maintains:
//! - `balance`: a non-negative `rust_decimal::Decimal`
//! - `history`: an append-only transaction log; every successful mutation
//!   appends exactly one record and failed attempts append none

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountDirectory, Session, SessionEnd};
pub use io::{load_directory, sample_directory};
pub use types::{Account, AtmError, TransactionKind, TransactionRecord};
