//! Error types for the ATM session engine
//!
//! This module defines all error types that can occur during a session.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Session Errors**: Unknown account, failed authentication (lockout)
//! - **Account Errors**: Invalid amounts, insufficient funds
//! - **Arithmetic Errors**: Overflow, underflow in balance calculations
//! - **Fatal Errors**: I/O failures, malformed seed files
//!
//! Session and account errors are recoverable: the session loop consumes
//! them by printing a message and either re-prompting or ending the session.
//! Fatal errors propagate out of `main` and terminate the process.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM session engine
///
/// This enum represents all possible errors that can occur while seeding
/// the account directory or running a session. Each variant includes
/// relevant context to help diagnose the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmError {
    /// No account exists for the entered identifier
    ///
    /// This is a terminal session error - the session ends without
    /// issuing a PIN prompt.
    #[error("Unknown account '{id}'")]
    UnknownAccount {
        /// The account identifier that was not found
        id: String,
    },

    /// The PIN retry budget was exhausted
    ///
    /// This is a terminal session error - after three incorrect PINs the
    /// session transitions to the locked state and ends.
    #[error("Authentication failed for account '{id}' after {attempts} attempts")]
    AuthenticationFailed {
        /// The account identifier the attempts were made against
        id: String,
        /// Number of PIN attempts consumed
        attempts: u8,
    },

    /// Non-positive amount for a deposit or withdrawal
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// account state remains unchanged.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal amount exceeds the current balance
    ///
    /// This is a recoverable error - the withdrawal is rejected
    /// and the account state remains unchanged.
    #[error("Insufficient funds: balance {available}, requested {requested}")]
    InsufficientFunds {
        /// Current balance
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected
    /// to maintain account integrity.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// This is a recoverable error - the operation is rejected
    /// to maintain account integrity.
    #[error("Arithmetic underflow in {operation}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
    },

    /// I/O error occurred while reading input or writing output
    ///
    /// This is a fatal error (broken pipe, closed terminal, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The account seed file could not be parsed
    ///
    /// A bad directory must not start a session, so this is a fatal error.
    #[error("Seed file error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    SeedError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to AtmError
impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to AtmError
impl From<csv::Error> for AtmError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        AtmError::SeedError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AtmError {
    /// Create an UnknownAccount error
    pub fn unknown_account(id: &str) -> Self {
        AtmError::UnknownAccount { id: id.to_string() }
    }

    /// Create an AuthenticationFailed error
    pub fn authentication_failed(id: &str, attempts: u8) -> Self {
        AtmError::AuthenticationFailed {
            id: id.to_string(),
            attempts,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        AtmError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        AtmError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AtmError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str) -> Self {
        AtmError::ArithmeticUnderflow {
            operation: operation.to_string(),
        }
    }

    /// Create a SeedError
    pub fn seed_error(line: Option<u64>, message: &str) -> Self {
        AtmError::SeedError {
            line,
            message: message.to_string(),
        }
    }

    /// Whether the session loop can recover from this error by re-prompting
    ///
    /// Fatal errors (I/O, seed file) return false and propagate to `main`.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AtmError::Io { .. } | AtmError::SeedError { .. })
    }
}
