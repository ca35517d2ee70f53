//! Account seeding for the directory
//!
//! This module builds the [`AccountDirectory`] the session authenticates
//! against, either from a CSV seed file or from the built-in sample
//! accounts.
//!
//! # CSV Format
//!
//! Header `account,pin,balance`, one account per row:
//!
//! ```csv
//! account,pin,balance
//! 1234567890,1234,1000
//! 9876543210,5678,500
//! ```
//!
//! Balances are carried as strings and parsed with `Decimal::from_str` so
//! amounts never round-trip through binary floating point. A malformed or
//! negative row is fatal: a bad directory must not start a session.

use crate::core::AccountDirectory;
use crate::types::{Account, AtmError};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the seed file format with columns: account, pin, balance.
/// The balance field is kept as a string and parsed separately to keep
/// decimal parsing and its error reporting in one place.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedRecord {
    pub account: String,
    pub pin: String,
    pub balance: String,
}

/// Convert a SeedRecord to an Account
///
/// Parses the balance string into a `Decimal` and validates it is
/// non-negative.
///
/// # Arguments
///
/// * `record` - The deserialized seed record
/// * `line` - Line number for error reporting (if available)
///
/// # Returns
///
/// * `Ok(Account)` - Successfully converted account
/// * `Err(AtmError)` - Seed error describing the conversion failure
pub fn convert_seed_record(record: SeedRecord, line: Option<u64>) -> Result<Account, AtmError> {
    let balance = Decimal::from_str(record.balance.trim()).map_err(|_| {
        AtmError::seed_error(
            line,
            &format!(
                "invalid balance '{}' for account '{}'",
                record.balance, record.account
            ),
        )
    })?;

    if balance < Decimal::ZERO {
        return Err(AtmError::seed_error(
            line,
            &format!(
                "negative balance '{}' for account '{}'",
                record.balance, record.account
            ),
        ));
    }

    if record.account.trim().is_empty() {
        return Err(AtmError::seed_error(line, "empty account identifier"));
    }

    Ok(Account::new(
        record.account.trim(),
        record.pin.trim(),
        balance,
    ))
}

/// Load an account directory from a CSV seed file
///
/// The CSV reader is configured to trim whitespace from all fields.
/// Any malformed row aborts loading and is returned as a fatal
/// `AtmError::SeedError` with the line number when available.
///
/// # Arguments
///
/// * `path` - Path to the CSV seed file
///
/// # Returns
///
/// * `Ok(AccountDirectory)` - Directory populated with all seeded accounts
/// * `Err(AtmError)` - If the file could not be read or a row is malformed
pub fn load_directory(path: &Path) -> Result<AccountDirectory, AtmError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let mut directory = AccountDirectory::new();
    for (index, result) in reader.deserialize::<SeedRecord>().enumerate() {
        // Line 1 is the header, so the first record is line 2
        let line = index as u64 + 2;
        let record = result?;
        directory.insert(convert_seed_record(record, Some(line))?);
    }

    Ok(directory)
}

/// The built-in sample directory
///
/// Used when no seed file is given: accounts `1234567890` (PIN `1234`,
/// balance 1000) and `9876543210` (PIN `5678`, balance 500).
pub fn sample_directory() -> AccountDirectory {
    [
        Account::new("1234567890", "1234", Decimal::new(1000, 0)),
        Account::new("9876543210", "5678", Decimal::new(500, 0)),
    ]
    .into_iter()
    .collect()
}
