//! Transaction-related types for the ATM session engine
//!
//! This module defines the transaction kinds and the history record type
//! appended to an account's log after each successful mutating operation.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use std::fmt;

/// Transaction kinds recorded in the account history
///
/// Deposits and withdrawals carry an amount; a PIN change affects only the
/// credential and carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to the account
    Deposit,

    /// Debit funds from the account
    ///
    /// Requires sufficient balance to succeed.
    Withdrawal,

    /// Replace the account PIN
    ///
    /// Always succeeds; no amount is involved.
    PinChange,
}

/// One entry in an account's append-only transaction history
///
/// Records are created by the account operations at the moment the
/// operation completes and are never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Point in time the operation completed
    pub timestamp: DateTime<Local>,

    /// The kind of operation recorded
    pub kind: TransactionKind,

    /// Transaction amount
    ///
    /// Present for Deposit and Withdrawal records, `None` for PinChange.
    pub amount: Option<Decimal>,
}

impl TransactionRecord {
    /// Create a record stamped with the current local time
    pub fn now(kind: TransactionKind, amount: Option<Decimal>) -> Self {
        TransactionRecord {
            timestamp: Local::now(),
            kind,
            amount,
        }
    }

    /// Create a deposit record stamped with the current local time
    pub fn deposit(amount: Decimal) -> Self {
        Self::now(TransactionKind::Deposit, Some(amount))
    }

    /// Create a withdrawal record stamped with the current local time
    pub fn withdrawal(amount: Decimal) -> Self {
        Self::now(TransactionKind::Withdrawal, Some(amount))
    }

    /// Create a PIN-change record stamped with the current local time
    pub fn pin_change() -> Self {
        Self::now(TransactionKind::PinChange, None)
    }
}

/// Renders a record as one history line:
///
/// ```text
/// <timestamp> - Withdrawal: $<amount>
/// <timestamp> - Deposit: $<amount>
/// <timestamp> - PIN changed successfully.
/// ```
///
/// Timestamps use microsecond precision.
impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f");
        match (self.kind, self.amount) {
            (TransactionKind::Deposit, Some(amount)) => {
                write!(f, "{} - Deposit: ${}", timestamp, amount.normalize())
            }
            (TransactionKind::Withdrawal, Some(amount)) => {
                write!(f, "{} - Withdrawal: ${}", timestamp, amount.normalize())
            }
            // Amount is absent for PIN changes and ignored if somehow present
            _ => write!(f, "{} - PIN changed successfully.", timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap()
    }

    #[rstest]
    #[case::withdrawal(
        TransactionKind::Withdrawal,
        Some(Decimal::new(200, 0)),
        "2024-03-15 14:30:05.000000 - Withdrawal: $200"
    )]
    #[case::deposit(
        TransactionKind::Deposit,
        Some(Decimal::new(505, 1)),
        "2024-03-15 14:30:05.000000 - Deposit: $50.5"
    )]
    #[case::pin_change(
        TransactionKind::PinChange,
        None,
        "2024-03-15 14:30:05.000000 - PIN changed successfully."
    )]
    fn test_display_format(
        #[case] kind: TransactionKind,
        #[case] amount: Option<Decimal>,
        #[case] expected: &str,
    ) {
        let record = TransactionRecord {
            timestamp: fixed_time(),
            kind,
            amount,
        };
        assert_eq!(record.to_string(), expected);
    }

    #[test]
    fn test_display_normalizes_trailing_zeros() {
        let record = TransactionRecord {
            timestamp: fixed_time(),
            kind: TransactionKind::Deposit,
            amount: Some(Decimal::new(20000, 2)), // 200.00
        };
        assert_eq!(
            record.to_string(),
            "2024-03-15 14:30:05.000000 - Deposit: $200"
        );
    }

    #[test]
    fn test_constructors_set_kind_and_amount() {
        let deposit = TransactionRecord::deposit(Decimal::new(50, 0));
        assert_eq!(deposit.kind, TransactionKind::Deposit);
        assert_eq!(deposit.amount, Some(Decimal::new(50, 0)));

        let withdrawal = TransactionRecord::withdrawal(Decimal::new(25, 0));
        assert_eq!(withdrawal.kind, TransactionKind::Withdrawal);
        assert_eq!(withdrawal.amount, Some(Decimal::new(25, 0)));

        let pin_change = TransactionRecord::pin_change();
        assert_eq!(pin_change.kind, TransactionKind::PinChange);
        assert_eq!(pin_change.amount, None);
    }
}
