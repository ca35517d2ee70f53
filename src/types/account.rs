//! Account entity for the ATM session engine
//!
//! This module defines the Account structure and its mutating operations.
//! The balance and PIN fields are private so all state changes flow through
//! the operations below, which maintain the account invariants:
//!
//! - The balance is never negative.
//! - Every successful deposit, withdrawal, or PIN change appends exactly
//!   one history record; failed attempts append none.
//! - The history is append-only and only exposed as a read-only slice.

use crate::types::error::AtmError;
use crate::types::transaction::TransactionRecord;
use rust_decimal::Decimal;

/// A single bank account with an append-only transaction history
///
/// Constructed once with identifier, PIN, and starting balance; lives for
/// the duration of the process inside an [`AccountDirectory`].
///
/// [`AccountDirectory`]: crate::core::AccountDirectory
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Opaque account identifier, immutable after creation
    id: String,

    /// The PIN, compared by exact equality
    pin: String,

    /// Current balance, never negative
    balance: Decimal,

    /// Append-only transaction log in chronological order
    history: Vec<TransactionRecord>,
}

impl Account {
    /// Create a new account with the given identifier, PIN, and balance
    ///
    /// # Arguments
    ///
    /// * `id` - The account identifier
    /// * `pin` - The initial PIN
    /// * `balance` - The starting balance (callers seed non-negative values)
    ///
    /// # Returns
    ///
    /// A new Account with an empty transaction history
    pub fn new(id: impl Into<String>, pin: impl Into<String>, balance: Decimal) -> Self {
        Account {
            id: id.into(),
            pin: pin.into(),
            balance,
            history: Vec::new(),
        }
    }

    /// The account identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check whether a candidate PIN matches the stored PIN
    ///
    /// Pure equality check with no side effects. Lockout after repeated
    /// failures is the session loop's responsibility, not the account's.
    pub fn verify_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit funds into the account
    ///
    /// Succeeds iff `amount > 0`. Uses checked arithmetic to prevent
    /// overflow and maintain account integrity. On success the balance
    /// increases by `amount` and one Deposit record is appended.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the deposit was successful
    /// * `Err(AtmError)` - If the amount is non-positive or overflow would occur
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount <= 0` (`AtmError::InvalidAmount`)
    /// - Adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::invalid_amount(amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("deposit"))?;

        self.balance = new_balance;
        self.history.push(TransactionRecord::deposit(amount));

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Succeeds iff `0 < amount <= balance`. Uses checked arithmetic to
    /// prevent underflow and maintain account integrity. On success the
    /// balance decreases by `amount` and one Withdrawal record is appended.
    ///
    /// The error type distinguishes a non-positive amount from insufficient
    /// funds; the session loop conflates the two in its user-facing message.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the withdrawal was successful
    /// * `Err(AtmError)` - If the amount is invalid or exceeds the balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount <= 0` (`AtmError::InvalidAmount`)
    /// - `amount > balance` (`AtmError::InsufficientFunds`)
    /// - Subtracting the amount from the balance would underflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::invalid_amount(amount));
        }

        if amount > self.balance {
            return Err(AtmError::insufficient_funds(self.balance, amount));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AtmError::arithmetic_underflow("withdrawal"))?;

        self.balance = new_balance;
        self.history.push(TransactionRecord::withdrawal(amount));

        Ok(())
    }

    /// Replace the account PIN
    ///
    /// Unconditional: no validation of PIN strength is performed, matching
    /// the documented behavior. Appends one PinChange record. Callers
    /// wanting a stronger policy must enforce it before calling.
    pub fn change_pin(&mut self, new_pin: impl Into<String>) {
        self.pin = new_pin.into();
        self.history.push(TransactionRecord::pin_change());
    }

    /// The transaction history in insertion order
    ///
    /// Returned as a read-only slice so callers cannot corrupt the stored
    /// log through the returned value.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::TransactionKind;
    use rstest::rstest;

    fn account_with_balance(balance: i64) -> Account {
        Account::new("1234567890", "1234", Decimal::new(balance, 0))
    }

    #[test]
    fn test_new_account_has_empty_history() {
        let account = account_with_balance(1000);
        assert_eq!(account.id(), "1234567890");
        assert_eq!(account.balance(), Decimal::new(1000, 0));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_verify_pin() {
        let account = account_with_balance(0);
        assert!(account.verify_pin("1234"));
        assert!(!account.verify_pin("4321"));
        assert!(!account.verify_pin(""));
    }

    #[test]
    fn test_verify_pin_has_no_side_effects() {
        let account = account_with_balance(100);
        account.verify_pin("wrong");
        account.verify_pin("wrong");
        assert_eq!(account.balance(), Decimal::new(100, 0));
        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case::partial(1000, 200, 800)]
    #[case::exact_balance(1000, 1000, 0)]
    #[case::small(100, 1, 99)]
    fn test_withdraw_success(#[case] start: i64, #[case] amount: i64, #[case] expected: i64) {
        let mut account = account_with_balance(start);

        account.withdraw(Decimal::new(amount, 0)).unwrap();

        assert_eq!(account.balance(), Decimal::new(expected, 0));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind, TransactionKind::Withdrawal);
        assert_eq!(account.history()[0].amount, Some(Decimal::new(amount, 0)));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-50)]
    fn test_withdraw_rejects_non_positive_amount(#[case] amount: i64) {
        let mut account = account_with_balance(1000);

        let err = account.withdraw(Decimal::new(amount, 0)).unwrap_err();

        assert!(matches!(err, AtmError::InvalidAmount { .. }));
        assert_eq!(account.balance(), Decimal::new(1000, 0));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdraw_rejects_insufficient_funds() {
        let mut account = account_with_balance(100);

        let err = account.withdraw(Decimal::new(200, 0)).unwrap_err();

        assert_eq!(
            err,
            AtmError::insufficient_funds(Decimal::new(100, 0), Decimal::new(200, 0))
        );
        assert_eq!(account.balance(), Decimal::new(100, 0));
        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case::whole(1000, 50, 1050)]
    #[case::from_zero(0, 500, 500)]
    fn test_deposit_success(#[case] start: i64, #[case] amount: i64, #[case] expected: i64) {
        let mut account = account_with_balance(start);

        account.deposit(Decimal::new(amount, 0)).unwrap();

        assert_eq!(account.balance(), Decimal::new(expected, 0));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind, TransactionKind::Deposit);
        assert_eq!(account.history()[0].amount, Some(Decimal::new(amount, 0)));
    }

    #[test]
    fn test_deposit_fractional_amount() {
        let mut account = account_with_balance(1000);

        account.deposit(Decimal::new(505, 1)).unwrap(); // 50.5

        assert_eq!(account.balance(), Decimal::new(10505, 1)); // 1050.5
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-1)]
    fn test_deposit_rejects_non_positive_amount(#[case] amount: i64) {
        let mut account = account_with_balance(1000);

        let err = account.deposit(Decimal::new(amount, 0)).unwrap_err();

        assert!(matches!(err, AtmError::InvalidAmount { .. }));
        assert_eq!(account.balance(), Decimal::new(1000, 0));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_rejects_overflow() {
        let mut account = Account::new("1234567890", "1234", Decimal::MAX);

        let err = account.deposit(Decimal::ONE).unwrap_err();

        assert!(matches!(err, AtmError::ArithmeticOverflow { .. }));
        assert_eq!(account.balance(), Decimal::MAX);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_change_pin_replaces_credential_and_logs() {
        let mut account = account_with_balance(0);

        account.change_pin("9999");

        assert!(!account.verify_pin("1234"));
        assert!(account.verify_pin("9999"));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind, TransactionKind::PinChange);
        assert_eq!(account.history()[0].amount, None);
    }

    #[test]
    fn test_change_pin_accepts_any_value() {
        // No strength validation: empty and non-numeric PINs are accepted.
        let mut account = account_with_balance(0);

        account.change_pin("");
        assert!(account.verify_pin(""));

        account.change_pin("correct horse");
        assert!(account.verify_pin("correct horse"));
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_history_is_chronological_and_append_only() {
        let mut account = account_with_balance(1000);

        account.withdraw(Decimal::new(200, 0)).unwrap();
        let first = account.history()[0].clone();

        account.deposit(Decimal::new(50, 0)).unwrap();
        account.change_pin("0000");

        let history = account.history();
        assert_eq!(history.len(), 3);
        // Earlier entries are untouched by later operations
        assert_eq!(history[0], first);
        assert_eq!(history[1].kind, TransactionKind::Deposit);
        assert_eq!(history[2].kind, TransactionKind::PinChange);
        assert!(history[0].timestamp <= history[1].timestamp);
        assert!(history[1].timestamp <= history[2].timestamp);
    }

    #[test]
    fn test_failed_operations_append_nothing() {
        let mut account = account_with_balance(100);

        let _ = account.withdraw(Decimal::new(500, 0));
        let _ = account.withdraw(Decimal::ZERO);
        let _ = account.deposit(Decimal::new(-5, 0));

        assert!(account.history().is_empty());
        assert_eq!(account.balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_balance_never_negative_across_operation_sequence() {
        let mut account = account_with_balance(100);
        let amounts = [70, 70, 20, 50, 10, 200];

        for amount in amounts {
            let _ = account.withdraw(Decimal::new(amount, 0));
            assert!(account.balance() >= Decimal::ZERO);
        }

        // 70 and 20 succeed (100 -> 30 -> 10), 10 succeeds (10 -> 0)
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(account.history().len(), 3);
    }
}
