//! Interactive session loop
//!
//! This module provides the [`Session`] controller that authenticates a
//! user against one account from an [`AccountDirectory`] and then runs the
//! menu dispatch loop until the user exits.
//!
//! # Authentication state machine
//!
//! ```text
//! AwaitingAccountId --known id--> AwaitingPin(3) --correct--> Authenticated
//!        |                              |
//!        +--unknown id--> end           +--3 wrong PINs--> Locked (end)
//! ```
//!
//! Lockout is terminal for the session; it is not retryable and no lockout
//! state is held on the account itself.
//!
//! # I/O abstraction
//!
//! The session is generic over a `BufRead` input and a `Write` output, so
//! production code runs it over locked stdin/stdout while tests drive it
//! with in-memory cursors and inspect the full transcript. Every prompt and
//! message is written verbatim; prompts are flushed without a trailing
//! newline before reading the response.
//!
//! End-of-input on the reader closes the session quietly (no farewell),
//! reported to the caller as [`SessionEnd::Eof`].

use crate::core::directory::AccountDirectory;
use crate::types::AtmError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Number of PIN attempts before the session locks
const PIN_ATTEMPTS: u8 = 3;

/// Menu text presented on every authenticated loop iteration
const MENU: &str = "\nATM Menu:\n\
                    1. Account Balance Inquiry\n\
                    2. Cash Withdrawal\n\
                    3. Cash Deposit\n\
                    4. PIN Change\n\
                    5. Transaction History\n\
                    6. Exit";

/// Authentication progress for one session
///
/// The session advances through these states in order; `Locked` and the
/// terminal outcomes in [`SessionEnd`] end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    /// Waiting for the account identifier
    AwaitingAccountId,

    /// Account found, waiting for a PIN with a bounded retry budget
    AwaitingPin {
        /// Identifier of the account being authenticated
        id: String,
        /// PIN attempts left before lockout
        attempts_remaining: u8,
    },

    /// PIN verified, menu dispatch loop running
    Authenticated {
        /// Identifier of the authenticated account
        id: String,
    },
}

/// How a session ended
///
/// Lets the caller observe the terminal state without parsing the
/// transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit from the menu
    Exited,

    /// Three incorrect PINs were submitted
    Locked,

    /// The entered account identifier was not in the directory
    UnknownAccount,

    /// The input stream ended before the user exited
    Eof,
}

/// Single-threaded interactive session controller
///
/// Owns the reader/writer pair for one session. All account state lives in
/// the [`AccountDirectory`] passed to [`run`](Session::run); the session
/// itself only holds I/O handles.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given input and output
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run one full session against the directory
    ///
    /// Drives the authentication state machine and, once authenticated,
    /// the menu dispatch loop. Recoverable account errors (invalid amount,
    /// insufficient funds) are reported to the user and the loop continues;
    /// only I/O failures propagate as errors.
    ///
    /// # Arguments
    ///
    /// * `directory` - The account directory to authenticate against
    ///
    /// # Returns
    ///
    /// * `Ok(SessionEnd)` - How the session terminated
    /// * `Err(AtmError)` - If reading input or writing output failed
    pub fn run(&mut self, directory: &mut AccountDirectory) -> Result<SessionEnd, AtmError> {
        let mut state = SessionState::AwaitingAccountId;

        loop {
            state = match state {
                SessionState::AwaitingAccountId => {
                    let Some(id) = self.prompt("Enter account number: ")? else {
                        return Ok(SessionEnd::Eof);
                    };

                    if !directory.contains(&id) {
                        self.say("Invalid account number.")?;
                        return Ok(SessionEnd::UnknownAccount);
                    }

                    SessionState::AwaitingPin {
                        id,
                        attempts_remaining: PIN_ATTEMPTS,
                    }
                }

                SessionState::AwaitingPin {
                    id,
                    attempts_remaining,
                } => {
                    if attempts_remaining == 0 {
                        self.say("Too many incorrect PIN attempts. Account locked.")?;
                        return Ok(SessionEnd::Locked);
                    }

                    let Some(pin) = self.prompt("Enter PIN: ")? else {
                        return Ok(SessionEnd::Eof);
                    };

                    // The account cannot disappear mid-session; the lookup is
                    // repeated because the directory borrow cannot be held
                    // across prompts.
                    let verified = directory
                        .get(&id)
                        .is_some_and(|account| account.verify_pin(&pin));

                    if verified {
                        self.say("PIN verified.")?;
                        SessionState::Authenticated { id }
                    } else {
                        self.say("Incorrect PIN. Try again.")?;
                        SessionState::AwaitingPin {
                            id,
                            attempts_remaining: attempts_remaining - 1,
                        }
                    }
                }

                SessionState::Authenticated { id } => {
                    return self.run_menu(directory, &id);
                }
            };
        }
    }

    /// Menu dispatch loop for an authenticated account
    ///
    /// Presents the six menu choices and dispatches to the account
    /// operations until Exit is chosen or the input ends. Any unrecognized
    /// choice re-prompts without terminating the loop.
    fn run_menu(
        &mut self,
        directory: &mut AccountDirectory,
        id: &str,
    ) -> Result<SessionEnd, AtmError> {
        loop {
            self.say(MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                return Ok(SessionEnd::Eof);
            };

            match choice.trim() {
                "1" => {
                    let balance = directory
                        .get(id)
                        .map(|account| account.balance())
                        .unwrap_or(Decimal::ZERO);
                    self.say(&format!("Account balance: ${}", balance.normalize()))?;
                }
                "2" => self.handle_withdrawal(directory, id)?,
                "3" => self.handle_deposit(directory, id)?,
                "4" => self.handle_pin_change(directory, id)?,
                "5" => self.handle_history(directory, id)?,
                "6" => {
                    self.say("Exiting ATM. Thank you!")?;
                    return Ok(SessionEnd::Exited);
                }
                _ => {
                    self.say("Invalid choice. Please enter a number between 1 and 6.")?;
                }
            }
        }
    }

    /// Prompt for an amount and withdraw it
    ///
    /// Malformed numeric input is caught at this boundary and reported with
    /// the same message as an invalid amount; the loop never crashes on bad
    /// input. The insufficient-funds and invalid-amount causes are
    /// deliberately conflated in the user-facing message for compatibility,
    /// even though [`Account::withdraw`] distinguishes them.
    ///
    /// [`Account::withdraw`]: crate::types::Account::withdraw
    fn handle_withdrawal(
        &mut self,
        directory: &mut AccountDirectory,
        id: &str,
    ) -> Result<(), AtmError> {
        let Some(input) = self.prompt("Enter withdrawal amount: $")? else {
            return Ok(());
        };

        let outcome = match Decimal::from_str(input.trim()) {
            Ok(amount) => directory
                .get_mut(id)
                .map(|account| account.withdraw(amount))
                .unwrap_or(Ok(())),
            Err(_) => Err(AtmError::invalid_amount(Decimal::ZERO)),
        };

        match outcome {
            Ok(()) => {
                let balance = directory
                    .get(id)
                    .map(|account| account.balance())
                    .unwrap_or(Decimal::ZERO);
                self.say("Withdrawal successful.")?;
                self.say(&format!("New balance: ${}", balance.normalize()))?;
            }
            Err(_) => {
                self.say("Insufficient balance or invalid amount.")?;
            }
        }

        Ok(())
    }

    /// Prompt for an amount and deposit it
    ///
    /// Malformed numeric input is treated as an invalid deposit amount.
    fn handle_deposit(
        &mut self,
        directory: &mut AccountDirectory,
        id: &str,
    ) -> Result<(), AtmError> {
        let Some(input) = self.prompt("Enter deposit amount: $")? else {
            return Ok(());
        };

        let outcome = match Decimal::from_str(input.trim()) {
            Ok(amount) => directory
                .get_mut(id)
                .map(|account| account.deposit(amount))
                .unwrap_or(Ok(())),
            Err(_) => Err(AtmError::invalid_amount(Decimal::ZERO)),
        };

        match outcome {
            Ok(()) => {
                let balance = directory
                    .get(id)
                    .map(|account| account.balance())
                    .unwrap_or(Decimal::ZERO);
                self.say("Deposit successful.")?;
                self.say(&format!("New balance: ${}", balance.normalize()))?;
            }
            Err(_) => {
                self.say("Invalid deposit amount.")?;
            }
        }

        Ok(())
    }

    /// Prompt for a new PIN and set it unconditionally
    fn handle_pin_change(
        &mut self,
        directory: &mut AccountDirectory,
        id: &str,
    ) -> Result<(), AtmError> {
        let Some(new_pin) = self.prompt("Enter new PIN: ")? else {
            return Ok(());
        };

        if let Some(account) = directory.get_mut(id) {
            account.change_pin(new_pin);
        }
        self.say("PIN changed successfully.")?;

        Ok(())
    }

    /// Print the transaction history, or a placeholder if it is empty
    fn handle_history(
        &mut self,
        directory: &mut AccountDirectory,
        id: &str,
    ) -> Result<(), AtmError> {
        let lines: Vec<String> = directory
            .get(id)
            .map(|account| {
                account
                    .history()
                    .iter()
                    .map(|record| record.to_string())
                    .collect()
            })
            .unwrap_or_default();

        if lines.is_empty() {
            self.say("No transaction history found.")?;
        } else {
            self.say("\nTransaction History:")?;
            for line in lines {
                self.say(&line)?;
            }
        }

        Ok(())
    }

    /// Write a prompt without a trailing newline, flush, and read the reply
    ///
    /// Returns `Ok(None)` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, AtmError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Write one line of output
    fn say(&mut self, text: &str) -> Result<(), AtmError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line, stripping the trailing newline
    ///
    /// Returns `Ok(None)` when the input stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, AtmError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
