//! ATM Session Engine CLI
//!
//! Interactive command-line interface for a single ATM session.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --accounts accounts.csv
//! ```
//!
//! The program seeds an in-memory account directory (from the given CSV
//! file, or the built-in sample accounts), then runs one interactive
//! session over stdin/stdout: account number, PIN (three attempts), and
//! the six-choice menu loop until exit.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (exit, lockout, unknown account, or EOF)
//! - 1: Error (seed file not found or malformed, I/O failure)

use atm_session_engine::{cli, io, Session};
use std::io::{stdin, stdout};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Seed the account directory from the CSV file or built-in samples
    let mut directory = match &args.accounts_file {
        Some(path) => match io::load_directory(path) {
            Ok(directory) => directory,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => io::sample_directory(),
    };

    // Run one interactive session over stdin/stdout
    let mut session = Session::new(stdin().lock(), stdout().lock());
    if let Err(e) = session.run(&mut directory) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
