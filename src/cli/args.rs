use clap::Parser;
use std::path::PathBuf;

/// Run an interactive ATM session against an in-memory account directory
#[derive(Parser, Debug)]
#[command(name = "atm-session-engine")]
#[command(about = "Interactive ATM session: PIN authentication, balance, withdrawal, deposit, PIN change, history", long_about = None)]
pub struct CliArgs {
    /// CSV file seeding the account directory
    #[arg(
        long = "accounts",
        value_name = "FILE",
        help = "CSV seed file with header 'account,pin,balance' (default: built-in sample accounts)"
    )]
    pub accounts_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_args(&["program"], None)]
    #[case::with_accounts(&["program", "--accounts", "accounts.csv"], Some("accounts.csv"))]
    fn test_accounts_file_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(
            parsed.accounts_file.as_deref(),
            expected.map(std::path::Path::new)
        );
    }

    #[rstest]
    #[case::missing_value(&["program", "--accounts"])]
    #[case::unknown_flag(&["program", "--strategy", "sync"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
