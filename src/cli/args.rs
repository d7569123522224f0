use crate::types::AccountId;
use clap::Parser;
use std::path::PathBuf;

/// Replay a banking journal and report account state
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Replay a banking journal and report account state", long_about = None)]
pub struct CliArgs {
    /// Input CSV journal path containing ledger operations
    #[arg(value_name = "JOURNAL", help = "Path to the input journal CSV file")]
    pub input_file: PathBuf,

    /// Print one account's transaction history instead of the summary
    #[arg(
        long = "history",
        value_name = "ACCOUNT",
        help = "Print the transaction history of this account instead of the account summary"
    )]
    pub history: Option<AccountId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::summary_mode(&["program", "journal.csv"], None)]
    #[case::history_mode(&["program", "--history", "3", "journal.csv"], Some(3))]
    #[case::history_before_input(&["program", "journal.csv", "--history", "1"], Some(1))]
    fn test_args_parsing(#[case] args: &[&str], #[case] history: Option<AccountId>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, Path::new("journal.csv"));
        assert_eq!(parsed.history, history);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::history_missing_value(&["program", "--history", "journal.csv"])]
    #[case::negative_history(&["program", "--history", "-1", "journal.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
