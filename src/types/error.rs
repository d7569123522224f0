//! Error types for the bank ledger
//!
//! This module defines all failures the ledger can signal. The three domain
//! kinds (not-found, insufficient balance, invalid argument) are locally
//! detected and non-retryable; a boundary layer maps them to transport
//! status signals. Arithmetic overflow is the internal fault class and is
//! kept distinct from the domain kinds. I/O and parse variants belong to
//! the journal boundary only.

use super::transaction::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Each variant carries the context a caller needs for diagnostics, e.g.
/// the current and requested amounts on an insufficient-balance failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No account exists with the given ID
    ///
    /// A boundary layer maps this to a "not found" response.
    #[error("Account {account_id} not found")]
    AccountNotFound {
        /// The account ID that has no record
        account_id: AccountId,
    },

    /// Withdrawal or transfer exceeds the account's balance
    ///
    /// Carries the current balance and the requested amount so callers can
    /// report the shortfall. Maps to an "unprocessable" response.
    #[error("Insufficient balance: current {current}, requested {requested}")]
    InsufficientBalance {
        /// Balance at the time of the check
        current: Decimal,
        /// Amount the caller asked for
        requested: Decimal,
    },

    /// Malformed input: non-positive amount, blank holder name, identical
    /// transfer endpoints, out-of-range values
    ///
    /// Maps to a "bad request" response.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },

    /// Checked decimal arithmetic failed
    ///
    /// Should not occur under correct use; the internal fault class,
    /// distinct from the domain kinds. The operation is rejected and the
    /// account is left unchanged.
    #[error("Arithmetic overflow in {operation} for account {account_id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account involved
        account_id: AccountId,
    },

    /// I/O error while reading or writing journal files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in the journal
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper constructors for common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account_id: AccountId) -> Self {
        LedgerError::AccountNotFound { account_id }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(current: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance { current, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_id: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_id,
        }
    }

    /// Invalid argument: amount must be strictly positive
    pub fn non_positive_amount(amount: Decimal) -> Self {
        LedgerError::InvalidArgument {
            message: format!("amount must be positive, got {}", amount),
        }
    }

    /// Invalid argument: initial balance must not be negative
    pub fn negative_initial_balance(amount: Decimal) -> Self {
        LedgerError::InvalidArgument {
            message: format!("initial balance must not be negative, got {}", amount),
        }
    }

    /// Invalid argument: holder name is blank
    pub fn blank_holder_name() -> Self {
        LedgerError::InvalidArgument {
            message: "holder name must not be blank".to_string(),
        }
    }

    /// Invalid argument: holder name length outside the accepted range
    pub fn holder_name_length(length: usize) -> Self {
        LedgerError::InvalidArgument {
            message: format!(
                "holder name must be between 2 and 50 characters, got {}",
                length
            ),
        }
    }

    /// Invalid argument: transfer endpoints must differ
    pub fn same_account(account_id: AccountId) -> Self {
        LedgerError::InvalidArgument {
            message: format!(
                "source and destination accounts must be different, both were {}",
                account_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account_id: 42 },
        "Account 42 not found"
    )]
    #[case::insufficient_balance(
        LedgerError::InsufficientBalance {
            current: Decimal::new(10000, 2),
            requested: Decimal::new(15000, 2),
        },
        "Insufficient balance: current 100.00, requested 150.00"
    )]
    #[case::invalid_argument(
        LedgerError::InvalidArgument { message: "holder name must not be blank".to_string() },
        "Invalid argument: holder name must not be blank"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account_id: 1 },
        "Arithmetic overflow in deposit for account 1"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::Parse { line: Some(7), message: "Invalid field".to_string() },
        "CSV parse error at line 7: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::Parse { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found(7),
        LedgerError::AccountNotFound { account_id: 7 }
    )]
    #[case::insufficient_balance(
        LedgerError::insufficient_balance(Decimal::new(100, 2), Decimal::new(200, 2)),
        LedgerError::InsufficientBalance {
            current: Decimal::new(100, 2),
            requested: Decimal::new(200, 2),
        }
    )]
    #[case::arithmetic_overflow(
        LedgerError::arithmetic_overflow("deposit", 3),
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account_id: 3 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_invalid_argument_helpers_carry_context() {
        assert!(LedgerError::non_positive_amount(Decimal::ZERO)
            .to_string()
            .contains("got 0"));
        assert!(LedgerError::holder_name_length(1)
            .to_string()
            .contains("got 1"));
        assert!(LedgerError::same_account(9).to_string().contains("9"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
