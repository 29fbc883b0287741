//! Error types for the ledger and the statement ingestion around it.

use crate::account::AccountId;
use crate::journal::EntryId;
use crate::money::{AmountError, Money};
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while ingesting statements or querying the ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Amount column that is not blank and not a number
    #[error("Invalid amount in row {row}, column '{field}': {source}")]
    InvalidAmount {
        row: usize,
        field: &'static str,
        source: AmountError,
    },

    /// Date column that does not match the statement's layout
    #[error("Invalid date in row {row}, column '{field}': '{value}'")]
    InvalidDate {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Row that parses but cannot be booked
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Posting carrying both a credit and a debit
    #[error("Posting '{name}' has both credit {credit} and debit {debit}")]
    TwoSidedPosting {
        name: String,
        credit: Money,
        debit: Money,
    },

    /// Posting that references a journal entry missing from the store
    #[error("Posting references missing journal entry {entry_id}")]
    DanglingPosting { entry_id: EntryId },

    /// Account code that is not in the chart
    #[error("Unknown account {0}")]
    UnknownAccount(AccountId),

    /// Aggregated amount past the micro-unit ceiling
    #[error("Amount overflow while summing journal entry {entry_id}")]
    AmountOverflow { entry_id: EntryId },

    /// Statement with nothing after its metadata block
    #[error("Expected more than {skip} rows in statement, found {found}")]
    TooFewRows { skip: usize, found: usize },

    /// Month filter not in `yyyy-mm` form
    #[error("Invalid month '{0}', expected yyyy-mm")]
    InvalidMonth(String),
}
