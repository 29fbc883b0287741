//! # Personal Ledger
//!
//! Books bank statement exports into an in-memory double-entry ledger and
//! reconstructs per-transaction views from the raw postings.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts are `i64` micro-units, parsed exactly via `rust_decimal`
//! - **Append-only stores**: journal entries and postings are never mutated or deleted
//! - **One-sided postings**: a posting is a credit or a debit, never both
//! - **Deterministic output**: transactions are listed in entry-creation order
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use personal_ledger::{AccountingRepository, InMemoryRepository, Money, TransactionParams};
//!
//! let mut repo = InMemoryRepository::new();
//! let date = NaiveDate::from_ymd_opt(2025, 12, 13).unwrap();
//! let debit = "4.50".parse::<Money>().unwrap();
//! let params = TransactionParams::new("Coffee", "", date, Money::ZERO, debit);
//! repo.create_expense(params).unwrap();
//!
//! let views = repo.list_transactions().unwrap();
//! assert_eq!(views[0].debit.micros(), 4_500_000);
//! ```

pub mod account;
pub mod error;
pub mod ingest;
pub mod journal;
pub mod money;
pub mod month;
pub mod repository;
pub mod statement;
pub mod view;

pub use account::{Account, AccountClass, AccountId, NormalBalance};
pub use error::{LedgerError, Result};
pub use ingest::{ingest, IngestSummary};
pub use journal::{EntryId, JournalEntry, Posting, PostingId};
pub use money::{AmountError, Money};
pub use month::YearMonth;
pub use repository::{AccountingRepository, InMemoryRepository, TransactionKind, TransactionParams};
pub use statement::{StatementFormat, StatementRow};
pub use view::TransactionView;
