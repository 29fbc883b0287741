//! Ledger repository.
//!
//! Owns the journal and posting stores. Every expense or income becomes one
//! journal entry plus one posting against a counter-account, and the
//! transaction list is rebuilt from those records on each query.

use crate::account::{self, AccountId, DEFAULT_EXPENSE_ACCOUNT, DEFAULT_INCOME_ACCOUNT};
use crate::error::Result;
use crate::journal::{
    EntryId, JournalEntry, JournalStore, NewJournalEntry, NewPosting, Posting, PostingStore,
};
use crate::money::Money;
use crate::view::{build_views, TransactionView};
use chrono::NaiveDate;
use log::debug;
use std::fmt;

/// Whether a transaction is money going out or coming in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Counter-account used when the caller does not name one.
    pub fn default_account(&self) -> AccountId {
        match self {
            TransactionKind::Expense => DEFAULT_EXPENSE_ACCOUNT,
            TransactionKind::Income => DEFAULT_INCOME_ACCOUNT,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Expense => write!(f, "expense"),
            TransactionKind::Income => write!(f, "income"),
        }
    }
}

/// Input for [`AccountingRepository::create_expense`] and
/// [`AccountingRepository::create_income`].
#[derive(Debug, Clone)]
pub struct TransactionParams {
    pub name: String,
    pub description: String,
    pub transacted_at: NaiveDate,
    pub credit: Money,
    pub debit: Money,
    /// Counter-account override; `None` uses the kind's default.
    pub account: Option<AccountId>,
}

impl TransactionParams {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        transacted_at: NaiveDate,
        credit: Money,
        debit: Money,
    ) -> Self {
        TransactionParams {
            name: name.into(),
            description: description.into(),
            transacted_at,
            credit,
            debit,
            account: None,
        }
    }

    pub fn with_account(mut self, account: AccountId) -> Self {
        self.account = Some(account);
        self
    }
}

/// Storage-independent ledger contract.
///
/// A persistent backend implements the same three operations.
pub trait AccountingRepository {
    /// Records an expense. Returns the new journal entry's identifier.
    fn create_expense(&mut self, params: TransactionParams) -> Result<EntryId>;

    /// Records an income. Returns the new journal entry's identifier.
    fn create_income(&mut self, params: TransactionParams) -> Result<EntryId>;

    /// One view per journal entry, in entry-creation order.
    fn list_transactions(&self) -> Result<Vec<TransactionView>>;
}

/// Non-persistent repository; process exit discards everything.
///
/// Writes take `&mut self`, so one writer at a time is enforced by the
/// borrow checker. Callers sharing a repository across threads put it
/// behind a `Mutex` or `RwLock`; each create call then appears atomic to
/// readers because both records are validated before either is appended.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    journal: JournalStore,
    postings: PostingStore,
}

impl InMemoryRepository {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        InMemoryRepository {
            journal: JournalStore::new(),
            postings: PostingStore::new(),
        }
    }

    /// Journal entries in creation order.
    pub fn entries(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    /// Postings in creation order.
    pub fn postings(&self) -> &[Posting] {
        self.postings.postings()
    }

    fn record(&mut self, kind: TransactionKind, params: TransactionParams) -> Result<EntryId> {
        let account = params.account.unwrap_or_else(|| kind.default_account());
        account::lookup(account)?;

        let entry = self.journal.stage(NewJournalEntry {
            name: params.name.clone(),
            description: params.description.clone(),
            date: params.transacted_at,
        });
        let posting = self.postings.stage(NewPosting {
            name: params.name,
            description: params.description,
            credit: params.credit,
            debit: params.debit,
            entry_id: entry.id,
            account,
        })?;

        let entry_id = entry.id;
        debug!(
            "Recording {} '{}' as entry {} / posting {} against account {}",
            kind,
            entry.name,
            entry_id,
            posting.id,
            account
        );
        self.journal.commit(entry);
        self.postings.commit(posting);

        Ok(entry_id)
    }
}

impl AccountingRepository for InMemoryRepository {
    fn create_expense(&mut self, params: TransactionParams) -> Result<EntryId> {
        self.record(TransactionKind::Expense, params)
    }

    fn create_income(&mut self, params: TransactionParams) -> Result<EntryId> {
        self.record(TransactionKind::Income, params)
    }

    fn list_transactions(&self) -> Result<Vec<TransactionView>> {
        build_views(self.journal.entries(), self.postings.postings())
    }
}
