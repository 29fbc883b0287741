//! Journal entries, postings, and the append-only stores that hold them.
//!
//! Writes happen in two steps: `stage` builds a record carrying the next
//! identifier without touching the store, `commit` appends it. The
//! repository stages every record of a transaction before committing any,
//! so a failed validation leaves both stores untouched.

use crate::account::AccountId;
use crate::error::{LedgerError, Result};
use crate::money::Money;
use chrono::NaiveDate;
use std::fmt;

/// Journal entry identifier, assigned in creation order from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u64);

/// Posting identifier, assigned in creation order from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostingId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Header of one logical transaction. Carries no amount of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Fields of a journal entry before an identifier is assigned.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

/// One-sided movement of money against one account.
///
/// # Invariants
///
/// - At most one of `credit` and `debit` is non-zero
/// - `entry_id` names the journal entry this posting belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub id: PostingId,
    pub name: String,
    pub description: String,
    pub credit: Money,
    pub debit: Money,
    pub entry_id: EntryId,
    pub account: AccountId,
}

/// Fields of a posting before an identifier is assigned.
#[derive(Debug, Clone)]
pub struct NewPosting {
    pub name: String,
    pub description: String,
    pub credit: Money,
    pub debit: Money,
    pub entry_id: EntryId,
    pub account: AccountId,
}

/// Append-only store of journal entries.
#[derive(Debug, Default)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
    next_id: u64,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the entry that the next `commit` will append.
    pub fn stage(&self, new: NewJournalEntry) -> JournalEntry {
        JournalEntry {
            id: EntryId(self.next_id),
            name: new.name,
            description: new.description,
            date: new.date,
        }
    }

    /// Appends a staged entry.
    pub fn commit(&mut self, entry: JournalEntry) {
        debug_assert_eq!(
            entry.id,
            EntryId(self.next_id),
            "entry committed out of order"
        );
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// All entries in creation order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }
}

/// Append-only store of postings.
#[derive(Debug, Default)]
pub struct PostingStore {
    postings: Vec<Posting>,
    next_id: u64,
}

impl PostingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the posting that the next `commit` will append.
    ///
    /// Rejects a posting that is both a credit and a debit.
    pub fn stage(&self, new: NewPosting) -> Result<Posting> {
        if !new.credit.is_zero() && !new.debit.is_zero() {
            return Err(LedgerError::TwoSidedPosting {
                name: new.name,
                credit: new.credit,
                debit: new.debit,
            });
        }

        Ok(Posting {
            id: PostingId(self.next_id),
            name: new.name,
            description: new.description,
            credit: new.credit,
            debit: new.debit,
            entry_id: new.entry_id,
            account: new.account,
        })
    }

    /// Appends a staged posting.
    pub fn commit(&mut self, posting: Posting) {
        debug_assert_eq!(
            posting.id,
            PostingId(self.next_id),
            "posting committed out of order"
        );
        self.next_id += 1;
        self.postings.push(posting);
    }

    /// All postings in creation order.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::BANK_ACCOUNT;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 13).unwrap()
    }

    fn new_entry(name: &str) -> NewJournalEntry {
        NewJournalEntry {
            name: name.to_string(),
            description: String::new(),
            date: date(),
        }
    }

    fn new_posting(entry_id: EntryId, credit: i64, debit: i64) -> NewPosting {
        NewPosting {
            name: "Coffee".to_string(),
            description: String::new(),
            credit: Money::from_micros(credit).unwrap(),
            debit: Money::from_micros(debit).unwrap(),
            entry_id,
            account: BANK_ACCOUNT,
        }
    }

    #[test]
    fn test_entry_ids_follow_creation_order() {
        let mut store = JournalStore::new();
        for name in ["a", "b", "c"] {
            let entry = store.stage(new_entry(name));
            store.commit(entry);
        }

        let ids: Vec<_> = store.entries().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(store.entries()[1].name, "b");
    }

    #[test]
    fn test_stage_does_not_append() {
        let store = JournalStore::new();
        let first = store.stage(new_entry("a"));
        let again = store.stage(new_entry("b"));

        assert_eq!(first.id, again.id);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_posting_ids_follow_creation_order() {
        let mut store = PostingStore::new();
        for _ in 0..3 {
            let posting = store.stage(new_posting(EntryId(0), 0, 10)).unwrap();
            store.commit(posting);
        }

        let ids: Vec<_> = store.postings().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(store.postings().len(), 3);
    }

    #[test]
    fn test_two_sided_posting_rejected() {
        let store = PostingStore::new();
        let result = store.stage(new_posting(EntryId(0), 5, 10));

        assert!(matches!(result, Err(LedgerError::TwoSidedPosting { .. })));
    }

    #[test]
    fn test_zero_posting_allowed() {
        let store = PostingStore::new();
        let posting = store.stage(new_posting(EntryId(0), 0, 0)).unwrap();

        assert!(posting.credit.is_zero());
        assert!(posting.debit.is_zero());
    }
}
