//! Per-transaction views reconstructed from raw postings.

use crate::error::{LedgerError, Result};
use crate::journal::{EntryId, JournalEntry, Posting, PostingId};
use crate::money::Money;
use chrono::NaiveDate;
use log::trace;
use std::collections::{BTreeSet, HashMap};

/// One journal entry with the sums of its postings.
///
/// Derived on every query and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionView {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub credit: Money,
    pub debit: Money,
    pub posting_ids: BTreeSet<PostingId>,
}

impl TransactionView {
    fn open(entry: &JournalEntry) -> Self {
        TransactionView {
            id: entry.id,
            name: entry.name.clone(),
            description: entry.description.clone(),
            date: entry.date,
            credit: Money::ZERO,
            debit: Money::ZERO,
            posting_ids: BTreeSet::new(),
        }
    }

    fn absorb(&mut self, posting: &Posting) -> Result<()> {
        let credit = self.credit.checked_add(posting.credit);
        let debit = self.debit.checked_add(posting.debit);
        match (credit, debit) {
            (Some(credit), Some(debit)) => {
                self.credit = credit;
                self.debit = debit;
            }
            _ => return Err(LedgerError::AmountOverflow { entry_id: self.id }),
        }
        self.posting_ids.insert(posting.id);
        Ok(())
    }
}

/// Builds one view per entry, in the order the entries are given.
///
/// Runs one pass over entries to index them, then one pass over postings.
/// A posting whose entry is absent fails the whole call with
/// [`LedgerError::DanglingPosting`]; it is never skipped.
pub fn build_views(
    entries: &[JournalEntry],
    postings: &[Posting],
) -> Result<Vec<TransactionView>> {
    let mut views: Vec<TransactionView> = entries.iter().map(TransactionView::open).collect();
    let index: HashMap<EntryId, usize> = views
        .iter()
        .enumerate()
        .map(|(idx, view)| (view.id, idx))
        .collect();

    for posting in postings {
        let idx = *index
            .get(&posting.entry_id)
            .ok_or(LedgerError::DanglingPosting {
                entry_id: posting.entry_id,
            })?;

        let view = &mut views[idx];
        view.absorb(posting)?;
        trace!(
            "Posting {} added to entry {}: credit {} debit {}",
            posting.id,
            view.id,
            view.credit,
            view.debit
        );
    }

    Ok(views)
}
