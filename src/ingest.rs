//! Statement ingestion.
//!
//! Streams a statement export row by row, drops the leading metadata block,
//! applies the optional month filter, and books each remaining row through
//! an [`AccountingRepository`]. The first bad row aborts the run.

use crate::error::{LedgerError, Result};
use crate::month::YearMonth;
use crate::repository::{AccountingRepository, TransactionKind, TransactionParams};
use crate::statement::StatementFormat;
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use std::io::Read;

/// Counts from one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Data rows read after the header.
    pub rows: usize,
    /// Rows outside the month filter.
    pub skipped: usize,
    pub expenses: usize,
    pub incomes: usize,
}

/// Reads a statement from `reader` and books its rows into `repo`.
///
/// Rows outside `month` are skipped as soon as their date parses, before
/// their amounts are checked. Rows already booked before an error stay in
/// the repository.
pub fn ingest<R, A>(
    reader: R,
    format: StatementFormat,
    month: Option<YearMonth>,
    repo: &mut A,
) -> Result<IngestSummary>
where
    R: Read,
    A: AccountingRepository + ?Sized,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let skip = format.skip_rows();
    for found in 0..skip {
        match records.next() {
            Some(record) => {
                record?;
            }
            None => return Err(LedgerError::TooFewRows { skip, found }),
        }
    }
    debug!("Skipped {} metadata rows of {}", skip, format.name());

    let headers = match records.next() {
        Some(record) => record?,
        None => return Err(LedgerError::TooFewRows { skip, found: skip }),
    };

    let mut summary = IngestSummary::default();
    for (idx, record) in records.enumerate() {
        let row_num = skip + idx + 2; // 1-indexed, after metadata and header
        summary.rows += 1;

        let row = match format.parse_record(&record?, &headers, row_num, month)? {
            Some(row) => row,
            None => {
                debug!("Row {}: outside the month filter, skipping", row_num);
                summary.skipped += 1;
                continue;
            }
        };

        debug!("Row {}: booking {} '{}'", row_num, row.kind, row.name);
        let params = TransactionParams::new(row.name, "", row.date, row.credit, row.debit);
        match row.kind {
            TransactionKind::Expense => {
                repo.create_expense(params)?;
                summary.expenses += 1;
            }
            TransactionKind::Income => {
                repo.create_income(params)?;
                summary.incomes += 1;
            }
        }
    }

    info!(
        "Ingested {}: {} rows, {} expenses, {} incomes, {} skipped",
        format.name(),
        summary.rows,
        summary.expenses,
        summary.incomes,
        summary.skipped
    );
    Ok(summary)
}
