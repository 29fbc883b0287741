//! Bank statement formats.
//!
//! Each institution exports CSV with its own leading metadata block, column
//! names, date layout, and sign convention. The raw records here mirror the
//! columns as exported; [`StatementRow`] is the normalized form the
//! ingestion loop books into the ledger.

use crate::error::{LedgerError, Result};
use crate::money::Money;
use crate::month::YearMonth;
use crate::repository::TransactionKind;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::Deserialize;

/// Supported statement exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatementFormat {
    /// DBS credit card transactions.
    DbsCreditCard,
    /// OCBC account statement.
    OcbcAccount,
}

impl StatementFormat {
    /// Metadata rows (card and account numbers) before the header row.
    pub fn skip_rows(&self) -> usize {
        match self {
            StatementFormat::DbsCreditCard => 6,
            StatementFormat::OcbcAccount => 5,
        }
    }

    /// `chrono` layout of the transaction date column.
    pub fn date_layout(&self) -> &'static str {
        match self {
            StatementFormat::DbsCreditCard => "%d %b %Y",
            StatementFormat::OcbcAccount => "%d/%m/%Y",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatementFormat::DbsCreditCard => "DBS credit card",
            StatementFormat::OcbcAccount => "OCBC account statement",
        }
    }

    /// Deserializes one data row against the statement's header row.
    ///
    /// `row` is the 1-indexed line in the file, used in error messages.
    /// Rows dated outside `month` yield `None` once their date parses; their
    /// amounts are not checked.
    pub fn parse_record(
        &self,
        record: &StringRecord,
        headers: &StringRecord,
        row: usize,
        month: Option<YearMonth>,
    ) -> Result<Option<StatementRow>> {
        let in_month = |date: NaiveDate| month.map_or(true, |m| m.contains(date));

        match self {
            StatementFormat::DbsCreditCard => {
                let record: DbsCreditCardRecord = record.deserialize(Some(headers))?;
                if !in_month(record.date(row)?) {
                    return Ok(None);
                }
                record.parse(row).map(Some)
            }
            StatementFormat::OcbcAccount => {
                let record: OcbcAccountRecord = record.deserialize(Some(headers))?;
                if !in_month(record.date(row)?) {
                    return Ok(None);
                }
                record.parse(row).map(Some)
            }
        }
    }
}

/// One line of a DBS credit card export.
///
/// Exactly one of `debit_amount` and `credit_amount` carries a value.
#[derive(Debug, Deserialize)]
pub struct DbsCreditCardRecord {
    /// e.g. "13 Dec 2025"
    #[serde(rename = "Transaction Date")]
    pub transaction_date: String,

    #[serde(rename = "Transaction Posting Date", default)]
    pub posting_date: String,

    /// e.g. "SUPER SIMPLE           SINGAPORE     SG"
    #[serde(rename = "Transaction Description")]
    pub description: String,

    /// e.g. "Contactless", "Online/In-App Payment"
    #[serde(rename = "Payment Type", default)]
    pub payment_type: String,

    /// e.g. "Settled"
    #[serde(rename = "Transaction Status", default)]
    pub status: String,

    /// e.g. "2.94"
    #[serde(rename = "Debit Amount")]
    pub debit_amount: String,

    #[serde(rename = "Credit Amount")]
    pub credit_amount: String,
}

impl DbsCreditCardRecord {
    pub fn date(&self, row: usize) -> Result<NaiveDate> {
        parse_date(
            &self.transaction_date,
            StatementFormat::DbsCreditCard.date_layout(),
            row,
            "Transaction Date",
        )
    }

    /// Every card row is booked as an expense; refunds land on the credit side.
    pub fn parse(&self, row: usize) -> Result<StatementRow> {
        let date = self.date(row)?;
        let debit = parse_amount(&self.debit_amount, row, "Debit Amount")?;
        let credit = parse_amount(&self.credit_amount, row, "Credit Amount")?;
        ensure_one_sided(&self.description, credit, debit, row)?;

        Ok(StatementRow {
            date,
            name: self.description.clone(),
            kind: TransactionKind::Expense,
            credit,
            debit,
        })
    }
}

/// One line of an OCBC account statement export.
#[derive(Debug, Deserialize)]
pub struct OcbcAccountRecord {
    /// e.g. "22/12/2025"
    #[serde(rename = "Transaction date")]
    pub transaction_date: String,

    #[serde(rename = "Value date", default)]
    pub value_date: String,

    #[serde(rename = "Description")]
    pub description: String,

    /// e.g. "6,002.94"
    #[serde(rename = "Withdrawals(SGD)")]
    pub withdrawals: String,

    #[serde(rename = "Deposits(SGD)")]
    pub deposits: String,
}

impl OcbcAccountRecord {
    pub fn date(&self, row: usize) -> Result<NaiveDate> {
        parse_date(
            &self.transaction_date,
            StatementFormat::OcbcAccount.date_layout(),
            row,
            "Transaction date",
        )
    }

    /// Withdrawals become expenses on the debit side, deposits become
    /// incomes on the credit side.
    pub fn parse(&self, row: usize) -> Result<StatementRow> {
        let date = self.date(row)?;
        let debit = parse_amount(&self.withdrawals, row, "Withdrawals(SGD)")?;
        let credit = parse_amount(&self.deposits, row, "Deposits(SGD)")?;
        ensure_one_sided(&self.description, credit, debit, row)?;

        let kind = if debit.is_zero() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };

        Ok(StatementRow {
            date,
            name: self.description.clone(),
            kind,
            credit,
            debit,
        })
    }
}

/// A validated statement row, ready to book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub name: String,
    pub kind: TransactionKind,
    pub credit: Money,
    pub debit: Money,
}

fn parse_date(value: &str, layout: &str, row: usize, field: &'static str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), layout).map_err(|_| LedgerError::InvalidDate {
        row,
        field,
        value: value.to_string(),
    })
}

fn parse_amount(value: &str, row: usize, field: &'static str) -> Result<Money> {
    Money::parse_field(value).map_err(|source| LedgerError::InvalidAmount {
        row,
        field,
        source,
    })
}

fn ensure_one_sided(name: &str, credit: Money, debit: Money, row: usize) -> Result<()> {
    match (credit.is_zero(), debit.is_zero()) {
        (true, false) | (false, true) => Ok(()),
        (false, false) => Err(LedgerError::InvalidRecord {
            row,
            message: format!("'{}' has both credit {} and debit {}", name, credit, debit),
        }),
        (true, true) => Err(LedgerError::InvalidRecord {
            row,
            message: format!("'{}' has neither a credit nor a debit", name),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dbs(date: &str, debit: &str, credit: &str) -> DbsCreditCardRecord {
        DbsCreditCardRecord {
            transaction_date: date.to_string(),
            posting_date: String::new(),
            description: "SUPER SIMPLE SINGAPORE SG".to_string(),
            payment_type: "Contactless".to_string(),
            status: "Settled".to_string(),
            debit_amount: debit.to_string(),
            credit_amount: credit.to_string(),
        }
    }

    fn ocbc(date: &str, withdrawals: &str, deposits: &str) -> OcbcAccountRecord {
        OcbcAccountRecord {
            transaction_date: date.to_string(),
            value_date: String::new(),
            description: "SALARY".to_string(),
            withdrawals: withdrawals.to_string(),
            deposits: deposits.to_string(),
        }
    }

    #[test]
    fn test_dbs_debit_is_expense() {
        let row = dbs("13 Dec 2025", "2.94", "").parse(8).unwrap();

        assert_eq!(row.date, NaiveDate::from_ymd_opt(2025, 12, 13).unwrap());
        assert_eq!(row.kind, TransactionKind::Expense);
        assert_eq!(row.debit.micros(), 2_940_000);
        assert!(row.credit.is_zero());
    }

    #[test]
    fn test_dbs_refund_stays_expense_on_credit_side() {
        let row = dbs("01 Dec 2025", "", "10.00").parse(8).unwrap();

        assert_eq!(row.kind, TransactionKind::Expense);
        assert_eq!(row.credit.micros(), 10_000_000);
    }

    #[test]
    fn test_dbs_rejects_wrong_date_layout() {
        let err = dbs("13/12/2025", "2.94", "").parse(8).unwrap_err();

        match err {
            LedgerError::InvalidDate { row, field, value } => {
                assert_eq!(row, 8);
                assert_eq!(field, "Transaction Date");
                assert_eq!(value, "13/12/2025");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_ocbc_withdrawal_with_separators() {
        let row = ocbc("22/12/2025", "6,002.94", "").parse(7).unwrap();

        assert_eq!(row.kind, TransactionKind::Expense);
        assert_eq!(row.debit.micros(), 6_002_940_000);
    }

    #[test]
    fn test_ocbc_deposit_is_income() {
        let row = ocbc("2/1/2026", "", "3,000.00").parse(7).unwrap();

        assert_eq!(row.date, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert_eq!(row.kind, TransactionKind::Income);
        assert_eq!(row.credit.micros(), 3_000_000_000);
    }

    #[test]
    fn test_two_sided_row_rejected() {
        let err = ocbc("22/12/2025", "1.00", "2.00").parse(9).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidRecord { row: 9, .. }));
    }

    #[test]
    fn test_empty_row_rejected() {
        let err = dbs("13 Dec 2025", "", "").parse(9).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidRecord { row: 9, .. }));
    }

    #[test]
    fn test_non_numeric_amount_names_field() {
        let err = ocbc("22/12/2025", "n/a", "").parse(10).unwrap_err();

        match err {
            LedgerError::InvalidAmount { row, field, .. } => {
                assert_eq!(row, 10);
                assert_eq!(field, "Withdrawals(SGD)");
            }
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_uses_headers() {
        let headers = StringRecord::from(vec![
            "Transaction date",
            "Value date",
            "Description",
            "Withdrawals(SGD)",
            "Deposits(SGD)",
        ]);
        let record = StringRecord::from(vec!["22/12/2025", "23/12/2025", "GROCER", "12.30", ""]);

        let row = StatementFormat::OcbcAccount
            .parse_record(&record, &headers, 7, None)
            .unwrap()
            .unwrap();
        assert_eq!(row.name, "GROCER");
        assert_eq!(row.debit.micros(), 12_300_000);
    }

    #[test]
    fn test_parse_record_skips_other_months_before_amounts() {
        let headers = StringRecord::from(vec![
            "Transaction date",
            "Value date",
            "Description",
            "Withdrawals(SGD)",
            "Deposits(SGD)",
        ]);
        let record = StringRecord::from(vec!["02/11/2025", "02/11/2025", "OLD", "n/a", ""]);
        let december = YearMonth::new(2025, 12);

        let skipped = StatementFormat::OcbcAccount
            .parse_record(&record, &headers, 7, december)
            .unwrap();
        assert!(skipped.is_none());

        let err = StatementFormat::OcbcAccount
            .parse_record(&record, &headers, 7, None)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount { row: 7, .. }));
    }
}
