//! Chart of accounts.
//!
//! The chart is compiled into the process. Accounts are never created or
//! removed at run time, so an unknown identifier is a configuration error.

use crate::error::{LedgerError, Result};
use std::fmt;

/// Numeric account code, unique within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five accounting classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountClass {
    /// What you own.
    Asset,
    /// What you owe.
    Liability,
    /// Where money comes from.
    Income,
    /// Where money goes.
    Expense,
    /// Net worth.
    Equity,
}

/// Side on which an account's balance normally grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalBalance {
    Debit,
    Credit,
}

impl AccountClass {
    pub fn normal_balance(&self) -> NormalBalance {
        match self {
            AccountClass::Asset | AccountClass::Expense => NormalBalance::Debit,
            AccountClass::Liability | AccountClass::Income | AccountClass::Equity => {
                NormalBalance::Credit
            }
        }
    }
}

/// One ledger bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: &'static str,
    pub class: AccountClass,
    /// Rollup parent. Not used by aggregation.
    pub parent: Option<AccountId>,
}

pub const BANK_ACCOUNT: AccountId = AccountId(1000);
pub const CASH_ON_HAND: AccountId = AccountId(1100);
pub const INVESTMENTS: AccountId = AccountId(1200);
pub const ACCOUNTS_RECEIVABLE: AccountId = AccountId(1300);

pub const CREDIT_CARD: AccountId = AccountId(2100);
pub const STUDENT_LOAN: AccountId = AccountId(2200);
pub const MORTGAGE_CAR_LOAN: AccountId = AccountId(2300);
pub const PERSONAL_LOANS: AccountId = AccountId(2400);

pub const SALARY_WAGES: AccountId = AccountId(3100);
pub const INTEREST_INCOME: AccountId = AccountId(3200);
pub const GIFTS_RECEIVED: AccountId = AccountId(3300);
pub const SIDE_HUSTLE_INCOME: AccountId = AccountId(3400);
pub const TAX_REFUNDS: AccountId = AccountId(3500);

pub const HOUSING: AccountId = AccountId(4100);
pub const GROCERIES: AccountId = AccountId(4200);
pub const DINING_OUT: AccountId = AccountId(4300);
pub const UTILITIES: AccountId = AccountId(4400);
pub const TRANSPORTATION: AccountId = AccountId(4500);
pub const SUBSCRIPTIONS: AccountId = AccountId(4600);
pub const PERSONAL_CARE: AccountId = AccountId(4700);

pub const OPENING_BALANCE_EQUITY: AccountId = AccountId(5100);
pub const RETAINED_EARNINGS: AccountId = AccountId(5200);

/// Counter-account for expense postings unless the caller picks another.
pub const DEFAULT_EXPENSE_ACCOUNT: AccountId = BANK_ACCOUNT;

/// Counter-account for income postings unless the caller picks another.
pub const DEFAULT_INCOME_ACCOUNT: AccountId = SALARY_WAGES;

const fn account(id: AccountId, name: &'static str, class: AccountClass) -> Account {
    Account {
        id,
        name,
        class,
        parent: None,
    }
}

/// The full chart, ordered by code.
pub static CHART: &[Account] = &[
    account(BANK_ACCOUNT, "Bank Account", AccountClass::Asset),
    account(CASH_ON_HAND, "Cash on Hand", AccountClass::Asset),
    account(INVESTMENTS, "Investments", AccountClass::Asset),
    account(
        ACCOUNTS_RECEIVABLE,
        "Accounts Receivable",
        AccountClass::Asset,
    ),
    account(CREDIT_CARD, "Credit Card", AccountClass::Liability),
    account(STUDENT_LOAN, "Student Loan", AccountClass::Liability),
    account(
        MORTGAGE_CAR_LOAN,
        "Mortgage / Car Loan",
        AccountClass::Liability,
    ),
    account(PERSONAL_LOANS, "Personal Loans", AccountClass::Liability),
    account(SALARY_WAGES, "Salary / Wages", AccountClass::Income),
    account(INTEREST_INCOME, "Interest Income", AccountClass::Income),
    account(GIFTS_RECEIVED, "Gifts Received", AccountClass::Income),
    account(
        SIDE_HUSTLE_INCOME,
        "Side Hustle Income",
        AccountClass::Income,
    ),
    account(TAX_REFUNDS, "Tax Refunds", AccountClass::Income),
    account(HOUSING, "Housing", AccountClass::Expense),
    account(GROCERIES, "Groceries", AccountClass::Expense),
    account(DINING_OUT, "Dining Out", AccountClass::Expense),
    account(UTILITIES, "Utilities", AccountClass::Expense),
    account(TRANSPORTATION, "Transportation", AccountClass::Expense),
    account(SUBSCRIPTIONS, "Subscriptions", AccountClass::Expense),
    account(PERSONAL_CARE, "Personal Care", AccountClass::Expense),
    account(
        OPENING_BALANCE_EQUITY,
        "Opening Balance Equity",
        AccountClass::Equity,
    ),
    account(RETAINED_EARNINGS, "Retained Earnings", AccountClass::Equity),
];

/// Looks up an account by code.
pub fn lookup(id: AccountId) -> Result<&'static Account> {
    CHART
        .iter()
        .find(|a| a.id == id)
        .ok_or(LedgerError::UnknownAccount(id))
}
