use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two ledger record kinds. Operations mirror each other; the kind
/// selects storage key, advisory-code prefix, and taxonomy field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Key under which this kind's collection persists.
    pub fn storage_key(self) -> &'static str {
        match self {
            TransactionKind::Income => "penerimaan",
            TransactionKind::Expense => "pengeluaran",
        }
    }

    /// Prefix of generated advisory transaction codes.
    pub fn code_prefix(self) -> &'static str {
        match self {
            TransactionKind::Income => "DP",
            TransactionKind::Expense => "DK",
        }
    }

    /// Prefix of codes synthesized for imported rows without an ID cell.
    pub fn import_prefix(self) -> &'static str {
        match self {
            TransactionKind::Income => "IMP-P",
            TransactionKind::Expense => "IMP-E",
        }
    }
}

/// Realization status. Only settled records count toward balance reports.
/// Serialized with the original ledger's literals so existing exports and
/// stored data stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "Lunas")]
    Settled,
    Pending,
}

impl TransactionStatus {
    /// The spreadsheet literal that means settled; anything else is pending.
    pub const SETTLED_LITERAL: &'static str = "Lunas";

    pub fn from_cell(text: Option<&str>) -> Self {
        match text {
            Some(s) if s == Self::SETTLED_LITERAL => TransactionStatus::Settled,
            _ => TransactionStatus::Pending,
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, TransactionStatus::Settled)
    }
}

/// Variant-specific categorical fields. Values are free-form strings drawn
/// from, but not restricted to, the option registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TaxonomyTags {
    Income {
        fund_source: String,
        category: String,
        account: String,
    },
    Expense {
        counterparty: String,
        category: String,
        account: String,
    },
}

impl TaxonomyTags {
    pub fn kind(&self) -> TransactionKind {
        match self {
            TaxonomyTags::Income { .. } => TransactionKind::Income,
            TaxonomyTags::Expense { .. } => TransactionKind::Expense,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            TaxonomyTags::Income { category, .. } | TaxonomyTags::Expense { category, .. } => {
                category
            }
        }
    }

    pub fn account(&self) -> &str {
        match self {
            TaxonomyTags::Income { account, .. } | TaxonomyTags::Expense { account, .. } => account,
        }
    }

    /// Fund source for income records, counterparty for expenses.
    pub fn party(&self) -> &str {
        match self {
            TaxonomyTags::Income { fund_source, .. } => fund_source,
            TaxonomyTags::Expense { counterparty, .. } => counterparty,
        }
    }
}

/// A single ledger record.
///
/// `month` and `year` are denormalized from `date` for grouping and filtering;
/// [`Transaction::apply_date`] is the only derivation point and every mutation
/// path goes through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    /// Advisory business code (e.g. `DP20240815-001`). Display-only; not
    /// collision-checked and not the unique key.
    pub code: String,
    pub date: NaiveDate,
    pub month: u32,
    pub year: i32,
    /// Whole Rupiah; fractional or negative input is rejected upstream.
    pub amount: u64,
    pub status: TransactionStatus,
    #[serde(flatten)]
    pub tags: TaxonomyTags,
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        self.tags.kind()
    }

    /// Sets `date` and rederives the denormalized `month`/`year` pair.
    pub fn apply_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.month = date.month();
        self.year = date.year();
    }
}

/// Caller-supplied fields for a new record; the store assigns identity and
/// derives the rest.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub code: String,
    pub date: NaiveDate,
    pub amount: u64,
    pub status: TransactionStatus,
    pub tags: TaxonomyTags,
    pub note: String,
}

impl TransactionDraft {
    pub(crate) fn into_transaction(self, id: Uuid) -> Transaction {
        let mut txn = Transaction {
            id,
            code: self.code,
            date: self.date,
            month: 0,
            year: 0,
            amount: self.amount,
            status: self.status,
            tags: self.tags,
            note: self.note,
        };
        txn.apply_date(self.date);
        txn
    }
}
