//! Bulk import: raw workbook rows → validated transactions → one replacing
//! write.
//!
//! Validation is all-or-nothing: the first bad row rejects the whole batch
//! and the store keeps its prior collection. Errors carry the row number the
//! spreadsheet user sees (1-based, header row included).

use chrono::Utc;
use uuid::Uuid;

use crate::{
    dates,
    errors::{LedgerError, Result},
    ledger::{
        TaxonomyTags, Transaction, TransactionDraft, TransactionKind, TransactionStatus,
        TransactionStore,
    },
    storage::StorageBackend,
    workbook::Row,
};

/// Column labels shared by both kinds.
pub const COL_DATE: &str = "Tanggal";
pub const COL_CODE: &str = "ID Transaksi";
pub const COL_AMOUNT: &str = "Jumlah";
pub const COL_STATUS: &str = "Status";
pub const COL_CATEGORY: &str = "Kategori";
pub const COL_ACCOUNT: &str = "Akun";
pub const COL_NOTE: &str = "Keterangan";
/// Income-only and expense-only party columns.
pub const COL_FUND_SOURCE: &str = "Sumber Dana";
pub const COL_COUNTERPARTY: &str = "Rekanan";

/// Fallback literals for missing text cells. Only date and amount are hard
/// requirements.
pub const FALLBACK_UNKNOWN: &str = "Tidak Diketahui";
pub const FALLBACK_CATEGORY: &str = "Lain-lain";

/// Validates `rows` into store-ready transactions for `kind`, failing fast at
/// the first invalid row. Nothing is written here; pair with
/// [`run`] for the staged replace.
pub fn import_rows(kind: TransactionKind, rows: &[Row]) -> Result<Vec<Transaction>> {
    let batch_stamp = Utc::now().timestamp_millis();
    rows.iter()
        .enumerate()
        .map(|(index, row)| import_row(kind, row, index, batch_stamp))
        .collect()
}

/// Full import: stages the whole batch in memory, then replaces the store's
/// collection in a single write. Returns the number of imported records.
/// No reader can observe a partially-imported collection.
pub fn run<S: StorageBackend>(
    store: &mut TransactionStore<S>,
    rows: &[Row],
) -> Result<usize> {
    let batch = import_rows(store.kind(), rows)?;
    let count = batch.len();
    store.replace_all(batch)?;
    tracing::info!(kind = ?store.kind(), count, "import replaced collection");
    Ok(count)
}

fn import_row(
    kind: TransactionKind,
    row: &Row,
    index: usize,
    batch_stamp: i64,
) -> Result<Transaction> {
    // Spreadsheet-visible position: 1-based plus the header row.
    let visible_row = index + 2;

    let date = dates::resolve(row.get(COL_DATE))
        .ok_or(LedgerError::InvalidDate { row: visible_row })?;

    let amount = row.get(COL_AMOUNT).as_number();
    let amount = match amount {
        Some(n) if n >= 0.0 && n.fract() == 0.0 => n as u64,
        _ => return Err(LedgerError::InvalidAmount { row: visible_row }),
    };

    let text_or = |label: &str, fallback: &str| {
        row.get(label)
            .as_text()
            .unwrap_or_else(|| fallback.to_string())
    };

    let tags = match kind {
        TransactionKind::Income => TaxonomyTags::Income {
            fund_source: text_or(COL_FUND_SOURCE, FALLBACK_UNKNOWN),
            category: text_or(COL_CATEGORY, FALLBACK_CATEGORY),
            account: text_or(COL_ACCOUNT, FALLBACK_UNKNOWN),
        },
        TransactionKind::Expense => TaxonomyTags::Expense {
            counterparty: text_or(COL_COUNTERPARTY, FALLBACK_UNKNOWN),
            category: text_or(COL_CATEGORY, FALLBACK_CATEGORY),
            account: text_or(COL_ACCOUNT, FALLBACK_UNKNOWN),
        },
    };

    let code = row.get(COL_CODE).as_text().unwrap_or_else(|| {
        // Timestamp plus row index keeps codes distinct within the batch and
        // from anything generated earlier.
        format!("{}-{}-{}", kind.import_prefix(), batch_stamp, index)
    });

    let status = TransactionStatus::from_cell(row.get(COL_STATUS).as_text().as_deref());
    let note = row.get(COL_NOTE).as_text().unwrap_or_default();

    Ok(TransactionDraft {
        code,
        date,
        amount,
        status,
        tags,
        note,
    }
    .into_transaction(Uuid::new_v4()))
}
