//! Workbook row builders for the export paths.
//!
//! Produces rows with the same column labels the import pipeline reads, so a
//! file exported here can be re-imported unchanged. Encoding to bytes is the
//! codec collaborator's job.

use crate::{
    import::{
        COL_ACCOUNT, COL_AMOUNT, COL_CATEGORY, COL_CODE, COL_COUNTERPARTY, COL_DATE,
        COL_FUND_SOURCE, COL_NOTE, COL_STATUS,
    },
    ledger::{Transaction, TransactionStatus},
    report::MonthlyBalanceRow,
    workbook::{CellValue, Row},
};

fn status_cell(status: TransactionStatus) -> CellValue {
    CellValue::Text(match status {
        TransactionStatus::Settled => TransactionStatus::SETTLED_LITERAL.to_string(),
        TransactionStatus::Pending => "Pending".to_string(),
    })
}

fn base_row(txn: &Transaction, party_label: &str) -> Row {
    Row::new()
        .with(COL_DATE, CellValue::Date(txn.date))
        .with(COL_CODE, CellValue::Text(txn.code.clone()))
        .with(party_label, CellValue::Text(txn.tags.party().to_string()))
        .with(COL_AMOUNT, CellValue::Number(txn.amount as f64))
        .with(COL_STATUS, status_cell(txn.status))
        .with(COL_CATEGORY, CellValue::Text(txn.tags.category().to_string()))
        .with(COL_ACCOUNT, CellValue::Text(txn.tags.account().to_string()))
        .with(COL_NOTE, CellValue::Text(txn.note.clone()))
}

/// Income transactions as workbook rows (`Sumber Dana` party column).
pub fn income_rows(transactions: &[Transaction]) -> Vec<Row> {
    transactions
        .iter()
        .map(|txn| base_row(txn, COL_FUND_SOURCE))
        .collect()
}

/// Expense transactions as workbook rows (`Rekanan` party column).
pub fn expense_rows(transactions: &[Transaction]) -> Vec<Row> {
    transactions
        .iter()
        .map(|txn| base_row(txn, COL_COUNTERPARTY))
        .collect()
}

/// Monthly balance report as workbook rows, using the original report's
/// column labels.
pub fn balance_rows(report: &[MonthlyBalanceRow]) -> Vec<Row> {
    report
        .iter()
        .map(|row| {
            Row::new()
                .with("Bulan", CellValue::Text(row.period.clone()))
                .with("Penerimaan", CellValue::Number(row.income as f64))
                .with("Pengeluaran", CellValue::Number(row.expense as f64))
                .with("Saldo Bulanan", CellValue::Number(row.net as f64))
                .with("Saldo Akhir", CellValue::Number(row.running_balance as f64))
        })
        .collect()
}
