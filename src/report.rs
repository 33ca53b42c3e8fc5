//! Monthly balance reconciliation and dashboard aggregations.
//!
//! Reports are derived views: recomputed on every request from store
//! snapshots, never persisted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ledger::Transaction;

/// Indonesian month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// One period of the balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBalanceRow {
    /// Display label, e.g. "Agustus 2024".
    pub period: String,
    pub income: u64,
    pub expense: u64,
    /// income − expense for this period, signed.
    pub net: i64,
    /// Running sum of `net` in chronological order up to this period.
    pub running_balance: i64,
}

/// Settled-only grand totals (dashboard headline figures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerTotals {
    pub income: u64,
    pub expense: u64,
    pub balance: i64,
}

/// Gross per-month activity for one calendar year, all statuses included
/// (chart feed, not a realized-balance figure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    pub month: u32,
    pub label: &'static str,
    pub income: u64,
    pub expense: u64,
}

/// Builds the monthly balance rollup.
///
/// Every transaction contributes its `(year, month)` period key, but only
/// settled amounts count toward the sums — a month holding nothing but
/// pending records still appears, as a zero row. Periods are walked in
/// ascending order to accumulate the running balance; the result is then
/// reversed so the most recent period comes first. The running balances keep
/// their chronological meaning after the reversal.
pub fn monthly_balance(incomes: &[Transaction], expenses: &[Transaction]) -> Vec<MonthlyBalanceRow> {
    let mut periods: BTreeMap<(i32, u32), (u64, u64)> = BTreeMap::new();
    for txn in incomes {
        let entry = periods.entry((txn.year, txn.month)).or_default();
        if txn.status.is_settled() {
            entry.0 += txn.amount;
        }
    }
    for txn in expenses {
        let entry = periods.entry((txn.year, txn.month)).or_default();
        if txn.status.is_settled() {
            entry.1 += txn.amount;
        }
    }

    let mut running = 0i64;
    let mut rows: Vec<MonthlyBalanceRow> = periods
        .into_iter()
        .map(|((year, month), (income, expense))| {
            let net = income as i64 - expense as i64;
            running += net;
            MonthlyBalanceRow {
                period: period_label(year, month),
                income,
                expense,
                net,
                running_balance: running,
            }
        })
        .collect();
    rows.reverse();
    rows
}

/// Settled-only totals across the whole ledger.
pub fn totals(incomes: &[Transaction], expenses: &[Transaction]) -> LedgerTotals {
    let income: u64 = settled(incomes).map(|txn| txn.amount).sum();
    let expense: u64 = settled(expenses).map(|txn| txn.amount).sum();
    LedgerTotals {
        income,
        expense,
        balance: income as i64 - expense as i64,
    }
}

/// Gross monthly activity for `year`, ascending by month. Months with no
/// activity are omitted. Pending amounts are included: this feeds activity
/// charts, not the realized balance.
pub fn monthly_activity(
    year: i32,
    incomes: &[Transaction],
    expenses: &[Transaction],
) -> Vec<MonthlyActivity> {
    let mut months: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
    for txn in incomes.iter().filter(|txn| txn.year == year) {
        months.entry(txn.month).or_default().0 += txn.amount;
    }
    for txn in expenses.iter().filter(|txn| txn.year == year) {
        months.entry(txn.month).or_default().1 += txn.amount;
    }
    months
        .into_iter()
        .map(|(month, (income, expense))| MonthlyActivity {
            month,
            label: MONTH_NAMES[(month - 1) as usize],
            income,
            expense,
        })
        .collect()
}

fn settled(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|txn| txn.status.is_settled())
}

fn period_label(year: i32, month: u32) -> String {
    format!("{} {}", MONTH_NAMES[(month - 1) as usize], year)
}
