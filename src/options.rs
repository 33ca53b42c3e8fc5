//! Open-ended taxonomy registry.
//!
//! The set of taxonomy keys is fixed; the value set behind each key is not.
//! The read view is the union of explicitly registered values and every
//! distinct value already present in ledger data, so a value used on a
//! transaction is a valid option even before anyone registers it.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    ledger::{TaxonomyTags, Transaction},
    storage::StorageBackend,
};

const STORAGE_KEY: &str = "options";

/// The fixed categorical dimensions of the ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TaxonomyKey {
    FundSource,
    IncomeCategory,
    Account,
    Counterparty,
    ExpenseCategory,
}

impl TaxonomyKey {
    pub const ALL: [TaxonomyKey; 5] = [
        TaxonomyKey::FundSource,
        TaxonomyKey::IncomeCategory,
        TaxonomyKey::Account,
        TaxonomyKey::Counterparty,
        TaxonomyKey::ExpenseCategory,
    ];

    /// Wire/storage name, matching the original ledger's key strings.
    pub fn name(self) -> &'static str {
        match self {
            TaxonomyKey::FundSource => "sumberDana",
            TaxonomyKey::IncomeCategory => "kategoriPenerimaan",
            TaxonomyKey::Account => "akun",
            TaxonomyKey::Counterparty => "rekanan",
            TaxonomyKey::ExpenseCategory => "kategoriPengeluaran",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

static DEFAULT_OPTIONS: Lazy<BTreeMap<TaxonomyKey, Vec<String>>> = Lazy::new(|| {
    let seed = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
    BTreeMap::from([
        (
            TaxonomyKey::FundSource,
            seed(&[
                "Gaji Bulanan",
                "Proyek Freelance",
                "Bonus Kinerja",
                "Penjualan Barang Bekas",
            ]),
        ),
        (
            TaxonomyKey::IncomeCategory,
            seed(&["Pendapatan Tetap", "Pendapatan Tidak Tetap", "Lain-lain"]),
        ),
        (
            TaxonomyKey::Account,
            seed(&["Bank BCA", "Bank Mandiri", "GoPay", "OVO", "Tunai"]),
        ),
        (
            TaxonomyKey::Counterparty,
            seed(&[
                "Superindo",
                "PLN",
                "Warung Padang",
                "Bengkel Maju Jaya",
                "Cinema XXI",
            ]),
        ),
        (
            TaxonomyKey::ExpenseCategory,
            seed(&[
                "Kebutuhan Pokok",
                "Tagihan",
                "Hiburan",
                "Transportasi",
                "Lain-lain",
            ]),
        ),
    ])
});

/// Registered taxonomy values plus the union view over live ledger data.
pub struct OptionRegistry<S: StorageBackend> {
    registered: BTreeMap<TaxonomyKey, Vec<String>>,
    storage: S,
}

impl<S: StorageBackend> OptionRegistry<S> {
    /// Opens the registry from persistence, seeding defaults on first use
    /// (or after a discarded corrupt payload).
    pub fn open(storage: S) -> Self {
        let persisted: BTreeMap<String, Vec<String>> = storage.load(STORAGE_KEY);
        let recognized: BTreeMap<TaxonomyKey, Vec<String>> = persisted
            .into_iter()
            .filter_map(|(name, values)| TaxonomyKey::from_name(&name).map(|key| (key, values)))
            .collect();
        // A payload with no recognizable keys is as good as no payload.
        let registered = if recognized.is_empty() {
            DEFAULT_OPTIONS.clone()
        } else {
            recognized
        };
        Self {
            registered,
            storage,
        }
    }

    /// Union of registered and observed values per key, deduplicated.
    /// Recomputed per call; ordering across calls is not guaranteed.
    pub fn options(
        &self,
        incomes: &[Transaction],
        expenses: &[Transaction],
    ) -> BTreeMap<TaxonomyKey, Vec<String>> {
        TaxonomyKey::ALL
            .into_iter()
            .map(|key| {
                let mut values = self.registered.get(&key).cloned().unwrap_or_default();
                for observed in observed_values(key, incomes, expenses) {
                    if !values.iter().any(|v| v == observed) {
                        values.push(observed.to_string());
                    }
                }
                (key, values)
            })
            .collect()
    }

    /// Registers `value` under `key` if not already present; idempotent.
    pub fn add(&mut self, key: TaxonomyKey, value: &str) -> Result<()> {
        let values = self.registered.entry(key).or_default();
        if values.iter().any(|v| v == value) {
            return Ok(());
        }
        values.push(value.to_string());
        self.persist()
    }

    /// String-keyed variant for callers holding raw form state. Unknown key
    /// names are ignored: the key set is fixed even though its contents are
    /// open-ended.
    pub fn add_by_name(&mut self, name: &str, value: &str) -> Result<()> {
        match TaxonomyKey::from_name(name) {
            Some(key) => self.add(key, value),
            None => {
                tracing::debug!(name, "ignoring option for unrecognized taxonomy key");
                Ok(())
            }
        }
    }

    fn persist(&self) -> Result<()> {
        let by_name: BTreeMap<&str, &Vec<String>> = self
            .registered
            .iter()
            .map(|(key, values)| (key.name(), values))
            .collect();
        self.storage.save(STORAGE_KEY, &by_name)
    }
}

/// Values a key observes from live data: income fields feed the income-side
/// keys, expense fields the expense side, and accounts come from both kinds.
fn observed_values<'a>(
    key: TaxonomyKey,
    incomes: &'a [Transaction],
    expenses: &'a [Transaction],
) -> Vec<&'a str> {
    let income_tags = incomes.iter().map(|txn| &txn.tags);
    let expense_tags = expenses.iter().map(|txn| &txn.tags);
    match key {
        TaxonomyKey::FundSource => income_tags.map(TaxonomyTags::party).collect(),
        TaxonomyKey::IncomeCategory => income_tags.map(TaxonomyTags::category).collect(),
        TaxonomyKey::Account => income_tags
            .map(TaxonomyTags::account)
            .chain(expense_tags.map(TaxonomyTags::account))
            .collect(),
        TaxonomyKey::Counterparty => expense_tags.map(TaxonomyTags::party).collect(),
        TaxonomyKey::ExpenseCategory => expense_tags.map(TaxonomyTags::category).collect(),
    }
}
