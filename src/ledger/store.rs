//! Authoritative CRUD layer over one transaction collection.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    errors::{LedgerError, Result},
    storage::StorageBackend,
};

use super::transaction::{Transaction, TransactionDraft, TransactionKind};

/// Owns the canonical collection for one [`TransactionKind`] and persists it
/// through a [`StorageBackend`] after every mutation.
///
/// Every method is a discrete unit of work behind `&mut self`; the borrow
/// checker supplies the scoped exclusive section the single-writer model
/// requires. All mutations are safe to retry on a transient persistence
/// failure except [`create`](Self::create): an ambiguous-outcome create must
/// be followed by a [`list`](Self::list) read-back, not a blind retry.
pub struct TransactionStore<S: StorageBackend> {
    kind: TransactionKind,
    records: Vec<Transaction>,
    storage: S,
}

impl<S: StorageBackend> TransactionStore<S> {
    /// Opens the store with the persisted snapshot for `kind`. A corrupt
    /// snapshot is discarded by the backend and the store starts empty.
    pub fn open(kind: TransactionKind, storage: S) -> Self {
        let records: Vec<Transaction> = storage.load(kind.storage_key());
        tracing::debug!(kind = ?kind, count = records.len(), "transaction store opened");
        Self {
            kind,
            records,
            storage,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Full snapshot with copy semantics; mutating the returned vector never
    /// affects stored state.
    pub fn list(&self) -> Vec<Transaction> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new record: assigns a fresh id, derives `month`/`year` from
    /// the draft date, persists, and returns the stored copy.
    pub fn create(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        debug_assert_eq!(draft.tags.kind(), self.kind);
        let txn = draft.into_transaction(Uuid::new_v4());
        self.records.push(txn.clone());
        self.persist()?;
        Ok(txn)
    }

    /// Replaces the record sharing `txn.id` wholesale. The denormalized
    /// `month`/`year` pair is rederived from the incoming date before the
    /// record lands.
    pub fn update(&mut self, mut txn: Transaction) -> Result<Transaction> {
        let index = self
            .records
            .iter()
            .position(|existing| existing.id == txn.id)
            .ok_or(LedgerError::NotFound(txn.id))?;
        txn.apply_date(txn.date);
        self.records[index] = txn.clone();
        self.persist()?;
        Ok(txn)
    }

    /// Removes the record with `id` if present. Deleting an absent id is a
    /// no-op, not an error.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|txn| txn.id != id);
        if self.records.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Wholesale overwrite of the collection. No validation happens here;
    /// the import pipeline validates fully in memory before calling this.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        self.records = transactions;
        self.persist()
    }

    /// Advisory transaction code for a record to be created on `date`:
    /// prefix + `YYYYMMDD` + zero-padded same-day sequence, computed against
    /// the state before the record is added. Display-only; the store never
    /// re-checks it for collisions.
    pub fn next_code(&self, date: NaiveDate) -> String {
        let same_day = self.records.iter().filter(|txn| txn.date == date).count();
        format!(
            "{}{}-{:03}",
            self.kind.code_prefix(),
            date.format("%Y%m%d"),
            same_day + 1
        )
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(self.kind.storage_key(), &self.records)
    }
}
