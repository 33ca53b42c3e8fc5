//! Ledger domain model and the authoritative transaction store.

pub mod store;
pub mod transaction;

pub use store::TransactionStore;
pub use transaction::{
    TaxonomyTags, Transaction, TransactionDraft, TransactionKind, TransactionStatus,
};
