#![doc(test(attr(deny(warnings))))]

//! Kas Core is the ledger and reporting engine behind a household finance
//! tool: income/expense records with open-ended taxonomies, monthly balance
//! reconciliation, spreadsheet bulk import, and number-to-words rendering
//! for amount verification. UI, authentication, and spreadsheet binary
//! formats live in the host application and talk to this crate through
//! in-process calls.

pub mod access;
pub mod dates;
pub mod errors;
pub mod export;
pub mod import;
pub mod ledger;
pub mod options;
pub mod report;
pub mod storage;
pub mod words;
pub mod workbook;

pub use errors::{LedgerError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("kas_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Kas Core tracing initialized.");
    });
}
