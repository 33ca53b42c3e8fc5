use thiserror::Error;
use uuid::Uuid;

/// Error type that captures ledger, import, and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A date cell of an imported batch could not be resolved to a calendar
    /// date. `row` is the 1-based spreadsheet row number, header included.
    #[error("Baris {row}: Format tanggal tidak valid.")]
    InvalidDate { row: usize },
    /// An amount cell of an imported batch is not a non-negative integer.
    #[error("Baris {row}: Jumlah harus berupa angka.")]
    InvalidAmount { row: usize },
    #[error("transaction {0} not found")]
    NotFound(Uuid),
    #[error("current role does not permit write operations")]
    PermissionDenied,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
