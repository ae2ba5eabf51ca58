// Flat-file persistence: every table is one CSV file, append-only.
// File access is blocking and always runs inside tokio::task::spawn_blocking.

pub mod csv_table;

pub use csv_table::{AppendOutcome, CsvTable};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
