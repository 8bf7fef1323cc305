use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied input had the wrong shape
    #[error("Invalid input: {0}")]
    Validation(#[from] shelf_catalog::ValidationError),

    /// The record store failed
    #[error("Storage error: {0}")]
    Storage(#[from] shelf_db::StorageError),

    /// CSV output failed
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),
}
