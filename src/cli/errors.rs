//! CLI error types

use thiserror::Error;

use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all are fatal and printed to stderr by main
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime or server boot failure
    #[error("boot failed: {0}")]
    Boot(String),

    /// Store connection or schema failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Server I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
