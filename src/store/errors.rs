//! Store error types

use sea_orm::DbErr;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by cupcake store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the requested id
    #[error("cupcake not found")]
    NotFound,

    /// Underlying database failure
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_conversion() {
        let err: StoreError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, StoreError::Db(_)));
    }
}
