use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Insufficient stock for product {product_id}: available {available}")]
    InsufficientStock { product_id: i32, available: i32 },

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// True when the underlying sqlx error is a unique-constraint violation,
    /// optionally narrowed to a single named constraint.
    pub fn is_unique_violation(&self, constraint: Option<&str>) -> bool {
        match self {
            RepositoryError::Sqlx(SqlxError::Database(db_err)) => {
                let is_unique = db_err.code().as_deref() == Some("23505");
                match constraint {
                    Some(name) => is_unique && db_err.constraint() == Some(name),
                    None => is_unique,
                }
            }
            _ => false,
        }
    }

    /// True when the underlying sqlx error is a foreign-key violation.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::Sqlx(SqlxError::Database(db_err))
                if db_err.code().as_deref() == Some("23503")
        )
    }
}
