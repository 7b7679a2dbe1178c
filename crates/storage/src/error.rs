use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        self.has_sqlstate("23505")
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.has_sqlstate("23503")
    }

    pub fn is_check_violation(&self) -> bool {
        self.has_sqlstate("23514")
    }

    fn has_sqlstate(&self, code: &str) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(code)
        )
    }

    /// Translate integrity errors raised by a write into `ConstraintViolation`.
    pub(crate) fn from_write(error: sqlx::Error, context: &str) -> Self {
        let error = StorageError::from(error);

        if error.is_foreign_key_violation() {
            StorageError::ConstraintViolation(format!("{context}: referenced row does not exist"))
        } else if error.is_unique_violation() {
            StorageError::ConstraintViolation(format!("{context}: duplicate key"))
        } else if error.is_check_violation() {
            StorageError::ConstraintViolation(format!("{context}: value out of range"))
        } else {
            error
        }
    }
}
