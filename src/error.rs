//! Tagged failures for catalog operations. The menu loop prints them and keeps
//! running, so every variant carries a message meant for the operator.

use rusqlite::{Error as SqlError, ErrorCode};
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Integer input that did not parse.
    #[error("invalid {field}: `{input}` is not an integer")]
    Parse { field: &'static str, input: String },

    /// Primary-key collision on insert.
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Book not found.")]
    NotFound(i64),

    /// A book points at an author row that does not exist.
    #[error("author {author_id} referenced by this book does not exist")]
    ReferenceGap { author_id: i64 },

    #[error(transparent)]
    Storage(#[from] SqlError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Stable short tag used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse_error",
            Self::ConstraintViolation(_) => "constraint_violation",
            Self::NotFound(_) => "not_found",
            Self::ReferenceGap { .. } => "reference_gap",
            Self::Storage(_) => "storage_error",
            Self::Io(_) => "io_error",
        }
    }
}

/// Turn SQLite constraint failures into `ConstraintViolation`, keeping the
/// engine's own message. Anything else stays a storage error.
pub(crate) fn map_constraint(err: SqlError) -> CatalogError {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        CatalogError::ConstraintViolation(err.to_string())
    } else {
        CatalogError::Storage(err)
    }
}

/// Parse an operator-typed integer, tagging the field on failure.
pub(crate) fn parse_int(field: &'static str, raw: &str) -> CatalogResult<i64> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| CatalogError::Parse {
        field,
        input: trimmed.to_string(),
    })
}
