use std::fmt;

use thiserror::Error;

/// Required entity field that failed presence validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
    Author,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Content => "Content",
            Field::Author => "Author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Required {0}")]
    Validation(Field),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Password does not match")]
    Mismatch,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Persistence(sqlx::Error),
}

// Unique violations are split out so callers can tell a taken nickname,
// email or title apart from a transport failure.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(db.message().to_string())
            }
            other => AppError::Persistence(other),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
