use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, AppResult, Field};
use crate::core::sanitize::sanitize;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    /// Argon2 PHC string once the user has been through a save.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        nickname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Reset the id, sanitize nickname and email, and stamp both timestamps.
    pub fn initialize(&mut self) {
        let now = Utc::now();
        self.id = 0;
        self.nickname = sanitize(&self.nickname);
        self.email = sanitize(&self.email);
        self.created_at = now;
        self.updated_at = now;
    }

    /// No user field checks are enforced yet.
    pub fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Board {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    /// Resolved after insert; never stored on the row.
    #[sqlx(skip)]
    #[serde(skip_deserializing)]
    pub author: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
            ..Self::default()
        }
    }

    /// Reset the id, sanitize title and content, drop any resolved author,
    /// and stamp both timestamps.
    pub fn initialize(&mut self) {
        let now = Utc::now();
        self.id = 0;
        self.title = sanitize(&self.title);
        self.content = sanitize(&self.content);
        self.author = None;
        self.created_at = now;
        self.updated_at = now;
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.title.is_empty() {
            return Err(AppError::Validation(Field::Title));
        }
        if self.content.is_empty() {
            return Err(AppError::Validation(Field::Content));
        }
        if self.author_id < 1 {
            return Err(AppError::Validation(Field::Author));
        }
        Ok(())
    }
}
