//! SQL statements per table.
//!
//! Every function takes an executor so services can run it against the pool
//! or inside an open transaction (`&mut *tx`).

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::core::types::{Board, User};

/// Hard cap on list queries.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp an optional caller limit into `0..=MAX_LIST_LIMIT`.
pub fn list_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(MAX_LIST_LIMIT).clamp(0, MAX_LIST_LIMIT)
}

pub struct UserRepository;

impl UserRepository {
    /// Insert a user and return the assigned id.
    pub async fn insert<'e, E>(executor: E, user: &User) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar(
            r#"
            INSERT INTO users (nickname, email, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<User, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, User>(
            "SELECT id, nickname, email, password, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }

    pub async fn find_all<'e, E>(executor: E, limit: i64) -> Result<Vec<User>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, User>(
            "SELECT id, nickname, email, password, created_at, updated_at FROM users ORDER BY id LIMIT ?",
        )
        .bind(limit)
        .fetch_all(executor)
        .await
    }

    /// Overwrite nickname, email, password and `updated_at`. Returns rows affected.
    pub async fn update<'e, E>(
        executor: E,
        id: i64,
        user: &User,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE users SET nickname = ?, email = ?, password = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(&user.password)
        .bind(updated_at)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

pub struct BoardRepository;

impl BoardRepository {
    /// Insert a board and return the assigned id. The author is not stored.
    pub async fn insert<'e, E>(executor: E, board: &Board) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar(
            r#"
            INSERT INTO boards (title, content, author_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&board.title)
        .bind(&board.content)
        .bind(board.author_id)
        .bind(board.created_at)
        .bind(board.updated_at)
        .fetch_one(executor)
        .await
    }

    pub async fn find_all<'e, E>(executor: E, limit: i64) -> Result<Vec<Board>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Board>(
            "SELECT id, title, content, author_id, created_at, updated_at FROM boards ORDER BY id LIMIT ?",
        )
        .bind(limit)
        .fetch_all(executor)
        .await
    }
}
