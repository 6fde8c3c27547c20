use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::error::AppResult;
use crate::core::types::User;
use crate::crypto::service::CryptoService;
use crate::storage::database::Database;
use crate::storage::repositories::{list_limit, UserRepository};

pub struct UserService {
    db: Arc<Database>,
    crypto: Arc<CryptoService>,
}

impl UserService {
    pub fn new(db: Arc<Database>, crypto: Arc<CryptoService>) -> Self {
        Self { db, crypto }
    }

    /// Replace the plaintext password with its hash.
    pub fn apply_pre_save_hash(&self, user: &mut User) -> AppResult<()> {
        user.password = self.crypto.hash_password(&user.password)?;
        Ok(())
    }

    /// Check a candidate password against a user's stored hash.
    pub fn verify_password(&self, user: &User, candidate: &str) -> AppResult<()> {
        self.crypto.verify_password(&user.password, candidate)
    }

    /// Hash the password and insert the user.
    ///
    /// A taken nickname or email fails with `AppError::Conflict`.
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        self.apply_pre_save_hash(&mut user)?;

        let mut tx = self.db.begin().await?;
        let id = UserRepository::insert(&mut *tx, &user)
            .await
            .inspect_err(|e| warn!("Rolling back insert of user {}: {}", user.nickname, e))?;
        user.id = id;
        tx.commit().await?;

        info!("Created user {} ({})", user.id, user.nickname);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<User> {
        Ok(UserRepository::find_by_id(self.db.pool(), id).await?)
    }

    /// List users by id, at most 100.
    pub async fn list_all(&self, limit: Option<i64>) -> AppResult<Vec<User>> {
        let users = UserRepository::find_all(self.db.pool(), list_limit(limit)).await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Overwrite nickname, email and password of user `id`, returning the
    /// stored record. `user.password` is taken as plaintext.
    pub async fn update(&self, mut user: User, id: i64) -> AppResult<User> {
        self.apply_pre_save_hash(&mut user)?;

        let mut tx = self.db.begin().await?;
        let affected = UserRepository::update(&mut *tx, id, &user, Utc::now())
            .await
            .inspect_err(|e| warn!("Rolling back update of user {}: {}", id, e))?;
        if affected == 0 {
            warn!("Rolling back update of user {}: no such user", id);
            return Err(sqlx::Error::RowNotFound.into());
        }
        tx.commit().await?;

        info!("Updated user {}", id);
        self.find_by_id(id).await
    }

    /// Delete user `id`. An unknown id deletes nothing and is not an error.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let mut tx = self.db.begin().await?;
        let affected = UserRepository::delete(&mut *tx, id)
            .await
            .inspect_err(|e| warn!("Rolling back delete of user {}: {}", id, e))?;
        tx.commit().await?;

        info!("Deleted user {} ({} rows)", id, affected);
        Ok(affected)
    }
}
