use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::board::service::BoardService;
use crate::core::config::Config;
use crate::core::error::AppResult;
use crate::core::types::{Board, User};
use crate::crypto::service::CryptoService;
use crate::storage::database::Database;
use crate::user::service::UserService;

pub struct App {
    pub db: Arc<Database>,
    pub user_service: Arc<UserService>,
    pub board_service: Arc<BoardService>,
}

/// Everything the store currently lists, as printed by the binary.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub boards: Vec<Board>,
}

impl App {
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing application components");

        // Initialize database
        let db = Arc::new(Database::new(&config.database).await?);

        // Run migrations
        db.migrate().await?;

        Ok(Self::with_database(db))
    }

    pub fn with_database(db: Arc<Database>) -> Self {
        let crypto_service = Arc::new(CryptoService::new());

        let user_service = Arc::new(UserService::new(Arc::clone(&db), crypto_service));
        let board_service = Arc::new(BoardService::new(Arc::clone(&db)));

        Self {
            db,
            user_service,
            board_service,
        }
    }

    pub async fn snapshot(&self) -> AppResult<Snapshot> {
        Ok(Snapshot {
            users: self.user_service.list_all(None).await?,
            boards: self.board_service.list_all(None).await?,
        })
    }
}
