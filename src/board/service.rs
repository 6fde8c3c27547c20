use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::error::AppResult;
use crate::core::types::Board;
use crate::storage::database::Database;
use crate::storage::repositories::{list_limit, BoardRepository, UserRepository};

pub struct BoardService {
    db: Arc<Database>,
}

impl BoardService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a board and resolve its author.
    ///
    /// The author lookup runs in the same transaction as the insert, so the
    /// returned board always carries the author that the row references.
    pub async fn create(&self, mut board: Board) -> AppResult<Board> {
        let mut tx = self.db.begin().await?;

        let id = BoardRepository::insert(&mut *tx, &board)
            .await
            .inspect_err(|e| warn!("Rolling back insert of board {}: {}", board.title, e))?;
        board.id = id;
        if board.id != 0 {
            let author = UserRepository::find_by_id(&mut *tx, board.author_id)
                .await
                .inspect_err(|e| {
                    warn!("Rolling back board {}: author {} lookup failed: {}", id, board.author_id, e)
                })?;
            board.author = Some(author);
        }

        tx.commit().await?;

        info!("Created board {} by user {}", board.id, board.author_id);
        Ok(board)
    }

    /// List boards by id, at most 100. Authors are not resolved.
    pub async fn list_all(&self, limit: Option<i64>) -> AppResult<Vec<Board>> {
        let boards = BoardRepository::find_all(self.db.pool(), list_limit(limit)).await?;
        debug!("Listed {} boards", boards.len());
        Ok(boards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::types::User;
    use crate::core::log_capture::LogCapture;
    use crate::crypto::service::CryptoService;
    use crate::user::service::UserService;
    use tokio_test::assert_err;

    async fn setup() -> (BoardService, UserService) {
        let db = Arc::new(Database::connect_in_memory().await.unwrap());
        (
            BoardService::new(Arc::clone(&db)),
            UserService::new(db, Arc::new(CryptoService::new())),
        )
    }

    async fn create_author(users: &UserService) -> User {
        let mut user = User::new("bob", "b@x.com", "secret");
        user.initialize();
        users.create(user).await.unwrap()
    }

    fn post(title: &str, author_id: i64) -> Board {
        let mut board = Board::new(title, "  Hello <world> ", author_id);
        board.initialize();
        board
    }

    #[tokio::test]
    async fn test_create_board_resolves_author() {
        let (boards, users) = setup().await;
        let author = create_author(&users).await;

        let board = boards.create(post("First", author.id)).await.unwrap();

        assert!(board.id > 0);
        assert_eq!(board.content, "Hello &lt;world&gt;");
        let stored_author = users.find_by_id(author.id).await.unwrap();
        assert_eq!(board.author, Some(stored_author));
    }

    #[tokio::test]
    async fn test_create_board_missing_author() {
        let (boards, _users) = setup().await;
        let (logs, _guard) = LogCapture::install();

        let err = assert_err!(boards.create(post("Orphan", 42)).await);

        assert!(matches!(err, AppError::Persistence(_)));
        assert!(logs.contents().contains("Rolling back insert of board Orphan"));
        assert!(boards.list_all(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_board_duplicate_title() {
        let (boards, users) = setup().await;
        let author = create_author(&users).await;
        boards.create(post("Same", author.id)).await.unwrap();

        let err = assert_err!(boards.create(post("Same", author.id)).await);

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(boards.list_all(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_boards() {
        let (boards, users) = setup().await;
        let author = create_author(&users).await;
        for i in 0..3 {
            boards.create(post(&format!("Board {i}"), author.id)).await.unwrap();
        }

        let listed = boards.list_all(None).await.unwrap();

        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].title, "Board 0");
        assert!(listed.iter().all(|b| b.author_id == author.id));
        assert!(listed.iter().all(|b| b.author.is_none()));
        assert_eq!(boards.list_all(Some(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_author_with_boards_cannot_be_deleted() {
        let (boards, users) = setup().await;
        let author = create_author(&users).await;
        boards.create(post("Pinned", author.id)).await.unwrap();

        assert!(matches!(
            users.delete(author.id).await,
            Err(AppError::Persistence(_))
        ));
        assert!(users.find_by_id(author.id).await.is_ok());
    }
}
