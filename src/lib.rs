//! User and board persistence for a simple forum, backed by SQLite.

pub mod board;
pub mod core;
pub mod crypto;
pub mod storage;
pub mod user;

pub use crate::board::service::BoardService;
pub use crate::core::app::{App, Snapshot};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, AppResult, Field};
pub use crate::core::types::{Board, User};
pub use crate::crypto::service::CryptoService;
pub use crate::storage::database::Database;
pub use crate::user::service::UserService;
