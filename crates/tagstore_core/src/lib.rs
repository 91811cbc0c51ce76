//! Data-access core for tags and users.
//!
//! Layering: controllers depend on repository traits, repository
//! implementations own the SQL and transaction scope, and the SQLite
//! connection is borrowed from the caller.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::CoreConfig;
pub use controller::tag_controller::TagController;
pub use controller::user_controller::UserController;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::tag::{Tag, TagId};
pub use model::user::{User, UserId};
pub use repo::tag_repo::{SqliteTagRepository, TagRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult, TxStage};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
