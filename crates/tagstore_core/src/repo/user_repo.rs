//! User repository contract and SQLite implementation.
//!
//! # Invariants
//! - `id` is assigned by the backend on insert and returned to the caller.
//! - `name` uniqueness is enforced by the backend; violations surface as
//!   `RepoError::Backend` after rollback.
//! - Read-miss and delete-miss semantics match the tag repository.

use super::tx::run_in_transaction;
use super::{ensure_table_ready, RepoResult};
use crate::model::user::{User, UserId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const USER_SELECT_SQL: &str = "SELECT id, name FROM users";

/// Repository interface for user CRUD operations.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository {
    /// Returns every stored user in backend order.
    fn list_all(&self) -> RepoResult<Vec<User>>;
    /// Returns the matching user, or the zero value when none matches.
    fn get_by_id(&self, id: UserId) -> RepoResult<User>;
    /// Inserts a user and returns it with the backend-assigned id.
    fn create(&self, name: &str) -> RepoResult<User>;
    /// Renames the row matching `id` and returns `user` with the new name.
    fn update(&self, id: UserId, name: &str, user: User) -> RepoResult<User>;
    /// Removes the row for `id`. Zero affected rows is success.
    fn delete(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "users", &["id", "name"])?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(USER_SELECT_SQL)?;
        let users = stmt
            .query_map([], parse_user_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    fn get_by_id(&self, id: UserId) -> RepoResult<User> {
        let user = self
            .conn
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_user_row,
            )
            .optional()?;
        Ok(user.unwrap_or_default())
    }

    fn create(&self, name: &str) -> RepoResult<User> {
        let id = run_in_transaction(self.conn, "user_create", |tx| {
            tx.execute("INSERT INTO users (name) VALUES (?1);", [name])?;
            Ok(tx.last_insert_rowid())
        })?;
        Ok(User {
            id,
            name: name.to_string(),
        })
    }

    fn update(&self, id: UserId, name: &str, mut user: User) -> RepoResult<User> {
        run_in_transaction(self.conn, "user_update", |tx| {
            tx.execute("UPDATE users SET name = ?1 WHERE id = ?2;", params![name, id])
        })?;
        user.name = name.to_string();
        Ok(user)
    }

    fn delete(&self, id: UserId) -> RepoResult<()> {
        run_in_transaction(self.conn, "user_delete", |tx| {
            tx.execute("DELETE FROM users WHERE id = ?1;", [id])
        })?;
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
