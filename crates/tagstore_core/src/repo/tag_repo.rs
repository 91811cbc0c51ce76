//! Tag repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD primitives over the `tags` table.
//! - Run each mutation as one explicit transaction.
//!
//! # Invariants
//! - `get_by_id` on a missing id returns `Tag::default()` and no error.
//! - `delete` of a missing id succeeds; affected-row counts are not checked.
//! - Duplicate ids on `create` surface as the backend constraint error.

use super::tx::run_in_transaction;
use super::{ensure_table_ready, RepoResult};
use crate::model::tag::Tag;
use rusqlite::{params, Connection, OptionalExtension, Row};

const TAG_SELECT_SQL: &str = "SELECT id, name FROM tags";

/// Repository interface for tag CRUD operations.
#[cfg_attr(test, mockall::automock)]
pub trait TagRepository {
    /// Returns every stored tag in backend order.
    fn list_all(&self) -> RepoResult<Vec<Tag>>;
    /// Returns the matching tag, or the zero value when none matches.
    fn get_by_id(&self, id: &str) -> RepoResult<Tag>;
    /// Inserts `{id, name}` in its own transaction and returns it.
    fn create(&self, id: &str, name: &str) -> RepoResult<Tag>;
    /// Renames the row matching `id` and returns `tag` carrying the new name.
    fn update(&self, id: &str, name: &str, tag: Tag) -> RepoResult<Tag>;
    /// Removes the row for `id`. Zero affected rows is success.
    fn delete(&self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed tag repository borrowing a caller-owned connection.
pub struct SqliteTagRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTagRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `tags`
    ///   layout does not match.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "tags", &["id", "name"])?;
        Ok(Self { conn })
    }
}

impl TagRepository for SqliteTagRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<Tag>> {
        let mut stmt = self.conn.prepare(TAG_SELECT_SQL)?;
        let tags = stmt
            .query_map([], parse_tag_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Tag> {
        let tag = self
            .conn
            .query_row(
                &format!("{TAG_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_tag_row,
            )
            .optional()?;
        Ok(tag.unwrap_or_default())
    }

    fn create(&self, id: &str, name: &str) -> RepoResult<Tag> {
        let tag = Tag::new(id, name);
        run_in_transaction(self.conn, "tag_create", |tx| {
            tx.execute(
                "INSERT INTO tags (id, name) VALUES (?1, ?2);",
                params![tag.id, tag.name],
            )
        })?;
        Ok(tag)
    }

    fn update(&self, id: &str, name: &str, mut tag: Tag) -> RepoResult<Tag> {
        run_in_transaction(self.conn, "tag_update", |tx| {
            tx.execute("UPDATE tags SET name = ?1 WHERE id = ?2;", params![name, id])
        })?;
        tag.name = name.to_string();
        Ok(tag)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        run_in_transaction(self.conn, "tag_delete", |tx| {
            tx.execute("DELETE FROM tags WHERE id = ?1;", [id])
        })?;
        Ok(())
    }
}

fn parse_tag_row(row: &Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
