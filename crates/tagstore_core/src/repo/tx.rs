//! Scoped transaction helper shared by repository write paths.
//!
//! # Invariants
//! - The transaction handle never outlives one call.
//! - A body error triggers rollback and is returned unchanged as
//!   `RepoError::Backend`.
//! - A panic inside the body unwinds through the `Transaction` guard,
//!   whose drop rolls back before the panic reaches the caller.

use super::{RepoError, RepoResult};
use log::{debug, error, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::fmt::{Display, Formatter};

/// Transaction lifecycle step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStage {
    Begin,
    Commit,
}

impl Display for TxStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Begin => f.write_str("begin"),
            Self::Commit => f.write_str("commit"),
        }
    }
}

/// Runs `body` inside a fresh `IMMEDIATE` transaction on `conn`.
///
/// The write lock is taken at begin, so lock contention surfaces as a
/// `TxStage::Begin` failure rather than midway through `body`.
///
/// Commits when `body` succeeds. On a body error the transaction is rolled
/// back first; a failing rollback is logged and does not replace the
/// original error.
pub(crate) fn run_in_transaction<T>(
    conn: &Connection,
    op: &'static str,
    body: impl FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
) -> RepoResult<T> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(
        |source| {
            error!("event=tx_begin module=repo status=error op={op} error={source}");
            RepoError::Transaction {
                stage: TxStage::Begin,
                source,
            }
        },
    )?;

    let value = match body(&tx) {
        Ok(value) => value,
        Err(err) => {
            match tx.rollback() {
                Ok(()) => warn!("event=tx_rollback module=repo status=ok op={op} cause={err}"),
                Err(rollback_err) => error!(
                    "event=tx_rollback module=repo status=error op={op} cause={err} error={rollback_err}"
                ),
            }
            return Err(RepoError::Backend(err));
        }
    };

    // A failed commit drops the guard, which rolls back.
    tx.commit().map_err(|source| {
        error!("event=tx_commit module=repo status=error op={op} error={source}");
        RepoError::Transaction {
            stage: TxStage::Commit,
            source,
        }
    })?;
    debug!("event=tx_commit module=repo status=ok op={op}");

    Ok(value)
}
