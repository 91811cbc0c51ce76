//! Entity definitions persisted by the repository layer.
//!
//! # Invariants
//! - Every entity is addressed only by its immutable `id`.
//! - The zero value (`Default`) of an entity is the silent "not found"
//!   result of by-id reads.

pub mod tag;
pub mod user;
