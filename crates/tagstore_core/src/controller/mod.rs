//! Controllers mediating between callers and repositories.
//!
//! # Responsibility
//! - Expose per-entity CRUD entry points generic over a repository trait,
//!   never a concrete backend type.
//! - Resolve the current entity before delegating an update.
//!
//! # Invariants
//! - Controllers hold no state beyond their repository.
//! - Repository errors are returned unchanged.

pub mod tag_controller;
pub mod user_controller;
