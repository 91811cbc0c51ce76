//! User domain model.
//!
//! Same shape as [`Tag`](super::tag::Tag) but with a backend-assigned
//! sequential key and a unique `name`.

use serde::{Deserialize, Serialize};

/// Backend-assigned sequential identifier. `0` is never assigned.
pub type UserId = i64;

/// Account record keyed by a sequential id, with a unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique across all users; enforced by the backend.
    pub name: String,
}

impl User {
    /// Returns whether this is the zero value produced by a read miss.
    pub fn is_zero(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }
}
