//! Tag domain model.
//!
//! # Responsibility
//! - Define the record persisted in the `tags` table.
//!
//! # Invariants
//! - `id` is assigned by the caller and never changes after creation.
//! - `name` is the only field mutated by the update path.
//! - `Tag::default()` is the "not found" value returned by read misses.

use serde::{Deserialize, Serialize};

/// Caller-assigned tag identifier.
pub type TagId = String;

/// Named label addressed by an externally assigned id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Primary key, unique across all tags.
    pub id: TagId,
    /// Display name. Not required to be unique.
    pub name: String,
}

impl Tag {
    /// Builds a tag from caller-supplied id and name.
    pub fn new(id: impl Into<TagId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns whether this is the zero value produced by a read miss.
    pub fn is_zero(&self) -> bool {
        self.id.is_empty() && self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn default_tag_is_zero() {
        assert!(Tag::default().is_zero());
        assert!(!Tag::new("1", "Google").is_zero());
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let json = serde_json::to_string(&Tag::new("1", "Google")).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"Google"}"#);
    }
}
