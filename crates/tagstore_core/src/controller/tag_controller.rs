//! Tag controller.
//!
//! # Invariants
//! - `update` performs no mutation unless the preceding `get_by_id`
//!   succeeded.

use crate::model::tag::Tag;
use crate::repo::tag_repo::TagRepository;
use crate::repo::RepoResult;
use log::debug;

/// Use-case entry points for tags over any [`TagRepository`].
pub struct TagController<R: TagRepository> {
    repo: R,
}

impl<R: TagRepository> TagController<R> {
    /// Creates a controller over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored tag; order is whatever the backend yields.
    pub fn list_all(&self) -> RepoResult<Vec<Tag>> {
        self.repo.list_all()
    }

    /// Returns `Tag::default()` when `id` does not exist.
    pub fn get_by_id(&self, id: &str) -> RepoResult<Tag> {
        self.repo.get_by_id(id)
    }

    /// Creates a tag with a caller-assigned `id`.
    pub fn create(&self, id: &str, name: &str) -> RepoResult<Tag> {
        self.repo.create(id, name)
    }

    /// Loads the current tag for `id`, then renames it to `name`.
    ///
    /// A failed lookup is returned as-is and the repository update is never
    /// invoked. A lookup miss is not a failure: the zero-valued tag is passed
    /// through and the backend update affects no rows.
    pub fn update(&self, id: &str, name: &str) -> RepoResult<Tag> {
        let current = self.repo.get_by_id(id)?;
        debug!(
            "event=tag_update module=controller status=resolved found={}",
            !current.is_zero()
        );
        self.repo.update(id, name, current)
    }

    /// Deletes the tag for `id`; a missing id is not an error.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::TagController;
    use crate::model::tag::Tag;
    use crate::repo::tag_repo::MockTagRepository;
    use crate::repo::RepoError;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn update_fetches_then_delegates_with_fetched_tag() {
        let mut repo = MockTagRepository::new();
        let mut seq = Sequence::new();
        repo.expect_get_by_id()
            .with(eq("2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Tag::new("2", "Facebook")));
        repo.expect_update()
            .with(eq("2"), eq("Microsoft"), eq(Tag::new("2", "Facebook")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, name, mut tag| {
                tag.name = name.to_string();
                Ok(tag)
            });

        let controller = TagController::new(repo);
        let updated = controller.update("2", "Microsoft").unwrap();
        assert_eq!(updated, Tag::new("2", "Microsoft"));
    }

    #[test]
    fn update_short_circuits_when_fetch_fails() {
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_id()
            .with(eq("X"))
            .times(1)
            .returning(|_| Err(RepoError::Backend(rusqlite::Error::InvalidQuery)));
        repo.expect_update().never();

        let controller = TagController::new(repo);
        let err = controller.update("X", "new").unwrap_err();
        assert!(matches!(
            err,
            RepoError::Backend(rusqlite::Error::InvalidQuery)
        ));
    }

    #[test]
    fn update_passes_zero_value_through_on_read_miss() {
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(Tag::default()));
        repo.expect_update()
            .with(eq("missing"), eq("renamed"), eq(Tag::default()))
            .times(1)
            .returning(|_, name, mut tag| {
                tag.name = name.to_string();
                Ok(tag)
            });

        let controller = TagController::new(repo);
        let updated = controller.update("missing", "renamed").unwrap();
        assert_eq!(updated.id, "");
        assert_eq!(updated.name, "renamed");
    }

    #[test]
    fn plain_operations_delegate_unchanged() {
        let mut repo = MockTagRepository::new();
        repo.expect_list_all()
            .times(1)
            .returning(|| Ok(vec![Tag::new("1", "Google")]));
        repo.expect_get_by_id()
            .with(eq("1"))
            .times(1)
            .returning(|_| Ok(Tag::new("1", "Google")));
        repo.expect_create()
            .with(eq("3"), eq("Amazon"))
            .times(1)
            .returning(|id, name| Ok(Tag::new(id, name)));
        repo.expect_delete()
            .with(eq("3"))
            .times(1)
            .returning(|_| Err(RepoError::Backend(rusqlite::Error::InvalidQuery)));

        let controller = TagController::new(repo);
        assert_eq!(controller.list_all().unwrap(), vec![Tag::new("1", "Google")]);
        assert_eq!(controller.get_by_id("1").unwrap(), Tag::new("1", "Google"));
        assert_eq!(
            controller.create("3", "Amazon").unwrap(),
            Tag::new("3", "Amazon")
        );
        assert!(matches!(
            controller.delete("3"),
            Err(RepoError::Backend(rusqlite::Error::InvalidQuery))
        ));
    }
}
