//! User controller; same orchestration as the tag controller.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;

/// Use-case entry points for users over any [`UserRepository`].
pub struct UserController<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserController<R> {
    /// Creates a controller over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored user in backend order.
    pub fn list_all(&self) -> RepoResult<Vec<User>> {
        self.repo.list_all()
    }

    /// Returns `User::default()` when `id` does not exist.
    pub fn get_by_id(&self, id: UserId) -> RepoResult<User> {
        self.repo.get_by_id(id)
    }

    /// Creates a user; the returned value carries the assigned id.
    pub fn create(&self, name: &str) -> RepoResult<User> {
        self.repo.create(name)
    }

    /// Loads the current user for `id`, then renames it to `name`.
    pub fn update(&self, id: UserId, name: &str) -> RepoResult<User> {
        let current = self.repo.get_by_id(id)?;
        self.repo.update(id, name, current)
    }

    /// Deletes the user for `id`; a missing id is not an error.
    pub fn delete(&self, id: UserId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::UserController;
    use crate::model::user::User;
    use crate::repo::user_repo::MockUserRepository;
    use crate::repo::RepoError;
    use mockall::predicate::eq;

    #[test]
    fn update_short_circuits_when_fetch_fails() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Err(RepoError::Backend(rusqlite::Error::QueryReturnedNoRows)));
        repo.expect_update().never();

        let controller = UserController::new(repo);
        assert!(matches!(
            controller.update(5, "Hanako"),
            Err(RepoError::Backend(rusqlite::Error::QueryReturnedNoRows))
        ));
    }

    #[test]
    fn update_delegates_with_fetched_user() {
        let mut repo = MockUserRepository::new();
        let taro = User {
            id: 2,
            name: "Taro".to_string(),
        };
        let fetched = taro.clone();
        repo.expect_get_by_id()
            .with(eq(2))
            .returning(move |_| Ok(fetched.clone()));
        repo.expect_update()
            .with(eq(2), eq("Jiro"), eq(taro))
            .times(1)
            .returning(|_, name, mut user| {
                user.name = name.to_string();
                Ok(user)
            });

        let controller = UserController::new(repo);
        let updated = controller.update(2, "Jiro").unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Jiro");
    }
}
