//! User service - Business layer between controller and repository.
//!
//! Adds no rules of its own: every call goes to the repository as-is and the
//! repository's answer comes back unchanged.

use std::sync::Arc;

use domain::StoredRecord;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
pub trait UserService<R>: Send + Sync {
    /// Save a user record
    fn save_user(&self, record: &R) -> bool;

    /// Get the stored user record
    fn get_all_users(&self) -> Option<StoredRecord>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager<R> {
    repo: Arc<dyn UserRepository<R>>,
}

impl<R> UserManager<R> {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository<R>>) -> Self {
        Self { repo }
    }
}

impl<R> UserService<R> for UserManager<R> {
    fn save_user(&self, record: &R) -> bool {
        self.repo.save_user(record)
    }

    fn get_all_users(&self) -> Option<StoredRecord> {
        self.repo.get_all_users()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemoryStorage;
    use crate::repository::UserStore;
    use domain::UserRecord;

    #[test]
    fn test_service_reads_what_repository_stored() {
        let repo = Arc::new(UserStore::new(Arc::new(MemoryStorage::new())));
        let service = UserManager::<UserRecord>::new(repo.clone());

        assert!(repo.save_user(&UserRecord::new(5, "Direct")));

        let stored = service.get_all_users().unwrap();
        assert_eq!(stored.decode::<UserRecord>().unwrap().id, 5);
    }

    #[test]
    fn test_service_on_empty_store() {
        let repo = Arc::new(UserStore::new(Arc::new(MemoryStorage::new())));
        let service = UserManager::<UserRecord>::new(repo);

        assert_eq!(service.get_all_users(), None);
    }
}
