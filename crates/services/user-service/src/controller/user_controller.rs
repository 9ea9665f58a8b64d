//! User controller, one layer above the service.

use std::sync::Arc;

use domain::StoredRecord;

use crate::service::UserService;

/// Entry point callers use to save and read user data.
pub trait UserController<R>: Send + Sync {
    /// Save user data; `false` means nothing was stored
    fn save_user_data(&self, record: &R) -> bool;

    /// Raw stored user data, if any
    fn get_all_user_data(&self) -> Option<StoredRecord>;
}

/// Controller delegating to an injected `UserService`.
pub struct UserHandler<R> {
    service: Arc<dyn UserService<R>>,
}

impl<R> UserHandler<R> {
    pub fn new(service: Arc<dyn UserService<R>>) -> Self {
        Self { service }
    }
}

impl<R> UserController<R> for UserHandler<R> {
    fn save_user_data(&self, record: &R) -> bool {
        self.service.save_user(record)
    }

    fn get_all_user_data(&self) -> Option<StoredRecord> {
        self.service.get_all_users()
    }
}
