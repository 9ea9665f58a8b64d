//! User Service Library
//!
//! A three-layer chain over an in-memory store:
//! controller -> service -> repository -> storage. Each layer only knows the
//! trait of the layer below it, injected through its constructor.

pub mod config;
pub mod controller;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{StoredRecord, UserRecord};

use crate::config::UserServiceConfig;
use crate::controller::{UserController, UserHandler};
use crate::infra::MemoryStorage;
use crate::repository::{UserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Build the full chain over a fresh in-memory store.
///
/// Fails without wiring anything if `config` does not validate.
pub fn wire_in_memory<R>(config: &UserServiceConfig) -> AppResult<Arc<dyn UserController<R>>>
where
    R: Serialize + 'static,
{
    config.validate()?;
    let storage = Arc::new(MemoryStorage::new());

    // Create repository, service, and controller
    let user_repo: Arc<dyn UserRepository<R>> =
        Arc::new(UserStore::with_key(storage, config.storage.key.clone()));
    let user_service: Arc<dyn UserService<R>> = Arc::new(UserManager::new(user_repo));
    let controller = UserHandler::new(user_service);

    info!(key = %config.storage.key, "user service wired over in-memory storage");
    Ok(Arc::new(controller))
}

/// Run the scripted save/read scenario and print each step.
pub fn run_demo(config: &UserServiceConfig) -> AppResult<()> {
    let controller = wire_in_memory::<UserRecord>(config)?;

    let john = UserRecord::new(1, "John Doe").with_email("john@example.com");
    let saved = controller.save_user_data(&john);
    println!("save {:?} -> {}", john, saved);

    let stored = controller.get_all_user_data().ok_or_not_found()?;
    println!("stored: {}", stored);
    let decoded: UserRecord = stored.decode()?;
    if decoded != john {
        return Err(AppError::internal("stored record does not match the saved one"));
    }

    let jane = UserRecord::new(2, "Jane");
    let saved = controller.save_user_data(&jane);
    println!("save {:?} -> {}", jane, saved);

    let stored = controller.get_all_user_data().ok_or_not_found()?;
    println!("stored: {}", stored);

    Ok(())
}

/// Save each JSON document in order, then return what the store holds.
///
/// Every value is parsed before anything is saved, so bad input leaves the
/// store untouched.
pub fn run_save(
    config: &UserServiceConfig,
    documents: &[String],
) -> AppResult<Option<StoredRecord>> {
    let records = documents
        .iter()
        .map(|doc| {
            serde_json::from_str::<serde_json::Value>(doc)
                .map_err(|e| AppError::bad_request(format!("{}: {}", doc, e)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let controller = wire_in_memory::<serde_json::Value>(config)?;
    for record in &records {
        let saved = controller.save_user_data(record);
        println!("save {} -> {}", record, saved);
    }

    Ok(controller.get_all_user_data())
}
