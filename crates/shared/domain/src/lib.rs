//! Domain layer - Record types and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! The storage layers treat every payload as opaque; the types here only give
//! callers a way to name and decode what they stored.

pub mod constants;
pub mod error;
pub mod record;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use record::StoredRecord;
pub use user::UserRecord;
