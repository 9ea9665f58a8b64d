//! Infrastructure layer - in-memory storage.

mod storage;

pub use storage::MemoryStorage;
