//! Domain-level constants.

use crate::error::{DomainError, DomainResult};

// =============================================================================
// Storage
// =============================================================================

/// Well-known key the user repository writes under
pub const USER_STORE_KEY: &str = "users";

/// Maximum length of a storage key
pub const MAX_STORE_KEY_LENGTH: usize = 128;

/// Check if a storage key is usable
pub fn is_valid_store_key(key: &str) -> bool {
    !key.trim().is_empty() && key.len() <= MAX_STORE_KEY_LENGTH
}

/// Reject a storage key that `is_valid_store_key` refuses
pub fn validate_store_key(key: &str) -> DomainResult<()> {
    if is_valid_store_key(key) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "storage key {:?} must be non-blank and at most {} bytes",
            key, MAX_STORE_KEY_LENGTH
        )))
    }
}
