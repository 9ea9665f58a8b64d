//! User record used by the demo and tests.

use serde::{Deserialize, Serialize};

/// A user as callers hand it to the controller.
///
/// The layers never inspect this; any `Serialize` type works in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserRecord {
    /// Create a record without an email address
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }

    /// Attach an email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_email_is_omitted() {
        let json = serde_json::to_string(&UserRecord::new(2, "Jane")).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Jane"}"#);
    }

    #[test]
    fn test_email_is_serialized_when_present() {
        let user = UserRecord::new(1, "John Doe").with_email("john@example.com");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"John Doe","email":"john@example.com"}"#);
    }
}
