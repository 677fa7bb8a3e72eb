//! Password value object.
//!
//! Passwords are stored and compared verbatim. No hashing is performed;
//! see DESIGN.md for the threat-model notes on this.

use serde::{Deserialize, Serialize};

/// Stored user password.
///
/// Wraps the raw string so it never shows up in debug output or logs.
/// Serializes transparently so the persisted record keeps a plain string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

// Don't expose the password in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Password {
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self(plain_text.into())
    }

    /// Verbatim comparison against a submitted password.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Get the stored string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the stored string.
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_matches_verbatim() {
        let password = Password::new("Secret123");

        assert!(password.matches("Secret123"));
        assert!(!password.matches("secret123"));
        assert!(!password.matches("Secret123 "));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("Secret123");
        assert!(!format!("{:?}", password).contains("Secret123"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let password = Password::new("Secret123");
        assert_eq!(serde_json::to_string(&password).unwrap(), "\"Secret123\"");

        let parsed: Password = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed.as_str(), "abc");
    }
}
