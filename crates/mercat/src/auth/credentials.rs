//! Login credentials type.

use std::fmt;

use crate::error::ValidationError;

/// Login credentials for the storefront API.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use mercat::Credentials;
///
/// let creds = Credentials::new("alice", "hunter2");
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing the login request.
    /// Never log or display this value.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Check that both fields are present before dispatching a login.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::MissingField { field: "username" });
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField { field: "password" });
        }
        Ok(())
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("alice", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn validate_rejects_empty_username() {
        assert!(Credentials::new("", "pw").validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_password() {
        assert!(Credentials::new("alice", "").validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_credentials() {
        assert!(Credentials::new("alice", "pw").validate().is_ok());
    }
}
