//! Authentication collaborator
//!
//! HydroSnap does not implement accounts itself. Sign-in, sign-up and
//! password reset are delegated to a hosted auth service behind the
//! [`AuthProvider`] trait. Screens never call the provider directly; they go
//! through `app_state::session::SessionState`, which also publishes the
//! observable `{ user, loading }` pair.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the auth collaborator
///
/// The display text is what the user sees, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The service refused the request
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached
    #[error("{0}")]
    Unavailable(String),
}

impl AuthError {
    /// Human-readable message, shown verbatim in an alert
    pub fn message(&self) -> &str {
        match self {
            AuthError::Rejected(msg) | AuthError::Unavailable(msg) => msg,
        }
    }
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// A signed-in user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Provider-assigned user id
    pub id: String,
    /// Email address
    pub email: String,
    /// Name given at sign-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl AuthUser {
    /// Create a user without a display name
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: id.into(), email: email.into(), full_name: None }
    }

    /// Set the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// Hosted authentication service
///
/// Every call is asynchronous and either succeeds or fails with a message
/// meant for the user. Implementations must not retry on their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<AuthUser>;

    /// Send a password reset link to the address
    async fn reset_password(&self, email: &str) -> Result<()>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// The user of a restored session, if any
    async fn current_user(&self) -> Result<Option<AuthUser>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_is_verbatim() {
        let err = AuthError::Rejected("Invalid login credentials".to_string());
        assert_eq!(err.message(), "Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_user_serialization() {
        let user = AuthUser::new("u1", "ada@example.com").with_full_name("Ada Lovelace");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"fullName\":\"Ada Lovelace\""));

        let back: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[tokio::test]
    async fn test_mock_provider_is_object_safe() {
        let mut mock = MockAuthProvider::new();
        mock.expect_current_user().returning(|| Ok(None));

        let provider: Box<dyn AuthProvider> = Box::new(mock);
        assert_eq!(provider.current_user().await.unwrap(), None);
    }
}
