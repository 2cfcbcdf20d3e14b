//! Session state
//!
//! Wraps the auth collaborator and publishes the `{ user, loading }` pair
//! that the index screen uses to route between onboarding and the tabs.
//! A `SessionState` is passed explicitly to every screen that needs auth.

use app_core::auth::{AuthProvider, AuthUser, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// Observable auth state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Signed-in user, if any
    pub user: Option<AuthUser>,
    /// True until the stored session has been checked
    pub loading: bool,
}

impl AuthSnapshot {
    /// State before the stored session has been checked
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

/// Session holder shared by the screens
///
/// Cloning is cheap; clones share the provider and the published snapshot.
///
/// # Example
///
/// ```no_run
/// use app_state::session::SessionState;
/// # use app_core::AuthProvider;
/// # async fn demo(provider: std::sync::Arc<dyn AuthProvider>) {
/// let session = SessionState::new(provider);
/// let mut rx = session.subscribe();
///
/// session.restore().await;
/// assert!(!rx.borrow_and_update().loading);
/// # }
/// ```
#[derive(Clone)]
pub struct SessionState {
    provider: Arc<dyn AuthProvider>,
    snapshot_tx: Arc<watch::Sender<AuthSnapshot>>,
}

impl SessionState {
    /// Create a session holder in the loading state
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        let (snapshot_tx, _) = watch::channel(AuthSnapshot::loading());
        Self { provider, snapshot_tx: Arc::new(snapshot_tx) }
    }

    /// Current auth state
    pub fn snapshot(&self) -> AuthSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to auth state changes
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Check for a stored session and leave the loading state
    ///
    /// A failing lookup is treated as signed out.
    pub async fn restore(&self) -> Option<AuthUser> {
        let user = match self.provider.current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "could not restore session");
                None
            }
        };

        tracing::debug!(signed_in = user.is_some(), "session restored");
        self.publish(user.clone());
        user
    }

    /// Sign in and publish the user on success
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        tracing::debug!("sign-in requested");
        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "signed in");
                self.publish(Some(user.clone()));
                Ok(user)
            }
            Err(e) => {
                tracing::info!(error = %e, "sign-in rejected");
                Err(e)
            }
        }
    }

    /// Create an account
    ///
    /// The new user is not signed in: the address has to be verified first.
    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<AuthUser> {
        tracing::debug!("sign-up requested");
        let result = self.provider.sign_up(email, password, full_name).await;
        match &result {
            Ok(user) => tracing::info!(user_id = %user.id, "account created"),
            Err(e) => tracing::info!(error = %e, "sign-up rejected"),
        }
        result
    }

    /// Ask the service to email a reset link
    pub async fn reset_password(&self, email: &str) -> Result<()> {
        tracing::debug!("password reset requested");
        self.provider.reset_password(email).await.inspect_err(|e| {
            tracing::info!(error = %e, "password reset rejected");
        })
    }

    /// Sign out and clear the published user
    pub async fn sign_out(&self) -> Result<()> {
        self.provider.sign_out().await?;
        tracing::info!("signed out");
        self.publish(None);
        Ok(())
    }

    fn publish(&self, user: Option<AuthUser>) {
        self.snapshot_tx.send_replace(AuthSnapshot { user, loading: false });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::auth::AuthError;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Provider {}

        #[async_trait]
        impl AuthProvider for Provider {
            async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;
            async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<AuthUser>;
            async fn reset_password(&self, email: &str) -> Result<()>;
            async fn sign_out(&self) -> Result<()>;
            async fn current_user(&self) -> Result<Option<AuthUser>>;
        }
    }

    fn alice() -> AuthUser {
        AuthUser::new("u-alice", "alice@example.com")
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let session = SessionState::new(Arc::new(MockProvider::new()));
        assert_eq!(session.snapshot(), AuthSnapshot::loading());
    }

    #[tokio::test]
    async fn test_restore_with_stored_user() {
        let mut provider = MockProvider::new();
        provider.expect_current_user().times(1).returning(|| Ok(Some(alice())));

        let session = SessionState::new(Arc::new(provider));
        let mut rx = session.subscribe();

        assert_eq!(session.restore().await, Some(alice()));
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user, Some(alice()));
    }

    #[tokio::test]
    async fn test_restore_failure_means_signed_out() {
        let mut provider = MockProvider::new();
        provider
            .expect_current_user()
            .returning(|| Err(AuthError::Unavailable("offline".to_string())));

        let session = SessionState::new(Arc::new(provider));
        assert_eq!(session.restore().await, None);

        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert!(!snapshot.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_publishes_user() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .withf(|email, password| email == "alice@example.com" && password == "secret1")
            .times(1)
            .returning(|_, _| Ok(alice()));

        let session = SessionState::new(Arc::new(provider));
        let user = session.sign_in("alice@example.com", "secret1").await.unwrap();

        assert_eq!(user, alice());
        assert_eq!(session.snapshot().user, Some(alice()));
    }

    #[tokio::test]
    async fn test_sign_in_error_keeps_snapshot() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .returning(|_, _| Err(AuthError::Rejected("Invalid login credentials".to_string())));

        let session = SessionState::new(Arc::new(provider));
        let err = session.sign_in("alice@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.message(), "Invalid login credentials");
        assert_eq!(session.snapshot(), AuthSnapshot::loading());
    }

    #[tokio::test]
    async fn test_sign_up_does_not_sign_in() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_up()
            .withf(|email, _, name| email == "bob@example.com" && name == "Bob")
            .returning(|email, _, name| Ok(AuthUser::new("u-bob", email).with_full_name(name)));

        let session = SessionState::new(Arc::new(provider));
        let user = session.sign_up("bob@example.com", "hunter22", "Bob").await.unwrap();

        assert_eq!(user.full_name.as_deref(), Some("Bob"));
        assert!(!session.snapshot().is_signed_in());
    }

    #[tokio::test]
    async fn test_reset_password_forwards_email() {
        let mut provider = MockProvider::new();
        provider
            .expect_reset_password()
            .with(eq("user@example.com"))
            .times(1)
            .returning(|_| Ok(()));

        let session = SessionState::new(Arc::new(provider));
        session.reset_password("user@example.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_out_clears_user() {
        let mut provider = MockProvider::new();
        provider.expect_sign_in().returning(|_, _| Ok(alice()));
        provider.expect_sign_out().times(1).returning(|| Ok(()));

        let session = SessionState::new(Arc::new(provider));
        session.sign_in("alice@example.com", "secret1").await.unwrap();
        session.sign_out().await.unwrap();

        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user, None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mut provider = MockProvider::new();
        provider.expect_sign_in().returning(|_, _| Ok(alice()));

        let session = SessionState::new(Arc::new(provider));
        let other = session.clone();
        session.sign_in("alice@example.com", "secret1").await.unwrap();

        assert!(other.snapshot().is_signed_in());
    }
}
