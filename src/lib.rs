//! HydroSnap
//!
//! Hydration tracking app: auth screens over a hosted auth service, and a
//! home dashboard that logs water intake against a daily goal alongside a
//! mood/energy check-in.
//!
//! This crate re-exports the workspace members and provides [`App`], which
//! wires configuration, the session, and the hydration log into screens.
//!
//! # Example
//!
//! ```no_run
//! use hydrosnap::{init_tracing, App};
//! use hydrosnap::core::{AppConfig, AuthProvider};
//! use std::sync::Arc;
//!
//! # async fn demo(provider: Arc<dyn AuthProvider>) -> Result<(), hydrosnap::AppError> {
//! init_tracing(tracing::Level::INFO);
//!
//! let config = AppConfig::load("hydrosnap.json").await?;
//! let app = App::open(config, provider).await?;
//! let first_screen = app.start().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core as core;
pub use app_state as state;
pub use app_ui as ui;
pub use storage;

use app_core::auth::{AuthError, AuthProvider};
use app_core::config::{AppConfig, ConfigError};
use app_state::dashboard::DashboardStore;
use app_state::repository::HydrationRepository;
use app_state::session::SessionState;
use app_ui::navigation::{NavigationAction, NavigationState};
use app_ui::screens::{ChatScreen, ForgotPasswordScreen, HomeScreen, SignInScreen, SignUpScreen, SplashScreen};
use chrono::NaiveDate;
use std::sync::Arc;
use storage::persistence::PersistenceError;
use thiserror::Error;

/// Errors raised while setting the app up
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The hydration log could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] PersistenceError),

    /// The auth service failed
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Result type for app setup
pub type Result<T> = std::result::Result<T, AppError>;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`
///
/// `default_level` applies to targets `RUST_LOG` does not mention. Calling
/// this twice is harmless; the second call is ignored.
pub fn init_tracing(default_level: tracing::Level) {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("tracing initialised");
    }
}

/// Composition root: one per running app
pub struct App {
    config: AppConfig,
    session: SessionState,
    repository: HydrationRepository,
}

impl App {
    /// Validate the config and open the hydration log
    pub async fn open(config: AppConfig, provider: Arc<dyn AuthProvider>) -> Result<Self> {
        config.validate()?;
        let repository = HydrationRepository::open(&config).await?;
        tracing::info!(
            goal = config.daily_goal_ml,
            data_dir = %config.data_dir.display(),
            "app opened"
        );
        Ok(Self {
            config,
            session: SessionState::new(provider),
            repository,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared session
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Hydration log
    pub fn repository(&self) -> &HydrationRepository {
        &self.repository
    }

    /// Restore the stored session and decide the first screen
    pub async fn start(&self) -> NavigationAction {
        let waiting = SplashScreen::wait(self.session.subscribe());
        self.session.restore().await;
        waiting.await
    }

    /// Sign-in screen
    pub fn sign_in_screen(&self) -> SignInScreen {
        SignInScreen::new(self.session.clone())
    }

    /// Sign-up screen
    pub fn sign_up_screen(&self) -> SignUpScreen {
        SignUpScreen::new(self.session.clone(), self.config.min_password_length)
    }

    /// Password reset screen
    pub fn forgot_password_screen(&self) -> ForgotPasswordScreen {
        ForgotPasswordScreen::new(self.session.clone())
    }

    /// Home and chat tabs for a day, sharing one dashboard store
    pub async fn tabs_for(&self, date: NaiveDate) -> Result<(HomeScreen, ChatScreen)> {
        let store = Arc::new(DashboardStore::load(self.repository.clone(), date).await?);
        Ok((
            HomeScreen::new(store.clone(), &self.config),
            ChatScreen::new(store),
        ))
    }

    /// Home and chat tabs for today (local time)
    pub async fn tabs(&self) -> Result<(HomeScreen, ChatScreen)> {
        self.tabs_for(chrono::Local::now().date_naive()).await
    }

    /// Sign out and send the user back to sign-in
    pub async fn sign_out(&self, navigation: &mut NavigationState) -> Result<()> {
        self.session.sign_out().await?;
        navigation.sign_out();
        Ok(())
    }
}
