//! Screen view models
//!
//! Each screen owns its form state and exposes:
//! - a `view()` snapshot built from components, for a renderer to draw
//! - setters for user input
//! - async actions that return a [`ScreenOutcome`]
//!
//! Screens that talk to the auth service take a
//! [`SessionState`](app_state::session::SessionState) in their constructor.
//! Screen state sits behind a lock so a renderer can keep drawing (and see
//! the loading label) while a request is in flight.

pub mod chat;
pub mod forgot_password;
pub mod home;
pub mod sign_in;
pub mod sign_up;
pub mod splash;

pub use chat::{ChatContext, ChatScreen};
pub use forgot_password::{ForgotPasswordScreen, ForgotPasswordView, ResetStage};
pub use home::{Greeting, HomeScreen, HomeView, SelectorOption, SelectorView};
pub use sign_in::{SignInScreen, SignInView};
pub use sign_up::{SignUpScreen, SignUpView};
pub use splash::SplashScreen;

use crate::components::Alert;
use crate::navigation::NavigationAction;
use std::sync::atomic::{AtomicBool, Ordering};

/// Product name shown above every auth form
pub const LOGO_TEXT: &str = "HydroSnap";

/// Result of a screen action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOutcome {
    /// Show an alert
    Alert(Alert),
    /// Navigate away
    Navigate(NavigationAction),
    /// The screen changed in place
    Updated,
    /// Ignored: a submission is already running
    Busy,
}

impl ScreenOutcome {
    /// The alert, if this outcome shows one
    pub fn alert(&self) -> Option<&Alert> {
        match self {
            ScreenOutcome::Alert(alert) => Some(alert),
            _ => None,
        }
    }
}

/// Marks a submission as running until dropped
///
/// Dropping also covers a cancelled request, so the button never stays stuck
/// in its loading state.
pub(crate) struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    /// Claim the flag; `None` if a submission is already running
    pub(crate) fn begin(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
