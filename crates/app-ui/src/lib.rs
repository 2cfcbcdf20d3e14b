//! User interface for HydroSnap
//!
//! This crate provides the presentation layer: screen view models,
//! navigation, components, design tokens, and the progress animation.
//! Nothing here draws pixels; screens produce serializable view snapshots
//! for a renderer and turn taps into state changes or navigation actions.
//!
//! # Modules
//!
//! - [`screens`] - Sign-in, sign-up, password reset, home and chat
//! - [`navigation`] - Routes, navigation stack, path router
//! - [`components`] - Buttons, inputs, alerts
//! - [`tokens`] - Colours and animation timings
//! - [`animation`] - Progress fill and pulse driver
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavigationAction, NavigationState, Route};
//! use app_ui::screens::SplashScreen;
//! use app_state::session::AuthSnapshot;
//!
//! let mut nav = NavigationState::new();
//! let signed_out = AuthSnapshot { user: None, loading: false };
//!
//! if let Some(action) = SplashScreen::route(&signed_out) {
//!     nav.apply(action);
//! }
//! assert_eq!(nav.current_route(), Route::Onboarding);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod navigation;
pub mod screens;
pub mod tokens;

pub use animation::{AnimationFrame, AnimationPhase, AnimationTimings, Easing, ProgressAnimator, ProgressDriver};

pub use components::{Alert, Button, ButtonVariant, Input};

pub use navigation::{NavigationAction, NavigationStack, NavigationState, NavigationTab, Route, Router, StackEntry};

pub use screens::{
    ChatContext, ChatScreen, ForgotPasswordScreen, HomeScreen, ScreenOutcome, SignInScreen, SignUpScreen,
    SplashScreen,
};
