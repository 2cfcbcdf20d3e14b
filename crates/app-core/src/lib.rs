//! Core application logic for HydroSnap
//!
//! This crate contains the domain rules shared by the screens: the hydration
//! accumulator and dashboard reducer, the mood/energy check-in, the auth
//! collaborator contract with its form validation, and configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod checkin;
pub mod config;
pub mod dashboard;
pub mod hydration;
pub mod validation;

pub use auth::{AuthError, AuthProvider, AuthUser};
pub use checkin::{CheckIn, EnergyLevel, Level, MoodLevel};
pub use config::{AnimationConfig, AppConfig, ConfigError};
pub use dashboard::{reduce, DashboardEffect, DashboardEvent, DashboardState};
pub use hydration::{AddWaterOutcome, DerivedMetrics, HydrationState};
pub use validation::{ResetPasswordForm, SignInForm, SignUpForm, ValidationError};
