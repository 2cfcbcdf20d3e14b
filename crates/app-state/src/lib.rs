//! Application state management for HydroSnap
//!
//! This crate holds the stateful pieces the screens share: the observable
//! auth session, the home dashboard store, and the daily hydration log.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dashboard;
pub mod repository;
pub mod session;

pub use dashboard::{DashboardStore, ProgressSignal};
pub use repository::{DailyRecord, HydrationLog, HydrationRepository};
pub use session::{AuthSnapshot, SessionState};
