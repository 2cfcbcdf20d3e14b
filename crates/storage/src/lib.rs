//! Storage layer for HydroSnap
//!
//! This crate provides versioned JSON persistence for the documents the
//! app keeps on the device.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod persistence;

pub use persistence::{PersistedState, PersistenceConfig, PersistenceError};
