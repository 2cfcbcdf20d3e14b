//! Daily hydration log
//!
//! One record per calendar day, stored in a single versioned JSON document.
//! The dashboard loads today's record on mount instead of starting from
//! hardcoded values, and saves it after every change.

use app_core::checkin::{CheckIn, Level};
use app_core::config::AppConfig;
use app_core::dashboard::DashboardState;
use app_core::hydration::HydrationState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::persistence::{PersistedState, PersistenceConfig, Result};

/// Schema version of the log document
pub const LOG_VERSION: u32 = 1;

/// What was logged on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// Milliliters logged
    pub intake_ml: u32,
    /// Goal in effect when the record was written
    pub goal_ml: u32,
    /// Last mood selection
    pub mood: Level,
    /// Last energy selection
    pub energy: Level,
}

impl DailyRecord {
    /// Snapshot a dashboard state
    pub fn from_state(date: NaiveDate, state: &DashboardState) -> Self {
        Self {
            date,
            intake_ml: state.hydration.current_intake(),
            goal_ml: state.hydration.daily_goal(),
            mood: state.check_in.mood,
            energy: state.check_in.energy,
        }
    }
}

/// All stored days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HydrationLog {
    /// Records keyed by day
    pub days: BTreeMap<NaiveDate, DailyRecord>,
}

/// Loads and saves daily records
#[derive(Clone)]
pub struct HydrationRepository {
    store: PersistedState<HydrationLog>,
    daily_goal: u32,
    default_intake: u32,
}

impl HydrationRepository {
    /// Open the log at the configured location
    ///
    /// A damaged log is moved aside and replaced by an empty one. A log
    /// written under another schema version is left alone and reported as
    /// `PersistenceError::VersionMismatch`.
    pub async fn open(config: &AppConfig) -> Result<Self> {
        Self::open_at(
            config.hydration_log_path(),
            config.daily_goal_ml,
            config.default_intake_ml,
        )
        .await
    }

    /// Open a log at an explicit path
    pub async fn open_at(path: impl Into<PathBuf>, daily_goal: u32, default_intake: u32) -> Result<Self> {
        let store = PersistedState::new(PersistenceConfig::new(path).version(LOG_VERSION));
        store.init_or_reset().await?;
        Ok(Self { store, daily_goal, default_intake })
    }

    /// Dashboard state for a day
    ///
    /// Days without a record start from the configured defaults. The current
    /// goal always applies, and a stored intake above it is clamped.
    pub async fn load_day(&self, date: NaiveDate) -> Result<DashboardState> {
        let log = self.store.get().await?;

        let state = match log.days.get(&date) {
            Some(record) => DashboardState::new(
                HydrationState::with_intake(record.intake_ml, self.daily_goal),
                CheckIn::new(record.mood, record.energy),
            ),
            None => DashboardState::new(
                HydrationState::with_intake(self.default_intake, self.daily_goal),
                CheckIn::default(),
            ),
        };

        tracing::debug!(
            %date,
            intake = state.hydration.current_intake(),
            goal = state.hydration.daily_goal(),
            "loaded day"
        );
        Ok(state)
    }

    /// Store the state for a day, replacing any previous record
    pub async fn save_day(&self, date: NaiveDate, state: &DashboardState) -> Result<()> {
        let record = DailyRecord::from_state(date, state);
        self.store
            .update(|log| {
                log.days.insert(date, record);
            })
            .await?;
        tracing::debug!(%date, intake = record.intake_ml, "saved day");
        Ok(())
    }

    /// Stored record for a day
    pub async fn record(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        Ok(self.store.get().await?.days.get(&date).copied())
    }

    /// Most recent records, newest first
    pub async fn recent(&self, limit: usize) -> Result<Vec<DailyRecord>> {
        let log = self.store.get().await?;
        Ok(log.days.values().rev().take(limit).copied().collect())
    }
}
