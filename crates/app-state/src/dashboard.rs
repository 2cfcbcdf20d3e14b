//! Dashboard store
//!
//! Owns the home tab's state for one mount. Events go through the pure
//! reducer in `app_core::dashboard`; the store then runs the requested
//! effects: it signals the progress animation (fire-and-forget) and saves
//! the day to the hydration log.

use app_core::dashboard::{reduce, DashboardEffect, DashboardEvent, DashboardState};
use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;

use crate::repository::HydrationRepository;

/// Message from the store to the progress animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressSignal {
    /// Animate to the ratio with the regular fill duration
    Seed {
        /// Target ratio
        ratio: f64,
    },
    /// Water was added: pulse and animate with the quick-add duration
    WaterAdded {
        /// Target ratio
        ratio: f64,
    },
}

/// State holder for the home tab
pub struct DashboardStore {
    date: NaiveDate,
    state: RwLock<DashboardState>,
    repository: Option<HydrationRepository>,
    progress_tx: Mutex<Option<mpsc::UnboundedSender<ProgressSignal>>>,
}

impl DashboardStore {
    /// Create a store that keeps its state in memory only
    pub fn new(date: NaiveDate, initial: DashboardState) -> Self {
        Self {
            date,
            state: RwLock::new(initial),
            repository: None,
            progress_tx: Mutex::new(None),
        }
    }

    /// Create a store seeded from, and saving to, the hydration log
    pub async fn load(
        repository: HydrationRepository,
        date: NaiveDate,
    ) -> storage::persistence::Result<Self> {
        let initial = repository.load_day(date).await?;
        Ok(Self {
            date,
            state: RwLock::new(initial),
            repository: Some(repository),
            progress_tx: Mutex::new(None),
        })
    }

    /// Day this store tracks
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Current state
    pub fn state(&self) -> DashboardState {
        *self.state.read()
    }

    /// Connect the progress animation
    ///
    /// The receiver immediately gets a `Seed` with the current ratio. A
    /// later call replaces the previous receiver.
    pub fn subscribe_progress(&self) -> mpsc::UnboundedReceiver<ProgressSignal> {
        let (tx, rx) = mpsc::unbounded_channel();
        let ratio = self.state.read().hydration.progress_ratio();
        let _ = tx.send(ProgressSignal::Seed { ratio });
        *self.progress_tx.lock() = Some(tx);
        rx
    }

    /// Apply an event and run its effects
    ///
    /// The state is updated before anything else happens. A failed save is
    /// logged and does not undo the update.
    pub async fn dispatch(&self, event: DashboardEvent) -> DashboardState {
        let (next, effects) = {
            let mut state = self.state.write();
            let (next, effects) = reduce(&state, event);
            *state = next;
            (next, effects)
        };

        let mut persist = false;
        let mut ratio = None;
        for effect in &effects {
            match effect {
                DashboardEffect::ProgressChanged { ratio: r } => ratio = Some(*r),
                DashboardEffect::Pulse => {}
                DashboardEffect::GoalReached => {
                    tracing::info!(
                        goal = next.hydration.daily_goal(),
                        date = %self.date,
                        "daily goal reached"
                    );
                }
                DashboardEffect::Persist => persist = true,
            }
        }

        if effects.contains(&DashboardEffect::Pulse) {
            let ratio = ratio.unwrap_or_else(|| next.hydration.progress_ratio());
            self.signal(ProgressSignal::WaterAdded { ratio });
        } else if let Some(ratio) = ratio {
            self.signal(ProgressSignal::Seed { ratio });
        }

        // Saves land in reduce order: nothing awaits between the reduce above
        // and `save_day` queueing on the log's tokio `RwLock`, which is FIFO.
        if persist {
            if let Some(repository) = &self.repository {
                if let Err(e) = repository.save_day(self.date, &next).await {
                    tracing::warn!(error = %e, date = %self.date, "failed to save hydration log");
                }
            }
        }

        next
    }

    /// Fire-and-forget; a dropped receiver means the view is gone
    fn signal(&self, signal: ProgressSignal) {
        let mut guard = self.progress_tx.lock();
        if let Some(tx) = guard.as_ref() {
            if tx.send(signal).is_err() {
                tracing::debug!("progress animation detached");
                *guard = None;
            }
        }
    }
}
