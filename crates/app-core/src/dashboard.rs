//! Home dashboard reducer
//!
//! The dashboard is driven by explicit events. `reduce` is a pure function
//! from the previous state and an event to the next state plus the effects
//! the caller should run (animation, persistence). It never touches the
//! animation layer itself.

use serde::{Deserialize, Serialize};

use crate::checkin::{CheckIn, EnergyLevel, MoodLevel};
use crate::hydration::HydrationState;

/// Everything the home tab owns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Water intake counter
    pub hydration: HydrationState,
    /// Mood and energy selection
    pub check_in: CheckIn,
}

impl DashboardState {
    /// Create a dashboard state
    pub fn new(hydration: HydrationState, check_in: CheckIn) -> Self {
        Self { hydration, check_in }
    }
}

/// User interactions on the home tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum DashboardEvent {
    /// A quick-add button was pressed
    AddWater(u32),
    /// A mood dot was tapped
    SetMood(MoodLevel),
    /// An energy dot was tapped
    SetEnergy(EnergyLevel),
}

/// Work requested by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DashboardEffect {
    /// Retarget the fill animation
    ProgressChanged {
        /// New progress ratio
        ratio: f64,
    },
    /// Play the attention pulse on the progress ring
    Pulse,
    /// The goal was reached by this event
    GoalReached,
    /// The state changed and should be saved
    Persist,
}

/// Apply one event
pub fn reduce(state: &DashboardState, event: DashboardEvent) -> (DashboardState, Vec<DashboardEffect>) {
    let mut next = *state;
    let mut effects = Vec::new();

    match event {
        DashboardEvent::AddWater(0) => {}
        DashboardEvent::AddWater(amount) => {
            let was_reached = state.hydration.is_goal_reached();
            let outcome = next.hydration.add_water(amount);

            effects.push(DashboardEffect::Pulse);
            effects.push(DashboardEffect::ProgressChanged { ratio: outcome.progress_ratio });
            if outcome.goal_reached && !was_reached {
                effects.push(DashboardEffect::GoalReached);
            }
            if outcome.accepted > 0 {
                effects.push(DashboardEffect::Persist);
            }
        }
        DashboardEvent::SetMood(level) => {
            next.check_in.set_mood(level);
            if next != *state {
                effects.push(DashboardEffect::Persist);
            }
        }
        DashboardEvent::SetEnergy(level) => {
            next.check_in.set_energy(level);
            if next != *state {
                effects.push(DashboardEffect::Persist);
            }
        }
    }

    (next, effects)
}
