//! Chat tab
//!
//! Placeholder hosting the hydration assistant. The assistant itself lives
//! outside this crate; the tab only hands it the user's live dashboard
//! state.

use app_core::checkin::{EnergyLevel, MoodLevel};
use app_core::dashboard::DashboardState;
use app_state::dashboard::DashboardStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What the assistant knows about the user's day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    /// Milliliters logged today
    pub water_intake: u32,
    /// Daily goal in milliliters
    pub daily_goal: u32,
    /// Current mood
    pub current_mood: MoodLevel,
    /// Current energy
    pub energy_level: EnergyLevel,
}

impl ChatContext {
    /// Build from dashboard state
    pub fn from_state(state: &DashboardState) -> Self {
        Self {
            water_intake: state.hydration.current_intake(),
            daily_goal: state.hydration.daily_goal(),
            current_mood: state.check_in.mood,
            energy_level: state.check_in.energy,
        }
    }
}

/// Chat tab screen
pub struct ChatScreen {
    store: Arc<DashboardStore>,
}

impl ChatScreen {
    /// Create the tab over the same store as the home tab
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    /// Context for the assistant, read fresh on every call
    pub fn context(&self) -> ChatContext {
        ChatContext::from_state(&self.store.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::checkin::{CheckIn, Level};
    use app_core::dashboard::DashboardEvent;
    use app_core::hydration::HydrationState;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_context_follows_store() {
        let store = Arc::new(DashboardStore::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            DashboardState::new(HydrationState::with_intake(1200, 2500), CheckIn::default()),
        ));
        let chat = ChatScreen::new(store.clone());
        assert_eq!(chat.context().water_intake, 1200);

        store.dispatch(DashboardEvent::AddWater(500)).await;
        let context = chat.context();
        assert_eq!(context.water_intake, 1700);
        assert_eq!(context.daily_goal, 2500);
        assert_eq!(context.current_mood, Level::Medium);
    }

    #[test]
    fn test_context_serializes_camel_case() {
        let context = ChatContext {
            water_intake: 1200,
            daily_goal: 2500,
            current_mood: Level::Medium,
            energy_level: Level::High,
        };
        let json = serde_json::to_value(context).unwrap();
        assert_eq!(json["waterIntake"], 1200);
        assert_eq!(json["currentMood"], "medium");
        assert_eq!(json["energyLevel"], "high");
    }
}
