//! Hydration accumulator
//!
//! Water intake is a bounded counter: it only grows, and every addition
//! saturates at the daily goal. Display metrics are derived on demand and
//! never stored next to the counter.

use serde::{Deserialize, Serialize};

/// Water intake for the current day, in milliliters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationState {
    current_intake: u32,
    daily_goal: u32,
}

/// Values shown by the progress ring and bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Fraction of the goal consumed, always within `[0, 1]`
    pub progress_ratio: f64,
    /// Milliliters left before the goal is met
    pub remaining: u32,
}

/// Result of a single `add_water` call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWaterOutcome {
    /// Intake after the addition
    pub current_intake: u32,
    /// Amount actually added after clamping
    pub accepted: u32,
    /// Whether the intake now equals the goal
    pub goal_reached: bool,
    /// Progress ratio after the addition
    pub progress_ratio: f64,
}

impl AddWaterOutcome {
    /// Whether the addition was cut short by the goal
    pub fn was_clamped(&self, requested: u32) -> bool {
        self.accepted < requested
    }
}

impl HydrationState {
    /// Start a day with nothing logged
    pub fn new(daily_goal: u32) -> Self {
        Self { current_intake: 0, daily_goal }
    }

    /// Restore a day from a stored intake, clamping it to the goal
    pub fn with_intake(current_intake: u32, daily_goal: u32) -> Self {
        Self {
            current_intake: current_intake.min(daily_goal),
            daily_goal,
        }
    }

    /// Milliliters logged so far
    pub fn current_intake(&self) -> u32 {
        self.current_intake
    }

    /// Target for the day
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    /// Progress toward the goal in `[0, 1]`
    ///
    /// A zero goal counts as already complete.
    pub fn progress_ratio(&self) -> f64 {
        if self.daily_goal == 0 {
            return 1.0;
        }
        (f64::from(self.current_intake) / f64::from(self.daily_goal)).min(1.0)
    }

    /// Milliliters still to drink
    pub fn remaining(&self) -> u32 {
        self.daily_goal.saturating_sub(self.current_intake)
    }

    /// Whether the goal has been met
    pub fn is_goal_reached(&self) -> bool {
        self.current_intake == self.daily_goal
    }

    /// Both derived display values
    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics {
            progress_ratio: self.progress_ratio(),
            remaining: self.remaining(),
        }
    }

    /// Log a drink
    ///
    /// The intake becomes `min(current + amount, goal)`. Overshooting the
    /// goal is not an error; the counter just saturates.
    pub fn add_water(&mut self, amount: u32) -> AddWaterOutcome {
        let before = self.current_intake;
        self.current_intake = before.saturating_add(amount).min(self.daily_goal);

        AddWaterOutcome {
            current_intake: self.current_intake,
            accepted: self.current_intake - before,
            goal_reached: self.is_goal_reached(),
            progress_ratio: self.progress_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_water_below_goal() {
        let mut state = HydrationState::with_intake(1200, 2500);
        let outcome = state.add_water(750);

        assert_eq!(outcome.current_intake, 1950);
        assert_eq!(outcome.accepted, 750);
        assert!(!outcome.goal_reached);
        assert_eq!(state.remaining(), 550);
    }

    #[test]
    fn test_add_water_clamps_at_goal() {
        let mut state = HydrationState::with_intake(2300, 2500);
        let outcome = state.add_water(500);

        assert_eq!(outcome.current_intake, 2500);
        assert_eq!(outcome.accepted, 200);
        assert!(outcome.goal_reached);
        assert!(outcome.was_clamped(500));
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.progress_ratio(), 1.0);
    }

    #[test]
    fn test_add_water_after_goal_is_saturated() {
        let mut state = HydrationState::with_intake(2500, 2500);
        let outcome = state.add_water(250);

        assert_eq!(outcome.current_intake, 2500);
        assert_eq!(outcome.accepted, 0);
        assert!(outcome.goal_reached);
    }

    #[test]
    fn test_huge_amount_does_not_overflow() {
        let mut state = HydrationState::with_intake(10, 2500);
        let outcome = state.add_water(u32::MAX);
        assert_eq!(outcome.current_intake, 2500);
    }

    #[test]
    fn test_clamp_holds_for_many_inputs() {
        for goal in [1u32, 7, 250, 2500, 4000] {
            for start in [0u32, 1, goal / 2, goal] {
                for amount in [1u32, 249, 250, 500, 750, 10_000] {
                    let mut state = HydrationState::with_intake(start, goal);
                    let outcome = state.add_water(amount);
                    assert_eq!(outcome.current_intake, (start + amount).min(goal));
                    assert!(state.current_intake() <= goal);
                    assert!((0.0..=1.0).contains(&state.progress_ratio()));
                }
            }
        }
    }

    #[test]
    fn test_with_intake_clamps_stored_value() {
        let state = HydrationState::with_intake(3000, 2500);
        assert_eq!(state.current_intake(), 2500);
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_zero_goal_is_complete() {
        let mut state = HydrationState::new(0);
        assert_eq!(state.progress_ratio(), 1.0);
        assert_eq!(state.remaining(), 0);
        assert!(state.is_goal_reached());

        let outcome = state.add_water(250);
        assert_eq!(outcome.current_intake, 0);
        assert_eq!(outcome.progress_ratio, 1.0);
    }

    #[test]
    fn test_metrics() {
        let state = HydrationState::with_intake(1250, 2500);
        let metrics = state.metrics();
        assert_eq!(metrics.progress_ratio, 0.5);
        assert_eq!(metrics.remaining, 1250);
    }

    #[test]
    fn test_fresh_day() {
        let state = HydrationState::new(2500);
        assert_eq!(state.current_intake(), 0);
        assert_eq!(state.progress_ratio(), 0.0);
        assert!(!state.is_goal_reached());
    }
}
