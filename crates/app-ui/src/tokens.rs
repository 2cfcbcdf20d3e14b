//! Design tokens for HydroSnap
//!
//! Only the values that screens pick from state live here: the colours of
//! the mood and energy selectors, the selected dot, and animation timings.

use app_core::checkin::Level;

// =============================================================================
// Colour Tokens
// =============================================================================

/// Brand colours
pub mod brand {
    /// Selected dot fill
    pub const ON_SELECTED: &str = "#ffffff";
}

/// Mood selector colours
pub mod mood {
    /// Low mood (red)
    pub const LOW: &str = "#ef4444";
    /// Medium mood (amber)
    pub const MEDIUM: &str = "#f59e0b";
    /// High mood (green)
    pub const HIGH: &str = "#10b981";
}

/// Energy selector colours
pub mod energy {
    /// Low energy (grey)
    pub const LOW: &str = "#6b7280";
    /// Medium energy (blue)
    pub const MEDIUM: &str = "#3b82f6";
    /// High energy (violet)
    pub const HIGH: &str = "#8b5cf6";
}

/// Colour for a mood level
pub fn mood_color(level: Level) -> &'static str {
    match level {
        Level::Low => mood::LOW,
        Level::Medium => mood::MEDIUM,
        Level::High => mood::HIGH,
    }
}

/// Colour for an energy level
pub fn energy_color(level: Level) -> &'static str {
    match level {
        Level::Low => energy::LOW,
        Level::Medium => energy::MEDIUM,
        Level::High => energy::HIGH,
    }
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Progress fill on mount or goal change
    pub const PROGRESS_FILL: u64 = 800;
    /// Progress fill after a quick-add
    pub const PROGRESS_ADD: u64 = 600;
    /// Each half of the ring pulse
    pub const PULSE: u64 = 150;
    /// One display frame at 60 Hz
    pub const FRAME: u64 = 16;
}

/// Scale tokens
pub mod scale {
    /// Resting scale
    pub const REST: f64 = 1.0;
    /// Peak of the quick-add pulse
    pub const PULSE_PEAK: f64 = 1.05;
}
