//! Home dashboard
//!
//! Shows today's intake against the goal, quick-add buttons, the mood and
//! energy selectors, and a daily tip. All state lives in the
//! [`DashboardStore`]; this screen formats it and forwards taps.

use app_core::checkin::Level;
use app_core::config::AppConfig;
use app_core::dashboard::{DashboardEvent, DashboardState};
use app_state::dashboard::DashboardStore;
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::chat::ChatContext;
use super::LOGO_TEXT;
use crate::animation::{AnimationTimings, ProgressDriver};
use crate::components::{Button, ButtonVariant};
use crate::tokens::{brand, energy_color, mood_color};

const TIP_TITLE: &str = "Today's Tip";
const TIP: &str = "Drink a glass of water as soon as you wake up to kickstart your metabolism and rehydrate after sleep.";

/// Header greeting, by local time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greeting {
    /// Before noon
    Morning,
    /// Noon to 6 pm
    Afternoon,
    /// 6 pm onwards
    Evening,
}

impl Greeting {
    /// Greeting for an hour of the day (0-23)
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    /// Greeting for the current local time
    pub fn now() -> Self {
        Self::for_hour(chrono::Local::now().hour())
    }

    /// Display text
    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}

/// One dot of a level selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOption {
    /// Level the dot selects
    pub level: Level,
    /// Whether this is the current level
    pub selected: bool,
    /// Button fill, only when selected
    pub background: Option<&'static str>,
    /// Dot colour
    pub dot: &'static str,
}

/// A mood or energy selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    /// Label under the icon
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Icon colour, following the current level
    pub icon_color: &'static str,
    /// Dots in display order
    pub options: Vec<SelectorOption>,
}

impl SelectorView {
    fn new(label: &'static str, icon: &'static str, current: Level, color: fn(Level) -> &'static str) -> Self {
        let options = Level::all()
            .into_iter()
            .map(|level| {
                let selected = level == current;
                SelectorOption {
                    level,
                    selected,
                    background: selected.then(|| color(level)),
                    dot: if selected { brand::ON_SELECTED } else { color(level) },
                }
            })
            .collect();

        Self { label, icon, icon_color: color(current), options }
    }

    /// The selected level
    pub fn selected(&self) -> Option<Level> {
        self.options.iter().find(|o| o.selected).map(|o| o.level)
    }
}

/// A quick-add button and the amount it logs
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAdd {
    /// Milliliters added on press
    pub amount_ml: u32,
    /// Button drawn
    pub button: Button,
}

/// Everything the home tab draws
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    /// Product name
    pub logo: &'static str,
    /// Time-of-day greeting
    pub greeting: &'static str,
    /// Line under the greeting
    pub subtitle: &'static str,
    /// Intake, e.g. "1200ml"
    pub intake_text: String,
    /// Goal, e.g. "of 2500ml"
    pub goal_text: String,
    /// "{n}ml to go" or "Goal achieved!"
    pub remaining_text: String,
    /// Target fill of the progress bar
    pub progress_ratio: f64,
    /// Whether the goal is reached
    pub goal_reached: bool,
    /// Quick-add buttons
    pub quick_add: Vec<QuickAdd>,
    /// Title of the check-in card
    pub check_in_title: &'static str,
    /// Mood selector
    pub mood: SelectorView,
    /// Energy selector
    pub energy: SelectorView,
    /// Tip card title
    pub tip_title: &'static str,
    /// Tip text
    pub tip: &'static str,
}

/// Home dashboard screen
pub struct HomeScreen {
    store: Arc<DashboardStore>,
    quick_add_ml: Vec<u32>,
    timings: AnimationTimings,
}

impl HomeScreen {
    /// Create the screen over a dashboard store
    pub fn new(store: Arc<DashboardStore>, config: &AppConfig) -> Self {
        Self {
            store,
            quick_add_ml: config.quick_add_ml.clone(),
            timings: AnimationTimings::from(&config.animation),
        }
    }

    /// Start the progress animation
    ///
    /// Dropping the returned driver (unmount) stops it.
    pub fn mount(&self) -> ProgressDriver {
        ProgressDriver::spawn(self.store.subscribe_progress(), self.timings)
    }

    /// Current dashboard state
    pub fn state(&self) -> DashboardState {
        self.store.state()
    }

    /// View using the current local time for the greeting
    pub fn view(&self) -> HomeView {
        self.view_with(Greeting::now())
    }

    /// View with an explicit greeting
    pub fn view_with(&self, greeting: Greeting) -> HomeView {
        let state = self.store.state();
        let hydration = state.hydration;

        let remaining_text = if hydration.is_goal_reached() {
            "Goal achieved!".to_string()
        } else {
            format!("{}ml to go", hydration.remaining())
        };

        let quick_add = self
            .quick_add_ml
            .iter()
            .map(|&amount_ml| QuickAdd {
                amount_ml,
                button: Button::new(format!("{amount_ml}ml"))
                    .with_icon("plus")
                    .with_variant(ButtonVariant::Outline),
            })
            .collect();

        HomeView {
            logo: LOGO_TEXT,
            greeting: greeting.text(),
            subtitle: "Let's stay hydrated today",
            intake_text: format!("{}ml", hydration.current_intake()),
            goal_text: format!("of {}ml", hydration.daily_goal()),
            remaining_text,
            progress_ratio: hydration.progress_ratio(),
            goal_reached: hydration.is_goal_reached(),
            quick_add,
            check_in_title: "How are you feeling?",
            mood: SelectorView::new("Mood", "smile", state.check_in.mood, mood_color),
            energy: SelectorView::new("Energy", "zap", state.check_in.energy, energy_color),
            tip_title: TIP_TITLE,
            tip: TIP,
        }
    }

    /// Log water
    pub async fn add_water(&self, amount_ml: u32) -> DashboardState {
        self.store.dispatch(DashboardEvent::AddWater(amount_ml)).await
    }

    /// Select a mood
    pub async fn set_mood(&self, level: Level) -> DashboardState {
        self.store.dispatch(DashboardEvent::SetMood(level)).await
    }

    /// Select an energy level
    pub async fn set_energy(&self, level: Level) -> DashboardState {
        self.store.dispatch(DashboardEvent::SetEnergy(level)).await
    }

    /// Context handed to the chat assistant
    pub fn chat_context(&self) -> ChatContext {
        ChatContext::from_state(&self.store.state())
    }
}
