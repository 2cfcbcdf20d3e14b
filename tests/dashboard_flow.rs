//! Dashboard flow integration tests
//!
//! Home and chat tabs over a real hydration log in a temp directory.

use async_trait::async_trait;
use chrono::NaiveDate;
use hydrosnap::core::auth::{AuthProvider, AuthUser, Result};
use hydrosnap::core::{AppConfig, Level};
use hydrosnap::ui::animation::AnimationPhase;
use hydrosnap::ui::screens::Greeting;
use hydrosnap::App;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Always signed in
struct SignedIn;

#[async_trait]
impl AuthProvider for SignedIn {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthUser> {
        Ok(AuthUser::new("u-1", email))
    }

    async fn sign_up(&self, email: &str, _password: &str, full_name: &str) -> Result<AuthUser> {
        Ok(AuthUser::new("u-1", email).with_full_name(full_name))
    }

    async fn reset_password(&self, _email: &str) -> Result<()> {
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>> {
        Ok(Some(AuthUser::new("u-1", "a@b.com")))
    }
}

fn config(dir: &TempDir, default_intake_ml: u32) -> AppConfig {
    AppConfig {
        data_dir: dir.path().to_path_buf(),
        default_intake_ml,
        ..AppConfig::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn test_quick_add_below_goal() {
    let dir = TempDir::new().unwrap();
    let app = App::open(config(&dir, 1200), Arc::new(SignedIn)).await.unwrap();
    let (home, _chat) = app.tabs_for(today()).await.unwrap();

    let state = home.add_water(750).await;
    assert_eq!(state.hydration.current_intake(), 1950);

    let view = home.view_with(Greeting::Afternoon);
    assert_eq!(view.intake_text, "1950ml");
    assert_eq!(view.remaining_text, "550ml to go");
    assert!((view.progress_ratio - 0.78).abs() < 1e-9);
    assert!(!view.goal_reached);
}

#[tokio::test]
async fn test_quick_add_clamps_at_goal() {
    let dir = TempDir::new().unwrap();
    let app = App::open(config(&dir, 2400), Arc::new(SignedIn)).await.unwrap();
    let (home, _chat) = app.tabs_for(today()).await.unwrap();

    home.add_water(250).await;
    let state = home.add_water(500).await;
    assert_eq!(state.hydration.current_intake(), 2500);
    assert_eq!(state.hydration.remaining(), 0);

    let view = home.view_with(Greeting::Evening);
    assert_eq!(view.remaining_text, "Goal achieved!");
    assert_eq!(view.progress_ratio, 1.0);
}

#[tokio::test]
async fn test_day_survives_remount() {
    let dir = TempDir::new().unwrap();
    {
        let app = App::open(config(&dir, 0), Arc::new(SignedIn)).await.unwrap();
        let (home, _chat) = app.tabs_for(today()).await.unwrap();
        home.add_water(500).await;
        home.set_mood(Level::High).await;
    }

    let app = App::open(config(&dir, 0), Arc::new(SignedIn)).await.unwrap();
    let (home, chat) = app.tabs_for(today()).await.unwrap();
    assert_eq!(home.state().hydration.current_intake(), 500);
    assert_eq!(chat.context().current_mood, Level::High);

    // a new day starts over
    let tomorrow = today().succ_opt().unwrap();
    let (home, _chat) = app.tabs_for(tomorrow).await.unwrap();
    assert_eq!(home.state().hydration.current_intake(), 0);

    let recent = app.repository().recent(7).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].intake_ml, 500);
}

#[tokio::test]
async fn test_chat_sees_home_changes() {
    let dir = TempDir::new().unwrap();
    let app = App::open(config(&dir, 1200), Arc::new(SignedIn)).await.unwrap();
    let (home, chat) = app.tabs_for(today()).await.unwrap();

    home.add_water(250).await;
    home.set_energy(Level::Low).await;

    let context = chat.context();
    assert_eq!(context.water_intake, 1450);
    assert_eq!(context.daily_goal, 2500);
    assert_eq!(context.energy_level, Level::Low);
}

#[tokio::test(start_paused = true)]
async fn test_progress_animation_follows_quick_add() {
    let dir = TempDir::new().unwrap();
    let app = App::open(config(&dir, 1200), Arc::new(SignedIn)).await.unwrap();
    let (home, _chat) = app.tabs_for(today()).await.unwrap();

    let driver = home.mount();
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert!((driver.frame().fill - 0.48).abs() < 1e-9);
    assert_eq!(driver.frame().phase, AnimationPhase::Idle);

    home.add_water(750).await;
    tokio::time::sleep(Duration::from_millis(150)).await;
    let frame = driver.frame();
    assert_eq!(frame.phase, AnimationPhase::Animating);
    assert!(frame.scale > 1.0);

    tokio::time::sleep(Duration::from_millis(600)).await;
    let frame = driver.frame();
    assert_eq!(frame.phase, AnimationPhase::Idle);
    assert_eq!(frame.scale, 1.0);
    assert!((frame.fill - 0.78).abs() < 1e-9);

    // unmount
    drop(driver);
    let state = home.add_water(250).await;
    assert_eq!(state.hydration.current_intake(), 2200);
}
