//! Index screen: waits for the session check, then routes

use app_state::session::AuthSnapshot;
use tokio::sync::watch;

use crate::navigation::{NavigationAction, Route};

/// Entry screen shown while the stored session is checked
pub struct SplashScreen;

impl SplashScreen {
    /// Where to go for a given auth state; `None` while still loading
    pub fn route(snapshot: &AuthSnapshot) -> Option<NavigationAction> {
        if snapshot.loading {
            return None;
        }
        let target = if snapshot.is_signed_in() {
            Route::Home
        } else {
            Route::Onboarding
        };
        Some(NavigationAction::Replace(target))
    }

    /// Wait until loading ends and return the navigation
    ///
    /// If the session holder goes away first, the user is treated as
    /// signed out.
    pub async fn wait(mut snapshots: watch::Receiver<AuthSnapshot>) -> NavigationAction {
        match snapshots.wait_for(|snapshot| !snapshot.loading).await {
            Ok(snapshot) => Self::route(&snapshot)
                .unwrap_or(NavigationAction::Replace(Route::Onboarding)),
            Err(_) => {
                tracing::warn!("session closed before loading finished");
                NavigationAction::Replace(Route::Onboarding)
            }
        }
    }
}
