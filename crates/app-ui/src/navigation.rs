//! Navigation system for HydroSnap
//!
//! This module provides a type-safe navigation model with:
//! - Route definitions using the app's file-based paths
//! - A root navigation stack in which the tab group is one entry
//! - Tab switching between the home dashboard and chat
//! - Path matching for deep links

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Entry point that waits for the session check
    #[default]
    Index,
    /// Onboarding (signed-out landing)
    Onboarding,

    // Auth
    /// Sign in
    SignIn,
    /// Create account
    SignUp,
    /// Password reset
    ForgotPassword,

    // Tabs
    /// Home dashboard
    Home,
    /// Chat with the assistant
    Chat,

    // Error
    /// Not found
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Index => "/",
            Route::Onboarding => "/onboarding",
            Route::SignIn => "/(auth)/sign-in",
            Route::SignUp => "/(auth)/sign-up",
            Route::ForgotPassword => "/(auth)/forgot-password",
            Route::Home => "/(tabs)",
            Route::Chat => "/(tabs)/chat",
            Route::NotFound => "/+not-found",
        }
        .to_string()
    }

    /// Check if this route requires authentication
    pub fn requires_auth(&self) -> bool {
        self.tab().is_some()
    }

    /// Check if this route belongs to the auth flow
    pub fn is_auth_flow(&self) -> bool {
        matches!(self, Route::SignIn | Route::SignUp | Route::ForgotPassword)
    }

    /// Tab this route is the root of, if any
    pub fn tab(&self) -> Option<NavigationTab> {
        match self {
            Route::Home => Some(NavigationTab::Home),
            Route::Chat => Some(NavigationTab::Chat),
            _ => None,
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Index => "HydroSnap",
            Route::Onboarding => "Welcome",
            Route::SignIn => "Sign In",
            Route::SignUp => "Create Account",
            Route::ForgotPassword => "Reset Password",
            Route::Home => "Home",
            Route::Chat => "Chat",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Dashboard tab
    #[default]
    Home,
    /// Chat tab
    Chat,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Chat => Route::Chat,
        }
    }

}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack
///
/// The root entry is kept apart from the pushed entries so the stack can
/// never be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Bottom entry
    root: StackEntry,
    /// Entries pushed above the root (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            entries: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        *self.current_entry_mut() = StackEntry::new(route);
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().unwrap_or(&self.root)
    }

    fn current_entry_mut(&mut self) -> &mut StackEntry {
        match self.entries.last_mut() {
            Some(entry) => entry,
            None => &mut self.root,
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> Vec<Route> {
        std::iter::once(&self.root)
            .chain(self.entries.iter())
            .map(|entry| entry.route)
            .collect()
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = StackEntry::new(route);
        self.entries.clear();
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// A navigation request produced by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "route", rename_all = "lowercase")]
pub enum NavigationAction {
    /// Open a screen on top of the current one
    Push(Route),
    /// Swap the current screen for another
    Replace(Route),
    /// Return to the previous screen
    Back,
}

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Root stack; the tab group occupies a single entry
    pub stack: NavigationStack,
    /// Tab shown while the tab group is on top
    pub active_tab: NavigationTab,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::Index),
            active_tab: NavigationTab::Home,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state at the index screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.stack.current()
    }

    /// Whether the tab group is showing
    pub fn in_tabs(&self) -> bool {
        self.current_route().tab().is_some()
    }

    /// Apply a navigation action
    ///
    /// Returns false when nothing changed (a `Back` at the root).
    pub fn apply(&mut self, action: NavigationAction) -> bool {
        tracing::debug!(?action, from = ?self.current_route(), "navigate");
        match action {
            NavigationAction::Push(route) => {
                self.navigate(route);
                true
            }
            NavigationAction::Replace(route) => {
                if let Some(tab) = route.tab() {
                    self.active_tab = tab;
                }
                self.stack.replace(route);
                true
            }
            NavigationAction::Back => self.go_back(),
        }
    }

    /// Navigate to a route
    ///
    /// Pushing a tab route while the tab group is showing switches tabs
    /// instead of stacking a second tab group.
    pub fn navigate(&mut self, route: Route) {
        match route.tab() {
            Some(tab) if self.in_tabs() => self.switch_tab(tab),
            Some(tab) => {
                self.active_tab = tab;
                self.stack.push(route);
            }
            None => self.stack.push(route),
        }
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        let popped = self.stack.pop();
        if let Some(tab) = self.current_route().tab() {
            self.active_tab = tab;
        }
        popped
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        if self.in_tabs() && self.active_tab != tab {
            self.stack.replace(tab.root_route());
        }
        self.active_tab = tab;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// Drop all history and show a single route
    pub fn reset_to(&mut self, route: Route) {
        self.stack.reset(route);
        self.active_tab = route.tab().unwrap_or_default();
    }

    /// Return to sign-in after the user signs out
    pub fn sign_out(&mut self) {
        self.reset_to(Route::SignIn);
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route for the pattern
    route: Route,
}

/// Segment type in a pattern
#[derive(Debug, Clone, PartialEq)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Group segment such as `(auth)`, optional in URLs
    Group(String),
}

impl PatternSegment {
    fn parse(segment: &str) -> Self {
        if segment.starts_with('(') && segment.ends_with(')') {
            PatternSegment::Group(segment.to_string())
        } else {
            PatternSegment::Literal(segment.to_string())
        }
    }

    fn text(&self) -> &str {
        match self {
            PatternSegment::Literal(s) | PatternSegment::Group(s) => s,
        }
    }
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        for route in [
            Route::Index,
            Route::Onboarding,
            Route::SignIn,
            Route::SignUp,
            Route::ForgotPassword,
            Route::Home,
            Route::Chat,
        ] {
            router.add_route(&route.to_path(), route);
        }
        router.add_route("/(tabs)/index", Route::Home);

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, route: Route) {
        let segments = split(pattern).map(PatternSegment::parse).collect();
        self.patterns.push(RoutePattern { segments, route });
    }

    /// Match a path to a route
    ///
    /// Exact matches win; otherwise group segments are ignored on both sides.
    pub fn match_path(&self, path: &str) -> Route {
        let pathname = path.split(['?', '#']).next().unwrap_or_default();
        let path_segments: Vec<PatternSegment> = split(pathname).map(PatternSegment::parse).collect();

        let exact = self
            .patterns
            .iter()
            .find(|pattern| pattern.segments == path_segments);
        if let Some(pattern) = exact {
            return pattern.route;
        }

        let literals: Vec<&str> = without_groups(&path_segments).collect();
        self.patterns
            .iter()
            .find(|pattern| without_groups(&pattern.segments).eq(literals.iter().copied()))
            .map(|pattern| pattern.route)
            .unwrap_or(Route::NotFound)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn without_groups(segments: &[PatternSegment]) -> impl Iterator<Item = &str> {
    segments
        .iter()
        .filter(|s| matches!(s, PatternSegment::Literal(_)))
        .map(PatternSegment::text)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Index.to_path(), "/");
        assert_eq!(Route::SignIn.to_path(), "/(auth)/sign-in");
        assert_eq!(Route::Home.to_path(), "/(tabs)");
        assert_eq!(Route::Chat.to_path(), "/(tabs)/chat");
    }

    #[test]
    fn test_route_requires_auth() {
        assert!(Route::Home.requires_auth());
        assert!(Route::Chat.requires_auth());
        assert!(!Route::SignIn.requires_auth());
        assert!(!Route::Onboarding.requires_auth());
        assert!(Route::ForgotPassword.is_auth_flow());
    }

    #[test]
    fn test_route_title() {
        assert_eq!(Route::SignUp.title(), "Create Account");
        assert_eq!(Route::NotFound.title(), "Not Found");
    }

    #[test]
    fn test_router_round_trips_paths() {
        let router = Router::new();
        for route in [Route::Index, Route::SignUp, Route::ForgotPassword, Route::Home, Route::Chat] {
            assert_eq!(router.match_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_router_ignores_groups() {
        let router = Router::new();
        assert_eq!(router.match_path("/sign-in"), Route::SignIn);
        assert_eq!(router.match_path("/chat?from=home"), Route::Chat);
        assert_eq!(router.match_path("/(tabs)/index"), Route::Home);
        assert_eq!(router.match_path("/"), Route::Index);
    }

    #[test]
    fn test_router_not_found() {
        let router = Router::new();
        assert_eq!(router.match_path("/nonexistent/path"), Route::NotFound);
        assert_eq!(router.match_path("/(auth)/chat"), Route::Chat);
        assert_eq!(router.match_path("/(auth)/settings"), Route::NotFound);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::SignIn);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(Route::ForgotPassword);
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(stack.current(), Route::ForgotPassword);

        assert!(stack.pop());
        assert_eq!(stack.current(), Route::SignIn);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_navigation_stack_replace_root() {
        let mut stack = NavigationStack::new(Route::Index);
        let key = stack.current_entry().key.clone();
        stack.replace(Route::Onboarding);

        assert_eq!(stack.routes(), vec![Route::Onboarding]);
        assert_ne!(stack.current_entry().key, key);
    }

    #[test]
    fn test_navigation_state_default() {
        let state = NavigationState::new();
        assert_eq!(state.current_route(), Route::Index);
        assert!(!state.in_tabs());
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_apply_actions() {
        let mut state = NavigationState::new();
        state.apply(NavigationAction::Replace(Route::SignIn));
        state.apply(NavigationAction::Push(Route::ForgotPassword));
        assert_eq!(state.stack.routes(), vec![Route::SignIn, Route::ForgotPassword]);

        assert!(state.apply(NavigationAction::Back));
        assert_eq!(state.current_route(), Route::SignIn);
        assert!(!state.apply(NavigationAction::Back));

        state.apply(NavigationAction::Replace(Route::Home));
        assert!(state.in_tabs());
        assert_eq!(state.active_tab, NavigationTab::Home);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_tab_switching() {
        let mut state = NavigationState::new();
        state.apply(NavigationAction::Replace(Route::Home));

        state.apply(NavigationAction::Push(Route::Chat));
        assert_eq!(state.active_tab, NavigationTab::Chat);
        assert_eq!(state.stack.depth(), 1);

        state.switch_tab(NavigationTab::Home);
        assert_eq!(state.current_route(), Route::Home);
    }

    #[test]
    fn test_sign_out_resets_to_sign_in() {
        let mut state = NavigationState::new();
        state.apply(NavigationAction::Replace(Route::Home));
        state.apply(NavigationAction::Push(Route::Chat));

        state.sign_out();
        assert_eq!(state.stack.routes(), vec![Route::SignIn]);
        assert_eq!(state.active_tab, NavigationTab::Home);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&NavigationAction::Replace(Route::SignIn)).unwrap();
        assert_eq!(json, r#"{"type":"replace","route":"sign-in"}"#);
        let parsed: NavigationAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, NavigationAction::Replace(Route::SignIn));
    }

    #[test]
    fn test_navigation_state_serialization() {
        let mut state = NavigationState::new();
        state.apply(NavigationAction::Push(Route::SignUp));
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
