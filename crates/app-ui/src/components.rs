//! UI component library for HydroSnap
//!
//! Components are plain serializable structs built with builder methods.
//! Screens assemble them from state; a renderer draws them.
//!
//! # Available Components
//!
//! - [`Button`] - Pressable button with a loading label
//! - [`Input`] - Text field with secure entry and keyboard hints
//! - [`Alert`] - Modal message with an optional follow-up navigation

use crate::navigation::NavigationAction;
use serde::{Deserialize, Serialize};

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled gradient button
    #[default]
    Solid,
    /// Translucent button (quick-add)
    Outline,
    /// Text-only link
    Link,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Label shown at rest
    pub label: String,
    /// Label shown while loading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_label: Option<String>,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether the button is loading
    #[serde(default)]
    pub loading: bool,
    /// Icon name to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            loading_label: None,
            variant: ButtonVariant::default(),
            loading: false,
            icon: None,
        }
    }

    /// Create a text link
    pub fn link(label: impl Into<String>) -> Self {
        Self::new(label).with_variant(ButtonVariant::Link)
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the label shown while loading
    pub fn with_loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = Some(label.into());
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set loading state
    ///
    /// A loading button ignores presses.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Text to draw for the current state
    pub fn display_label(&self) -> &str {
        match (&self.loading_label, self.loading) {
            (Some(label), true) => label,
            _ => &self.label,
        }
    }

    /// Whether a press should be handled
    pub fn is_pressable(&self) -> bool {
        !self.loading
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Keyboard shown for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    /// Regular keyboard
    #[default]
    Default,
    /// Keyboard with `@` and `.`
    EmailAddress,
}

/// Automatic capitalization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoCapitalize {
    /// Leave input as typed
    None,
    /// Capitalize each word
    Words,
    /// Capitalize sentences
    #[default]
    Sentences,
}

/// Input component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Mask the value
    #[serde(default)]
    pub secure: bool,
    /// Whether the field has a show/hide toggle
    #[serde(default)]
    pub has_visibility_toggle: bool,
    /// Keyboard to show
    #[serde(default)]
    pub keyboard: KeyboardType,
    /// Capitalization mode
    #[serde(default)]
    pub auto_capitalize: AutoCapitalize,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Input {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            placeholder: None,
            value: String::new(),
            secure: false,
            has_visibility_toggle: false,
            keyboard: KeyboardType::Default,
            auto_capitalize: AutoCapitalize::Sentences,
            icon: None,
        }
    }

    /// Create an email input
    pub fn email() -> Self {
        Self {
            keyboard: KeyboardType::EmailAddress,
            auto_capitalize: AutoCapitalize::None,
            icon: Some("mail".to_string()),
            ..Self::new()
        }
    }

    /// Create a password input with a visibility toggle
    ///
    /// `visible` is the current state of the toggle.
    pub fn password(visible: bool) -> Self {
        Self {
            secure: !visible,
            has_visibility_toggle: true,
            auto_capitalize: AutoCapitalize::None,
            icon: Some("lock".to_string()),
            ..Self::new()
        }
    }

    /// Create a name input
    pub fn name() -> Self {
        Self {
            auto_capitalize: AutoCapitalize::Words,
            icon: Some("user".to_string()),
            ..Self::new()
        }
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Icon for the visibility toggle, if the field has one
    pub fn toggle_icon(&self) -> Option<&'static str> {
        self.has_visibility_toggle
            .then(|| if self.secure { "eye" } else { "eye-off" })
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Alert Component
// =============================================================================

/// Modal alert with a single OK button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Title line
    pub title: String,
    /// Body text
    pub message: String,
    /// Navigation to perform when OK is pressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_ok: Option<NavigationAction>,
}

impl Alert {
    /// Create an alert
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_ok: None,
        }
    }

    /// Alert titled "Error"
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    /// Navigate when OK is pressed
    pub fn then(mut self, action: NavigationAction) -> Self {
        self.on_ok = Some(action);
        self
    }

    /// Label of the dismiss button
    pub fn button_label(&self) -> &'static str {
        "OK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;

    #[test]
    fn test_button_loading_label() {
        let button = Button::new("Sign In").with_loading_label("Signing In...");
        assert_eq!(button.display_label(), "Sign In");
        assert!(button.is_pressable());

        let button = button.loading(true);
        assert_eq!(button.display_label(), "Signing In...");
        assert!(!button.is_pressable());
    }

    #[test]
    fn test_button_without_loading_label() {
        let button = Button::new("250ml").loading(true);
        assert_eq!(button.display_label(), "250ml");
        assert!(Button::link("Sign Up").is_pressable());
    }

    #[test]
    fn test_password_input_toggle() {
        let hidden = Input::password(false);
        assert!(hidden.secure);
        assert_eq!(hidden.toggle_icon(), Some("eye"));

        let shown = Input::password(true);
        assert!(!shown.secure);
        assert_eq!(shown.toggle_icon(), Some("eye-off"));

        assert_eq!(Input::email().toggle_icon(), None);
    }

    #[test]
    fn test_email_input_hints() {
        let input = Input::email().with_placeholder("Email address");
        assert_eq!(input.keyboard, KeyboardType::EmailAddress);
        assert_eq!(input.auto_capitalize, AutoCapitalize::None);
        assert_eq!(input.placeholder.as_deref(), Some("Email address"));
        assert_eq!(Input::name().auto_capitalize, AutoCapitalize::Words);
    }

    #[test]
    fn test_alert_with_action() {
        let alert = Alert::new("Success!", "Done").then(NavigationAction::Replace(Route::SignIn));
        assert_eq!(alert.on_ok, Some(NavigationAction::Replace(Route::SignIn)));
        assert_eq!(alert.button_label(), "OK");
        assert_eq!(Alert::error("Passwords do not match").title, "Error");
    }

    #[test]
    fn test_input_deserialize_defaults() {
        let input: Input = serde_json::from_str(r#"{"placeholder":"Full name"}"#).unwrap();
        assert!(!input.secure);
        assert_eq!(input.keyboard, KeyboardType::Default);
    }
}
