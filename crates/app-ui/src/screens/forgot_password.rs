//! Password reset screen
//!
//! Two stages: the email form, and a confirmation once the service accepted
//! the request. "Try again" returns to the form with the address kept.

use app_core::validation::ResetPasswordForm;
use app_state::session::SessionState;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

use super::{InFlight, ScreenOutcome, LOGO_TEXT};
use crate::components::{Alert, Button, Input};
use crate::navigation::{NavigationAction, Route};

/// Which half of the screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResetStage {
    /// Email entry
    #[default]
    Form,
    /// Reset link sent
    EmailSent,
}

#[derive(Debug, Default)]
struct Fields {
    form: ResetPasswordForm,
    stage: ResetStage,
}

/// Everything the password reset screen draws
#[derive(Debug, Clone, PartialEq)]
pub enum ForgotPasswordView {
    /// Email entry
    Form {
        /// Product name
        logo: &'static str,
        /// Line under the logo
        tagline: &'static str,
        /// Form title
        title: &'static str,
        /// Instructions
        subtitle: &'static str,
        /// Email field
        email: Input,
        /// Submit button
        submit: Button,
        /// Link back to sign-in
        back_to_sign_in: Button,
    },
    /// Confirmation
    EmailSent {
        /// Product name
        logo: &'static str,
        /// Confirmation title
        title: &'static str,
        /// Confirmation text naming the address
        message: String,
        /// Link back to sign-in
        back_to_sign_in: Button,
        /// Return to the form
        try_again: Button,
    },
}

/// Password reset form
pub struct ForgotPasswordScreen {
    session: SessionState,
    fields: Mutex<Fields>,
    submitting: AtomicBool,
}

impl ForgotPasswordScreen {
    /// Create the screen
    pub fn new(session: SessionState) -> Self {
        Self {
            session,
            fields: Mutex::new(Fields::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Update the email field
    pub fn set_email(&self, email: impl Into<String>) {
        self.fields.lock().form.email = email.into();
    }

    /// Current stage
    pub fn stage(&self) -> ResetStage {
        self.fields.lock().stage
    }

    /// Whether a reset request is running
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Current view
    pub fn view(&self) -> ForgotPasswordView {
        let fields = self.fields.lock();
        match fields.stage {
            ResetStage::Form => ForgotPasswordView::Form {
                logo: LOGO_TEXT,
                tagline: "Reset your password",
                title: "Forgot Password?",
                subtitle: "Enter your email address and we'll send you a link to reset your password.",
                email: Input::email()
                    .with_placeholder("Email address")
                    .with_value(&fields.form.email),
                submit: Button::new("Send Reset Link")
                    .with_loading_label("Sending...")
                    .loading(self.is_submitting()),
                back_to_sign_in: Button::link("Back to Sign In"),
            },
            ResetStage::EmailSent => ForgotPasswordView::EmailSent {
                logo: LOGO_TEXT,
                title: "Check Your Email",
                message: format!(
                    "We've sent a password reset link to {}. Please check your email and follow the instructions to reset your password.",
                    fields.form.email
                ),
                back_to_sign_in: Button::new("Back to Sign In"),
                try_again: Button::link("Didn't receive the email? Try again"),
            },
        }
    }

    /// Validate and request the reset link
    pub async fn submit(&self) -> ScreenOutcome {
        let Some(_in_flight) = InFlight::begin(&self.submitting) else {
            return ScreenOutcome::Busy;
        };

        let form = self.fields.lock().form.clone();
        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "reset form rejected");
            return ScreenOutcome::Alert(Alert::error(e.to_string()));
        }

        match self.session.reset_password(&form.email).await {
            Ok(()) => {
                self.fields.lock().stage = ResetStage::EmailSent;
                ScreenOutcome::Updated
            }
            Err(e) => ScreenOutcome::Alert(Alert::error(e.message())),
        }
    }

    /// Go back to the form, keeping the address
    pub fn try_again(&self) {
        self.fields.lock().stage = ResetStage::Form;
    }

    /// Open sign-in
    pub fn back_to_sign_in(&self) -> NavigationAction {
        NavigationAction::Push(Route::SignIn)
    }

    /// Header back arrow
    pub fn back(&self) -> NavigationAction {
        NavigationAction::Back
    }
}
