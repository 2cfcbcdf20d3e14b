//! Sign-in screen

use app_core::validation::SignInForm;
use app_state::session::SessionState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{InFlight, ScreenOutcome, LOGO_TEXT};
use crate::components::{Alert, Button, Input};
use crate::navigation::{NavigationAction, Route};

#[derive(Debug, Default)]
struct Fields {
    form: SignInForm,
    show_password: bool,
}

/// Everything the sign-in screen draws
#[derive(Debug, Clone, PartialEq)]
pub struct SignInView {
    /// Product name
    pub logo: &'static str,
    /// Line under the logo
    pub tagline: &'static str,
    /// Form title
    pub title: &'static str,
    /// Form subtitle
    pub subtitle: &'static str,
    /// Email field
    pub email: Input,
    /// Password field
    pub password: Input,
    /// Link to password reset
    pub forgot_password: Button,
    /// Submit button
    pub submit: Button,
    /// Text before the sign-up link
    pub sign_up_prompt: &'static str,
    /// Link to sign-up
    pub sign_up: Button,
}

/// Sign-in form
pub struct SignInScreen {
    session: SessionState,
    fields: Mutex<Fields>,
    submitting: AtomicBool,
}

impl SignInScreen {
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

    /// Update the password field
    pub fn set_password(&self, password: impl Into<String>) {
        self.fields.lock().form.password = password.into();
    }

    /// Show or hide the password
    pub fn toggle_password_visibility(&self) {
        let mut fields = self.fields.lock();
        fields.show_password = !fields.show_password;
    }

    /// Whether a sign-in request is running
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Current view
    pub fn view(&self) -> SignInView {
        let fields = self.fields.lock();
        let submitting = self.is_submitting();

        SignInView {
            logo: LOGO_TEXT,
            tagline: "Welcome back",
            title: "Sign In",
            subtitle: "Continue your hydration journey",
            email: Input::email()
                .with_placeholder("Email address")
                .with_value(&fields.form.email),
            password: Input::password(fields.show_password)
                .with_placeholder("Password")
                .with_value(&fields.form.password),
            forgot_password: Button::link("Forgot your password?"),
            submit: Button::new("Sign In")
                .with_loading_label("Signing In...")
                .loading(submitting),
            sign_up_prompt: "Don't have an account? ",
            sign_up: Button::link("Sign up"),
        }
    }

    /// Validate and sign in
    ///
    /// Validation failures never reach the auth service.
    pub async fn submit(&self) -> ScreenOutcome {
        let Some(_in_flight) = InFlight::begin(&self.submitting) else {
            return ScreenOutcome::Busy;
        };

        let form = self.fields.lock().form.clone();
        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "sign-in form rejected");
            return ScreenOutcome::Alert(Alert::error(e.to_string()));
        }

        match self.session.sign_in(&form.email, &form.password).await {
            Ok(_) => ScreenOutcome::Navigate(NavigationAction::Replace(Route::Home)),
            Err(e) => ScreenOutcome::Alert(Alert::new("Sign In Failed", e.message())),
        }
    }

    /// Open the password reset screen
    pub fn forgot_password(&self) -> NavigationAction {
        NavigationAction::Push(Route::ForgotPassword)
    }

    /// Open the sign-up screen
    pub fn sign_up(&self) -> NavigationAction {
        NavigationAction::Push(Route::SignUp)
    }
}
