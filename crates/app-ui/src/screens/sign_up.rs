//! Sign-up screen

use app_core::validation::SignUpForm;
use app_state::session::SessionState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{InFlight, ScreenOutcome, LOGO_TEXT};
use crate::components::{Alert, Button, Input};
use crate::navigation::{NavigationAction, Route};

const SUCCESS_TITLE: &str = "Success!";
const SUCCESS_MESSAGE: &str =
    "Your account has been created. Please check your email to verify your account.";

#[derive(Debug, Default)]
struct Fields {
    form: SignUpForm,
    show_password: bool,
    show_confirm_password: bool,
}

/// Everything the sign-up screen draws
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpView {
    /// Product name
    pub logo: &'static str,
    /// Line under the logo
    pub tagline: &'static str,
    /// Form title
    pub title: &'static str,
    /// Form subtitle
    pub subtitle: &'static str,
    /// Full name field
    pub full_name: Input,
    /// Email field
    pub email: Input,
    /// Password field
    pub password: Input,
    /// Confirmation field
    pub confirm_password: Input,
    /// Submit button
    pub submit: Button,
    /// Text before the sign-in link
    pub sign_in_prompt: &'static str,
    /// Link to sign-in
    pub sign_in: Button,
}

/// Account creation form
pub struct SignUpScreen {
    session: SessionState,
    min_password_length: usize,
    fields: Mutex<Fields>,
    submitting: AtomicBool,
}

impl SignUpScreen {
    /// Create the screen
    pub fn new(session: SessionState, min_password_length: usize) -> Self {
        Self {
            session,
            min_password_length,
            fields: Mutex::new(Fields::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Update the full name field
    pub fn set_full_name(&self, full_name: impl Into<String>) {
        self.fields.lock().form.full_name = full_name.into();
    }

    /// Update the email field
    pub fn set_email(&self, email: impl Into<String>) {
        self.fields.lock().form.email = email.into();
    }

    /// Update the password field
    pub fn set_password(&self, password: impl Into<String>) {
        self.fields.lock().form.password = password.into();
    }

    /// Update the confirmation field
    pub fn set_confirm_password(&self, confirm_password: impl Into<String>) {
        self.fields.lock().form.confirm_password = confirm_password.into();
    }

    /// Show or hide the password
    pub fn toggle_password_visibility(&self) {
        let mut fields = self.fields.lock();
        fields.show_password = !fields.show_password;
    }

    /// Show or hide the confirmation
    pub fn toggle_confirm_password_visibility(&self) {
        let mut fields = self.fields.lock();
        fields.show_confirm_password = !fields.show_confirm_password;
    }

    /// Whether a sign-up request is running
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Current view
    pub fn view(&self) -> SignUpView {
        let fields = self.fields.lock();
        let form = &fields.form;

        SignUpView {
            logo: LOGO_TEXT,
            tagline: "Start your journey",
            title: "Create Account",
            subtitle: "Join thousands staying hydrated",
            full_name: Input::name()
                .with_placeholder("Full name")
                .with_value(&form.full_name),
            email: Input::email()
                .with_placeholder("Email address")
                .with_value(&form.email),
            password: Input::password(fields.show_password)
                .with_placeholder(format!(
                    "Password (min. {} characters)",
                    self.min_password_length
                ))
                .with_value(&form.password),
            confirm_password: Input::password(fields.show_confirm_password)
                .with_placeholder("Confirm password")
                .with_value(&form.confirm_password),
            submit: Button::new("Create Account")
                .with_loading_label("Creating Account...")
                .loading(self.is_submitting()),
            sign_in_prompt: "Already have an account? ",
            sign_in: Button::link("Sign in"),
        }
    }

    /// Validate and create the account
    ///
    /// On success the user is told to verify their email; pressing OK goes
    /// to sign-in.
    pub async fn submit(&self) -> ScreenOutcome {
        let Some(_in_flight) = InFlight::begin(&self.submitting) else {
            return ScreenOutcome::Busy;
        };

        let form = self.fields.lock().form.clone();
        if let Err(e) = form.validate(self.min_password_length) {
            tracing::debug!(error = %e, "sign-up form rejected");
            return ScreenOutcome::Alert(Alert::error(e.to_string()));
        }

        match self
            .session
            .sign_up(&form.email, &form.password, &form.full_name)
            .await
        {
            Ok(_) => ScreenOutcome::Alert(
                Alert::new(SUCCESS_TITLE, SUCCESS_MESSAGE)
                    .then(NavigationAction::Replace(Route::SignIn)),
            ),
            Err(e) => ScreenOutcome::Alert(Alert::new("Sign Up Failed", e.message())),
        }
    }

    /// Open the sign-in screen
    pub fn sign_in(&self) -> NavigationAction {
        NavigationAction::Push(Route::SignIn)
    }
}
