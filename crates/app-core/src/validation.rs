//! Client-side form validation
//!
//! All checks run synchronously before the auth service is called. The first
//! failing check wins and its message is shown to the user as is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum password length accepted at sign-up
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation failures, in the wording shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Sign-in with an empty field
    #[error("Please fill in all fields")]
    MissingFields,

    /// Blank full name
    #[error("Please enter your full name")]
    MissingFullName,

    /// Blank email
    #[error("Please enter your email address")]
    MissingEmail,

    /// Email without an `@`
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Password shorter than the minimum
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort {
        /// Required length
        min: usize,
    },

    /// Confirmation does not match
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Result type for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Presence and `@` check used by sign-up and password reset
///
/// The auth service applies its own address rules on top of this.
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Sign-in form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl SignInForm {
    /// Both fields must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

/// Sign-up form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
}

impl SignUpForm {
    /// Check name, email, password length and confirmation, in that order
    ///
    /// Password length is counted in UTF-16 code units.
    pub fn validate(&self, min_password_length: usize) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingFullName);
        }
        validate_email(&self.email)?;
        if self.password.encode_utf16().count() < min_password_length {
            return Err(ValidationError::PasswordTooShort { min: min_password_length });
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Password reset form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    /// Email address
    pub email: String,
}

impl ResetPasswordForm {
    /// Email must be present and contain `@`
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)
    }
}
