//! Login form data and required-field validation.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

pub const USERNAME_REQUIRED: &str = "Please enter your username!";
pub const PASSWORD_REQUIRED: &str = "Please enter your password!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

/// Values entered in the login form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Checks that both fields are non-empty.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.username.is_empty() {
            errors.username = Some(USERNAME_REQUIRED);
        }
        if self.password.expose_secret().is_empty() {
            errors.password = Some(PASSWORD_REQUIRED);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Inline messages for the fields that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Username => self.username,
            Field::Password => self.password,
        }
    }

    /// Drops the message for a field, e.g. once the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Username => self.username = None,
            Field::Password => self.password = None,
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.username, self.password].into_iter().flatten().collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for FieldErrors {}
