//! Writing and clearing the persisted credential.

use std::fmt;

use types::{Error, login::{FieldErrors, LoginForm}};
use uuid::Uuid;

use crate::storage::Storage;

#[derive(Debug)]
pub enum SignInError {
    /// A required field was empty; nothing was written.
    Invalid(FieldErrors),
    Storage(Error),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::Invalid(errors) => write!(f, "invalid login form: {errors}"),
            SignInError::Storage(e) => write!(f, "failed to store credential: {e}"),
        }
    }
}

/// Submit and logout handlers of the login flow.
pub struct Credentials<S> {
    storage: S,
    token_key: String,
}

impl<S: Storage> Credentials<S> {
    pub fn new(storage: S, token_key: impl Into<String>) -> Self {
        Self {
            storage,
            token_key: token_key.into(),
        }
    }

    /// Stores a fresh opaque token once both fields are filled in.
    ///
    /// There is no credential check: a valid form is a successful login.
    pub fn sign_in(&self, form: &LoginForm) -> Result<(), SignInError> {
        form.validate().map_err(SignInError::Invalid)?;

        let token = Uuid::new_v4().simple().to_string();
        self.storage
            .set(&self.token_key, &token)
            .map_err(SignInError::Storage)?;

        tracing::info!(username = %form.username, "signed in");
        Ok(())
    }

    pub fn sign_out(&self) -> types::Result<()> {
        self.storage.remove(&self.token_key)?;
        tracing::info!("signed out");
        Ok(())
    }
}
