/// Whether a credential is currently present in persisted storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    pub fn is_logged_in(self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }
}

impl From<bool> for SessionState {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_credential_presence() {
        assert_eq!(SessionState::from(true), SessionState::LoggedIn);
        assert_eq!(SessionState::from(false), SessionState::LoggedOut);
        assert!(SessionState::LoggedIn.is_logged_in());
        assert!(!SessionState::LoggedOut.is_logged_in());
    }
}
