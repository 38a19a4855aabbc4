use types::SessionState;

/// What to do with a request for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Serve the login view.
    Login,
    /// Serve the navigation shell with the resolved route in its body.
    Shell,
    /// Send the caller elsewhere.
    Redirect(String),
}

/// Login and home locations. `login` must be the path the router serves the
/// login view on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paths<'a> {
    pub login: &'a str,
    pub home: &'a str,
}

/// Gate a request on the session state.
///
/// | state     | login path          | any other path       |
/// |-----------|---------------------|----------------------|
/// | LoggedOut | `Login`             | redirect to login    |
/// | LoggedIn  | redirect to home    | `Shell`              |
pub fn decide(state: SessionState, path: &str, paths: Paths<'_>) -> Access {
    let is_login = path == paths.login;

    match (state, is_login) {
        (SessionState::LoggedOut, true) => Access::Login,
        (SessionState::LoggedOut, false) => Access::Redirect(paths.login.to_string()),
        (SessionState::LoggedIn, true) => Access::Redirect(paths.home.to_string()),
        (SessionState::LoggedIn, false) => Access::Shell,
    }
}
