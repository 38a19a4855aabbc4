mod error;
pub mod login;
mod menu;
mod session;

pub use error::{Error, Result};
pub use menu::{IconId, MenuItem, Orientation};
pub use session::SessionState;

// Used by `err!`.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
