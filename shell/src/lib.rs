//! Session gating, navigation shell state and route resolution for the
//! console, kept free of any rendering framework.

pub mod access;
mod config;
pub mod credentials;
pub mod guard;
pub mod nav;
pub mod resolver;
pub mod storage;

pub use crate::access::{Access, Paths, decide};
pub use crate::config::Config;
pub use crate::credentials::{Credentials, SignInError};
pub use crate::guard::SessionGuard;
pub use crate::nav::{NavShell, indicator_orientation};
pub use crate::resolver::{RouteEntry, RouteTable};
pub use crate::storage::{MemoryStorage, SharedStorage, Storage, default_storage};
