//! # Storage Layer
//!
//! The dashboard keeps a small amount of state between sessions: the last
//! fetched user collection, the user opened in the detail view, and the
//! auth token. All of it lives in a string key-value store, the moral
//! equivalent of browser local storage.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per key under the data directory
//!   - `lendsqr_users.json`, `lendsqr_selected_user.json`, `lendsqr_auth_token.json`
//!   - Writes go through a temp file and a rename, so a failed write leaves the
//!     previous value in place
//!
//! - [`memory::MemoryStore`]: in-memory map for tests, with switches to make
//!   reads or writes fail
//!
//! ## Fail-soft access
//!
//! [`KeyValueStore`] methods return errors. Callers should not use them
//! directly. [`cache::DashboardCache`] wraps a store, logs every failure and
//! hands back empty defaults, so a broken cache behaves like no cache at all.

use crate::error::Result;

pub mod cache;
pub mod fs;
pub mod memory;

pub const USERS_KEY: &str = "lendsqr_users";
pub const SELECTED_USER_KEY: &str = "lendsqr_selected_user";
pub const AUTH_TOKEN_KEY: &str = "lendsqr_auth_token";

pub const ALL_KEYS: [&str; 3] = [USERS_KEY, SELECTED_USER_KEY, AUTH_TOKEN_KEY];

/// String key-value persistence.
pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
