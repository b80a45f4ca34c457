//! # API Facade
//!
//! The single entry point for dashboard operations, whatever the UI. It
//! dispatches to the command layer and enforces the one rule every dashboard
//! page shares: nothing but login works without an auth token.
//!
//! `DashboardApi<D, K>` is generic over the data source and the key-value
//! store:
//! - Production: `DashboardApi<MockApi, FileStore>`
//! - Testing: `DashboardApi<FixtureSource, MemoryStore>`
//!
//! API tests check dispatch and the auth gate. Command logic is tested in
//! the command modules.

use crate::commands;
use crate::error::Result;
use crate::source::UserSource;
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;
use crate::table::TableState;
use std::path::{Path, PathBuf};

pub struct DashboardApi<D: UserSource, K: KeyValueStore> {
    source: D,
    cache: DashboardCache<K>,
    config_dir: PathBuf,
}

impl<D: UserSource, K: KeyValueStore> DashboardApi<D, K> {
    pub fn new(source: D, store: K, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            cache: DashboardCache::new(store),
            config_dir: config_dir.into(),
        }
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<commands::CmdResult> {
        commands::login::run(&self.source, &mut self.cache, email, password)
    }

    pub fn logout(&mut self) -> commands::CmdResult {
        commands::logout::run(&mut self.cache)
    }

    pub fn is_logged_in(&self) -> bool {
        self.cache.auth_token().is_some()
    }

    pub fn load_dashboard(&mut self, refresh: bool) -> Result<commands::CmdResult> {
        commands::helpers::require_token(&self.cache)?;
        commands::load::run(&self.source, &mut self.cache, refresh)
    }

    pub fn list_users(
        &mut self,
        state: &TableState,
        refresh: bool,
    ) -> Result<commands::CmdResult> {
        commands::helpers::require_token(&self.cache)?;
        commands::list::run(&self.source, &mut self.cache, state, refresh)
    }

    pub fn user_details(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::helpers::require_token(&self.cache)?;
        commands::show::run(&self.source, &mut self.cache, id)
    }

    pub fn stats(&mut self, refresh: bool) -> Result<commands::CmdResult> {
        commands::helpers::require_token(&self.cache)?;
        commands::stats::run(&self.source, &mut self.cache, refresh)
    }

    pub fn reset(&mut self) -> commands::CmdResult {
        commands::reset::run(&mut self.cache)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn cache(&self) -> &DashboardCache<K> {
        &self.cache
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PageSummary};
