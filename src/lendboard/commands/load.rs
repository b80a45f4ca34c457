//! Loading the dashboard's user collection.
//!
//! The cached collection is used as-is unless a refresh is requested or
//! nothing is cached. A fresh fetch replaces the cache. When the fetch fails,
//! a cached collection is still shown with a warning. Only an empty cache
//! turns the failure into [`DashError::DataUnavailable`]. Nothing retries on
//! its own.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashError, Result};
use crate::model::{UserRecord, UserStats};
use crate::source::UserSource;
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Fresh,
    Cache,
    /// The fetch failed and the cache stood in.
    StaleCache,
}

#[derive(Debug)]
pub struct Loaded {
    pub users: Vec<UserRecord>,
    pub stats: UserStats,
    pub origin: Origin,
    pub messages: Vec<CmdMessage>,
}

pub fn collection<D: UserSource, K: KeyValueStore>(
    source: &D,
    cache: &mut DashboardCache<K>,
    refresh: bool,
) -> Result<Loaded> {
    let cached = cache.users();
    if !refresh && !cached.is_empty() {
        debug!(count = cached.len(), "using cached users");
        return Ok(Loaded {
            stats: UserStats::from_users(&cached),
            users: cached,
            origin: Origin::Cache,
            messages: Vec::new(),
        });
    }

    let reason = match fetch(source) {
        Ok((users, stats)) => {
            cache.save_users(&users);
            info!(count = users.len(), "loaded fresh users");
            return Ok(Loaded {
                users,
                stats,
                origin: Origin::Fresh,
                messages: Vec::new(),
            });
        }
        Err(reason) => reason,
    };

    warn!(%reason, cached = cached.len(), "dashboard data fetch failed");
    if cached.is_empty() {
        return Err(DashError::DataUnavailable(reason));
    }
    Ok(Loaded {
        stats: UserStats::from_users(&cached),
        users: cached,
        origin: Origin::StaleCache,
        messages: vec![CmdMessage::warning(format!(
            "Failed to load dashboard data ({}); showing cached users",
            reason
        ))],
    })
}

fn fetch<D: UserSource>(source: &D) -> std::result::Result<(Vec<UserRecord>, UserStats), String> {
    let users = source.fetch_users().map_err(|e| e.to_string())?;
    if users.is_empty() {
        return Err("backend returned no users".to_string());
    }
    let stats = source.fetch_stats().map_err(|e| e.to_string())?;
    Ok((users, stats))
}

/// Loads the dashboard and reports its size.
pub fn run<D: UserSource, K: KeyValueStore>(
    source: &D,
    cache: &mut DashboardCache<K>,
    refresh: bool,
) -> Result<CmdResult> {
    let loaded = collection(source, cache, refresh)?;
    let mut result = CmdResult::default().with_stats(loaded.stats);
    result.messages = loaded.messages;
    if loaded.origin == Origin::Fresh {
        result.add_message(CmdMessage::success(format!(
            "Loaded {} users",
            loaded.users.len()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::{sample_users, FixtureSource};
    use crate::store::memory::MemoryStore;

    #[test]
    fn fetches_and_caches_when_cache_is_empty() {
        let source = FixtureSource::new(sample_users(4));
        let mut cache = DashboardCache::new(MemoryStore::new());

        let loaded = collection(&source, &mut cache, false).unwrap();
        assert_eq!(loaded.origin, Origin::Fresh);
        assert_eq!(loaded.users.len(), 4);
        assert_eq!(cache.users(), loaded.users);
    }

    #[test]
    fn uses_cache_without_fetching() {
        let source = FixtureSource::new(sample_users(4));
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_users(&sample_users(2));

        let loaded = collection(&source, &mut cache, false).unwrap();
        assert_eq!(loaded.origin, Origin::Cache);
        assert_eq!(loaded.users.len(), 2);
        assert_eq!(source.fetches(), 0);
    }

    #[test]
    fn refresh_replaces_cache() {
        let source = FixtureSource::new(sample_users(4));
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_users(&sample_users(2));

        let loaded = collection(&source, &mut cache, true).unwrap();
        assert_eq!(loaded.origin, Origin::Fresh);
        assert_eq!(cache.users().len(), 4);
    }

    #[test]
    fn failed_fetch_without_cache_is_data_unavailable() {
        let source = FixtureSource::failing();
        let mut cache = DashboardCache::new(MemoryStore::new());

        let err = collection(&source, &mut cache, false).unwrap_err();
        assert!(matches!(err, DashError::DataUnavailable(_)));
        assert!(err.to_string().starts_with("Failed to load dashboard data"));
    }

    #[test]
    fn empty_backend_is_data_unavailable() {
        let source = FixtureSource::new(Vec::new());
        let mut cache = DashboardCache::new(MemoryStore::new());
        assert!(matches!(
            collection(&source, &mut cache, true),
            Err(DashError::DataUnavailable(_))
        ));
    }

    #[test]
    fn failed_refresh_falls_back_to_cache_with_warning() {
        let source = FixtureSource::failing();
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_users(&sample_users(3));

        let loaded = collection(&source, &mut cache, true).unwrap();
        assert_eq!(loaded.origin, Origin::StaleCache);
        assert_eq!(loaded.users.len(), 3);
        assert_eq!(loaded.messages.len(), 1);
        assert_eq!(loaded.messages[0].level, crate::commands::MessageLevel::Warning);
    }

    #[test]
    fn cache_write_failure_still_returns_users() {
        let source = FixtureSource::new(sample_users(5));
        let mut cache = DashboardCache::new(MemoryStore::new().with_failing_writes());

        let result = run(&source, &mut cache, false).unwrap();
        assert_eq!(result.stats.unwrap().total_users, 5);
        assert!(cache.users().is_empty());
    }
}
