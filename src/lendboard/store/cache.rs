use super::{KeyValueStore, ALL_KEYS, AUTH_TOKEN_KEY, SELECTED_USER_KEY, USERS_KEY};
use crate::error::Result;
use crate::model::UserRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

/// Best-effort access to the dashboard's persisted state.
///
/// Nothing here returns an error. Failed reads log and yield an empty
/// default. Failed writes log and leave the previous value alone.
pub struct DashboardCache<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> DashboardCache<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut K {
        &mut self.store
    }

    pub fn save_users(&mut self, users: &[UserRecord]) {
        if let Err(e) = self.write_json(USERS_KEY, users) {
            error!(error = %e, "Error saving users to storage");
        }
    }

    /// The cached collection, or an empty one when nothing usable is stored.
    pub fn users(&self) -> Vec<UserRecord> {
        self.read_json(USERS_KEY)
            .unwrap_or_else(|e| {
                error!(error = %e, "Error getting users from storage");
                None
            })
            .unwrap_or_default()
    }

    pub fn save_selected_user(&mut self, user: &UserRecord) {
        if let Err(e) = self.write_json(SELECTED_USER_KEY, user) {
            error!(error = %e, "Error saving selected user to storage");
        }
    }

    pub fn selected_user(&self) -> Option<UserRecord> {
        self.read_json(SELECTED_USER_KEY).unwrap_or_else(|e| {
            error!(error = %e, "Error getting selected user from storage");
            None
        })
    }

    pub fn save_auth_token(&mut self, token: &str) {
        if let Err(e) = self.store.set(AUTH_TOKEN_KEY, token) {
            error!(error = %e, "Error saving auth token to storage");
        }
    }

    pub fn auth_token(&self) -> Option<String> {
        match self.store.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                error!(error = %e, "Error getting auth token from storage");
                None
            }
        }
    }

    pub fn remove_auth_token(&mut self) {
        if let Err(e) = self.store.remove(AUTH_TOKEN_KEY) {
            error!(error = %e, "Error removing auth token from storage");
        }
    }

    pub fn clear_all(&mut self) {
        for key in ALL_KEYS {
            if let Err(e) = self.store.remove(key) {
                error!(key, error = %e, "Error clearing storage");
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)?;
        debug!(key, bytes = json.len(), "persisted");
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::{sample_user, sample_users};
    use crate::store::memory::MemoryStore;

    #[test]
    fn saves_and_reads_users() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        let users = sample_users(3);
        cache.save_users(&users);
        assert_eq!(cache.users(), users);

        let raw = cache.store().get(USERS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"orgName\":\"Lendsqr\""));
    }

    #[test]
    fn empty_store_yields_defaults() {
        let cache = DashboardCache::new(MemoryStore::new());
        assert!(cache.users().is_empty());
        assert!(cache.selected_user().is_none());
        assert!(cache.auth_token().is_none());
    }

    #[test]
    fn corrupt_json_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(USERS_KEY, "invalid json").unwrap();
        store.set(SELECTED_USER_KEY, "{").unwrap();

        let cache = DashboardCache::new(store);
        assert!(cache.users().is_empty());
        assert!(cache.selected_user().is_none());
    }

    #[test]
    fn failed_reads_are_absorbed() {
        let cache = DashboardCache::new(MemoryStore::new().with_failing_reads());
        assert!(cache.users().is_empty());
        assert!(cache.auth_token().is_none());
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        let before = sample_users(2);
        cache.save_users(&before);

        cache.store_mut().set_failing_writes(true);
        cache.save_users(&sample_users(5));
        cache.save_auth_token("tok");

        assert_eq!(cache.users(), before);
        assert!(cache.auth_token().is_none());
    }

    #[test]
    fn selected_user_and_token_roundtrip() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        let user = sample_user(9);
        cache.save_selected_user(&user);
        cache.save_auth_token("mock_token_123");

        assert_eq!(cache.selected_user(), Some(user));
        assert_eq!(cache.auth_token().as_deref(), Some("mock_token_123"));

        cache.remove_auth_token();
        assert!(cache.auth_token().is_none());
    }

    #[test]
    fn clear_all_removes_every_key() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_users(&sample_users(1));
        cache.save_selected_user(&sample_user(1));
        cache.save_auth_token("tok");

        cache.clear_all();
        assert!(cache.store().is_empty());
    }
}
