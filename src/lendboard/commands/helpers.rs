use crate::error::{DashError, Result};
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;

/// The stored auth token, or `NotAuthenticated` when there is none.
pub fn require_token<K: KeyValueStore>(cache: &DashboardCache<K>) -> Result<String> {
    cache.auth_token().ok_or(DashError::NotAuthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn missing_token_is_not_authenticated() {
        let cache = DashboardCache::new(MemoryStore::new());
        assert!(matches!(
            require_token(&cache),
            Err(DashError::NotAuthenticated)
        ));
    }

    #[test]
    fn present_token_is_returned() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_auth_token("tok");
        assert_eq!(require_token(&cache).unwrap(), "tok");
    }
}
