use crate::commands::{CmdMessage, CmdResult};
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;

pub fn run<K: KeyValueStore>(cache: &mut DashboardCache<K>) -> CmdResult {
    cache.remove_auth_token();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Logged out"));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn removes_token_and_keeps_cached_users() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_auth_token("tok");
        cache.save_users(&crate::source::fixtures::sample_users(2));

        run(&mut cache);
        assert!(cache.auth_token().is_none());
        assert_eq!(cache.users().len(), 2);
    }
}
