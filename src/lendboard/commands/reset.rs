use crate::commands::{CmdMessage, CmdResult};
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;

/// Forgets everything stored locally, including the login.
pub fn run<K: KeyValueStore>(cache: &mut DashboardCache<K>) -> CmdResult {
    cache.clear_all();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Cleared cached users, selection and login"));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::{sample_user, sample_users};
    use crate::store::memory::MemoryStore;

    #[test]
    fn clears_every_slot() {
        let mut cache = DashboardCache::new(MemoryStore::new());
        cache.save_users(&sample_users(3));
        cache.save_selected_user(&sample_user(1));
        cache.save_auth_token("tok");

        run(&mut cache);
        assert!(cache.users().is_empty());
        assert!(cache.selected_user().is_none());
        assert!(cache.auth_token().is_none());
    }
}
