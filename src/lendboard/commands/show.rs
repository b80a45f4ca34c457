use crate::commands::CmdResult;
use crate::error::{DashError, Result};
use crate::source::UserSource;
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;
use tracing::debug;

/// Details of one user. The last opened user is served from the cache;
/// anyone else is looked up in the source and becomes the new selection.
pub fn run<D: UserSource, K: KeyValueStore>(
    source: &D,
    cache: &mut DashboardCache<K>,
    id: &str,
) -> Result<CmdResult> {
    if let Some(selected) = cache.selected_user().filter(|u| u.id == id) {
        debug!(id, "serving selected user from cache");
        return Ok(CmdResult::default().with_user(selected));
    }

    let user = source
        .fetch_user(id)?
        .ok_or_else(|| DashError::UserNotFound(id.to_string()))?;
    cache.save_selected_user(&user);
    Ok(CmdResult::default().with_user(user))
}
