use crate::commands::load;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::source::UserSource;
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;

pub fn run<D: UserSource, K: KeyValueStore>(
    source: &D,
    cache: &mut DashboardCache<K>,
    refresh: bool,
) -> Result<CmdResult> {
    let loaded = load::collection(source, cache, refresh)?;
    let mut result = CmdResult::default().with_stats(loaded.stats);
    result.messages = loaded.messages;
    Ok(result)
}
