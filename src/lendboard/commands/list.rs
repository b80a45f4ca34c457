use crate::commands::load;
use crate::commands::{CmdMessage, CmdResult, PageSummary};
use crate::error::Result;
use crate::source::UserSource;
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;
use crate::table::TableState;

/// Loads the collection and returns the page of users `state` asks for.
pub fn run<D: UserSource, K: KeyValueStore>(
    source: &D,
    cache: &mut DashboardCache<K>,
    state: &TableState,
    refresh: bool,
) -> Result<CmdResult> {
    let loaded = load::collection(source, cache, refresh)?;
    let query = state.query(&loaded.users);

    let page = PageSummary {
        current_page: state.current_page(),
        items_per_page: state.window().items_per_page(),
        total_matches: query.total_matches,
        total_pages: query.total_pages,
        total_users: loaded.users.len(),
    };
    let listed = query.records.into_iter().cloned().collect();

    let mut result = CmdResult::default()
        .with_listed_users(listed)
        .with_stats(loaded.stats)
        .with_page(page);
    result.messages = loaded.messages;

    if page.total_matches == 0 {
        result.add_message(CmdMessage::info("No users match the current search and filters"));
    } else if page.current_page > page.total_pages {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({})",
            page.current_page, page.total_pages
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::UserStatus;
    use crate::query::FilterCriteria;
    use crate::source::fixtures::{sample_users, FixtureSource};
    use crate::store::memory::MemoryStore;

    fn source_with_statuses() -> FixtureSource {
        let mut users = sample_users(25);
        for (i, user) in users.iter_mut().enumerate() {
            user.status = UserStatus::ALL[i % 4];
        }
        FixtureSource::new(users)
    }

    #[test]
    fn lists_first_page_by_default() {
        let source = FixtureSource::new(sample_users(25));
        let mut cache = DashboardCache::new(MemoryStore::new());

        let result = run(&source, &mut cache, &TableState::default(), false).unwrap();
        assert_eq!(result.listed_users.len(), 10);
        assert_eq!(result.listed_users[0].id, "user_001");
        let page = result.page.unwrap();
        assert_eq!(page.total_matches, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_users, 25);
    }

    #[test]
    fn applies_filters_from_state() {
        let source = source_with_statuses();
        let mut cache = DashboardCache::new(MemoryStore::new());
        let mut state = TableState::default();
        state.apply_filters(FilterCriteria {
            status: "Pending".into(),
            ..Default::default()
        });

        let result = run(&source, &mut cache, &state, false).unwrap();
        assert_eq!(result.page.unwrap().total_matches, 6);
        assert!(result
            .listed_users
            .iter()
            .all(|u| u.status == UserStatus::Pending));
    }

    #[test]
    fn past_the_end_page_warns_and_lists_nothing() {
        let source = FixtureSource::new(sample_users(25));
        let mut cache = DashboardCache::new(MemoryStore::new());
        let mut state = TableState::default();
        state.go_to_page(4, 4);

        let result = run(&source, &mut cache, &state, false).unwrap();
        assert!(result.listed_users.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn no_matches_is_informational() {
        let source = FixtureSource::new(sample_users(5));
        let mut cache = DashboardCache::new(MemoryStore::new());
        let mut state = TableState::default();
        state.set_search("nobody");

        let result = run(&source, &mut cache, &state, false).unwrap();
        let page = result.page.unwrap();
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
