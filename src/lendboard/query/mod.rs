//! # Query Pipeline
//!
//! Turns the full user collection plus a search term, a set of column
//! filters and a page window into the slice the table displays:
//!
//! ```text
//! collection ──► search predicate ──► filter predicate ──► filtered ──► page slice
//! ```
//!
//! Every query rescans the whole collection. There is no index and no
//! incremental refiltering, so the result depends only on the arguments.
//! That is fine for the few hundred records a dashboard session holds.
//!
//! Source order is preserved. Nothing here sorts.

use crate::model::UserRecord;
use tracing::debug;

pub mod filter;
pub mod page;
pub mod search;

pub use filter::FilterCriteria;
pub use page::PageWindow;
pub use search::matches_search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// Records on the requested page, in collection order.
    pub records: Vec<&'a UserRecord>,
    /// Size of the filtered set before paging.
    pub total_matches: usize,
    pub total_pages: usize,
}

/// Records passing both the search term and the column filters.
pub fn filter_users<'a>(
    users: &'a [UserRecord],
    term: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a UserRecord> {
    users
        .iter()
        .filter(|user| matches_search(user, term) && criteria.matches(user))
        .collect()
}

pub fn run<'a>(
    users: &'a [UserRecord],
    term: &str,
    criteria: &FilterCriteria,
    window: PageWindow,
) -> QueryResult<'a> {
    let filtered = filter_users(users, term, criteria);
    let total_matches = filtered.len();
    let total_pages = window.total_pages(total_matches);
    let records = window.slice(&filtered).to_vec();

    debug!(
        scanned = users.len(),
        total_matches,
        page = window.current_page,
        total_pages,
        "query evaluated"
    );

    QueryResult {
        records,
        total_matches,
        total_pages,
    }
}
