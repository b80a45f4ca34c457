use crate::model::UserRecord;

/// Free-text match across the searchable columns of a user.
///
/// An empty term matches every record. Text columns compare lower-cased;
/// the phone number compares verbatim since it carries no letters.
pub fn matches_search(user: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    contains_ci(&user.org_name, &needle)
        || contains_ci(&user.user_name, &needle)
        || contains_ci(&user.email, &needle)
        || user.phone_number.contains(term)
        || contains_ci(user.status.as_str(), &needle)
        || contains_ci(&user.full_name(), &needle)
}

/// `needle` must already be lower-cased.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
