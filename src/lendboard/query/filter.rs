use super::search::contains_ci;
use crate::model::UserRecord;
use serde::{Deserialize, Serialize};

/// Structured per-column constraints. An empty field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub organization: String,
    pub username: String,
    pub email: String,
    /// Literal fragment of the raw ISO-8601 join timestamp, e.g. `"2023"`.
    pub date: String,
    pub phone_number: String,
    /// Exact status name; `"active"` matches nothing.
    pub status: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.organization.is_empty()
            && self.username.is_empty()
            && self.email.is_empty()
            && self.date.is_empty()
            && self.phone_number.is_empty()
            && self.status.is_empty()
    }

    /// True when every non-empty criterion holds for `user`.
    pub fn matches(&self, user: &UserRecord) -> bool {
        (self.organization.is_empty()
            || contains_ci(&user.org_name, &self.organization.to_lowercase()))
            && (self.username.is_empty()
                || contains_ci(&user.user_name, &self.username.to_lowercase()))
            && (self.email.is_empty() || contains_ci(&user.email, &self.email.to_lowercase()))
            && (self.phone_number.is_empty() || user.phone_number.contains(&self.phone_number))
            && (self.status.is_empty() || user.status.as_str() == self.status)
            && (self.date.is_empty() || user.date_joined.contains(&self.date))
    }
}
