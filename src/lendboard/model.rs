use crate::error::DashError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Blacklisted,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Pending,
        UserStatus::Blacklisted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
            UserStatus::Blacklisted => "Blacklisted",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact status name. `"active"` is rejected, matching the
/// equality semantics of the status filter.
impl FromStr for UserStatus {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub avatar: String,
    pub gender: String,
    pub bvn: String,
    pub address: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub level: String,
    pub employment_status: String,
    pub sector: String,
    pub duration: String,
    pub office_email: String,
    /// Lower and upper bound, already formatted with the currency sign.
    pub monthly_income: (String, String),
    pub loan_repayment: String,
}

/// A read-only snapshot of one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub org_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    // Kept as the raw ISO-8601 text: the date filter matches against it literally.
    pub date_joined: String,
    pub status: UserStatus,
    pub profile: Profile,
    pub guarantor: Guarantor,
    pub account_balance: String,
    pub account_number: String,
    pub socials: Socials,
    pub education: Education,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
    }

    /// Parsed join timestamp, or `None` when the stored text is not RFC 3339.
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date_joined)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Guarantor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Headline numbers shown above the user table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub users_with_loans: usize,
    pub users_with_savings: usize,
}

impl UserStats {
    pub fn from_users(users: &[UserRecord]) -> Self {
        let total_users = users.len();
        Self {
            total_users,
            active_users: users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            // 60% carry loans, 80% hold savings
            users_with_loans: total_users * 6 / 10,
            users_with_savings: total_users * 8 / 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::sample_user;

    #[test]
    fn status_parses_exact_names_only() {
        assert_eq!("Active".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(
            "Blacklisted".parse::<UserStatus>().unwrap(),
            UserStatus::Blacklisted
        );
        assert!(matches!(
            "active".parse::<UserStatus>(),
            Err(DashError::InvalidStatus(_))
        ));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let user = sample_user(1);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["orgName"], "Lendsqr");
        assert_eq!(json["dateJoined"], "2023-01-15T10:30:00.000Z");
        assert_eq!(json["status"], "Active");
        assert_eq!(json["profile"]["firstName"], "User1");
        assert_eq!(json["education"]["monthlyIncome"][0], "₦100000");
    }

    #[test]
    fn parses_join_timestamp() {
        let mut user = sample_user(1);
        let joined = user.joined_at().unwrap();
        assert_eq!(joined.format("%Y-%m-%d").to_string(), "2023-01-15");

        user.date_joined = "yesterday".into();
        assert!(user.joined_at().is_none());
    }

    #[test]
    fn stats_round_down_loan_and_savings_shares() {
        let mut users: Vec<_> = (1..=7).map(sample_user).collect();
        users[0].status = UserStatus::Pending;

        let stats = UserStats::from_users(&users);
        assert_eq!(stats.total_users, 7);
        assert_eq!(stats.active_users, 6);
        assert_eq!(stats.users_with_loans, 4);
        assert_eq!(stats.users_with_savings, 5);
    }
}
