//! # Data Sources
//!
//! The dashboard never talks to a real backend. Its users, stats and logins
//! come from a [`UserSource`], an HTTP-shaped interface whose production
//! implementation is the seeded [`mock::MockApi`].
//!
//! Sources may fail. The command layer decides how a failure surfaces: a
//! failed collection fetch falls back to the local cache when one exists.

use crate::error::Result;
use crate::model::{UserRecord, UserStats};
use serde::{Deserialize, Serialize};

pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn granted(token: impl Into<String>) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            message: None,
        }
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            message: Some(message.into()),
        }
    }
}

pub trait UserSource {
    /// The whole collection, in the order the backend provides it.
    fn fetch_users(&self) -> Result<Vec<UserRecord>>;

    /// `Ok(None)` when no user has this id.
    fn fetch_user(&self, id: &str) -> Result<Option<UserRecord>>;

    fn fetch_stats(&self) -> Result<UserStats>;

    fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::DashError;
    use crate::model::{Education, Guarantor, Profile, Socials, UserStatus};
    use std::cell::Cell;

    /// A fully populated, Active user at Lendsqr numbered `n`.
    pub fn sample_user(n: usize) -> UserRecord {
        let first = format!("User{}", n);
        let last = format!("Test{}", n);
        UserRecord {
            id: format!("user_{:03}", n),
            org_name: "Lendsqr".to_string(),
            user_name: format!("user{n}test{n}{n}"),
            email: format!("user{}@example.com", n),
            phone_number: format!("+23480{:08}", n),
            date_joined: "2023-01-15T10:30:00.000Z".to_string(),
            status: UserStatus::Active,
            profile: Profile {
                first_name: first.clone(),
                last_name: last.clone(),
                phone_number: format!("+23481{:08}", n),
                avatar: "https://example.com/avatar.jpg".to_string(),
                gender: "Male".to_string(),
                bvn: "12345678901".to_string(),
                address: "123 Test Street, Lagos, Nigeria".to_string(),
                currency: "NGN".to_string(),
            },
            guarantor: Guarantor {
                first_name: "Guarantor".to_string(),
                last_name: "Test".to_string(),
                phone_number: "+2341234567891".to_string(),
                gender: "Female".to_string(),
                address: "456 Guarantor Street, Abuja, Nigeria".to_string(),
            },
            account_balance: "50000.00".to_string(),
            account_number: "1234567890".to_string(),
            socials: Socials {
                facebook: format!("facebook.com/{}{}", first, last).to_lowercase(),
                instagram: format!("@{}{}", first, last).to_lowercase(),
                twitter: format!("@{}{}", first, last).to_lowercase(),
            },
            education: Education {
                level: "B.Sc".to_string(),
                employment_status: "Employed".to_string(),
                sector: "FinTech".to_string(),
                duration: "2 years".to_string(),
                office_email: "test@company.com".to_string(),
                monthly_income: ("₦100000".to_string(), "₦150000".to_string()),
                loan_repayment: "₦25000".to_string(),
            },
        }
    }

    pub fn sample_users(count: usize) -> Vec<UserRecord> {
        (1..=count).map(sample_user).collect()
    }

    /// A source serving a fixed collection, optionally failing every fetch.
    #[derive(Default)]
    pub struct FixtureSource {
        pub users: Vec<UserRecord>,
        pub failing: bool,
        fetches: Cell<usize>,
    }

    impl FixtureSource {
        pub fn new(users: Vec<UserRecord>) -> Self {
            Self {
                users,
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        /// Number of collection fetches served so far.
        pub fn fetches(&self) -> usize {
            self.fetches.get()
        }

        fn check(&self) -> Result<()> {
            if self.failing {
                return Err(DashError::Source("backend unreachable".to_string()));
            }
            Ok(())
        }
    }

    impl UserSource for FixtureSource {
        fn fetch_users(&self) -> Result<Vec<UserRecord>> {
            self.fetches.set(self.fetches.get() + 1);
            self.check()?;
            Ok(self.users.clone())
        }

        fn fetch_user(&self, id: &str) -> Result<Option<UserRecord>> {
            self.check()?;
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        fn fetch_stats(&self) -> Result<UserStats> {
            self.check()?;
            Ok(UserStats::from_users(&self.users))
        }

        fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
            self.check()?;
            if email.is_empty() || password.is_empty() {
                return Ok(LoginResponse::denied("Invalid credentials"));
            }
            Ok(LoginResponse::granted("fixture_token"))
        }
    }
}
