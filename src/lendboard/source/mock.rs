use super::{LoginResponse, UserSource};
use crate::error::Result;
use crate::model::{Education, Guarantor, Profile, Socials, UserRecord, UserStats, UserStatus};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_USER_COUNT: usize = 500;
pub const DEFAULT_SEED: u64 = 42;

const ORGANIZATIONS: [&str; 5] = ["Lendsqr", "Irorun", "Lendstar", "Paystack", "Flutterwave"];
const SECTORS: [&str; 5] = ["FinTech", "Banking", "Technology", "Healthcare", "Education"];
const LEVELS: [&str; 5] = ["B.Sc", "M.Sc", "Ph.D", "HND", "OND"];
const EMPLOYMENT: [&str; 3] = ["Employed", "Unemployed", "Self-employed"];

/// In-process stand-in for the lending backend.
///
/// Every call regenerates the collection from the same seed, so
/// `fetch_user("user_042")` always agrees with `fetch_users()[41]`.
#[derive(Debug, Clone)]
pub struct MockApi {
    user_count: usize,
    seed: u64,
    latency: Duration,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(DEFAULT_USER_COUNT, DEFAULT_SEED)
    }
}

impl MockApi {
    pub fn new(user_count: usize, seed: u64) -> Self {
        Self {
            user_count,
            seed,
            latency: Duration::ZERO,
        }
    }

    /// Blocks every call for `latency` to imitate a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn delay(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }

    fn generate(&self) -> Vec<UserRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.user_count)
            .map(|i| generate_user(&mut rng, i))
            .collect()
    }
}

fn pick<R: Rng>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn phone<R: Rng>(rng: &mut R) -> String {
    format!("+234{}", rng.gen_range(1_000_000_000u64..10_000_000_000))
}

fn gender<R: Rng>(rng: &mut R) -> String {
    let gender = if rng.gen_bool(0.5) { "Male" } else { "Female" };
    gender.to_string()
}

fn naira<R: Rng>(rng: &mut R, base: f64, spread: f64) -> String {
    format!("₦{:.0}", rng.gen::<f64>() * spread + base)
}

fn generate_user<R: Rng>(rng: &mut R, i: usize) -> UserRecord {
    let first_name = format!("User{}", i);
    let last_name = format!("Test{}", i);
    let handle = format!("{}{}", first_name, last_name).to_lowercase();

    let org_name = pick(rng, &ORGANIZATIONS);
    let phone_number = phone(rng);
    let date_joined = format!(
        "{}-{:02}-{:02}T00:00:00.000Z",
        2020 + rng.gen_range(0..4),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    );
    let status = *UserStatus::ALL.choose(rng).unwrap_or(&UserStatus::Pending);

    let profile = Profile {
        phone_number: phone(rng),
        avatar: format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}{}",
            first_name, last_name
        ),
        gender: gender(rng),
        bvn: rng.gen_range(10_000_000_000u64..100_000_000_000).to_string(),
        address: format!("{} Random Street, Lagos, Nigeria", rng.gen_range(1..=999)),
        currency: "NGN".to_string(),
        first_name: first_name.clone(),
        last_name: last_name.clone(),
    };

    let guarantor = Guarantor {
        first_name: format!("Guarantor{}", i),
        last_name: format!("Test{}", i),
        phone_number: phone(rng),
        gender: gender(rng),
        address: format!(
            "{} Guarantor Street, Abuja, Nigeria",
            rng.gen_range(1..=999)
        ),
    };

    let account_balance = format!("{:.2}", rng.gen::<f64>() * 1_000_000.0);
    let account_number = rng.gen_range(1_000_000_000u64..10_000_000_000).to_string();

    let education = Education {
        level: pick(rng, &LEVELS),
        employment_status: pick(rng, &EMPLOYMENT),
        sector: pick(rng, &SECTORS),
        duration: format!("{} years", rng.gen_range(1..=10)),
        office_email: format!(
            "{}.{}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        monthly_income: (
            naira(rng, 50_000.0, 500_000.0),
            naira(rng, 50_000.0, 500_000.0),
        ),
        loan_repayment: naira(rng, 5_000.0, 50_000.0),
    };

    UserRecord {
        id: format!("user_{:03}", i),
        org_name,
        user_name: format!("{}{}{}", first_name.to_lowercase(), last_name.to_lowercase(), i),
        email: format!("user{}@example.com", i),
        phone_number,
        date_joined,
        status,
        profile,
        guarantor,
        account_balance,
        account_number,
        socials: Socials {
            facebook: format!("facebook.com/{}", handle),
            instagram: format!("@{}", handle),
            twitter: format!("@{}", handle),
        },
        education,
    }
}

impl UserSource for MockApi {
    fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        self.delay();
        let users = self.generate();
        info!(count = users.len(), "fetched users from mock api");
        Ok(users)
    }

    fn fetch_user(&self, id: &str) -> Result<Option<UserRecord>> {
        self.delay();
        let found = self.generate().into_iter().find(|u| u.id == id);
        debug!(id, found = found.is_some(), "looked up user");
        Ok(found)
    }

    fn fetch_stats(&self) -> Result<UserStats> {
        self.delay();
        Ok(UserStats::from_users(&self.generate()))
    }

    fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.delay();
        // Any non-empty pair is accepted.
        if email.is_empty() || password.is_empty() {
            info!("rejected login with missing credentials");
            return Ok(LoginResponse::denied("Invalid credentials"));
        }
        info!(email, "login accepted");
        Ok(LoginResponse::granted(format!(
            "mock_jwt_token_{}",
            Utc::now().timestamp_millis()
        )))
    }
}
