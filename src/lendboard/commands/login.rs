use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashError, Result};
use crate::source::UserSource;
use crate::store::cache::DashboardCache;
use crate::store::KeyValueStore;

pub fn run<D: UserSource, K: KeyValueStore>(
    source: &D,
    cache: &mut DashboardCache<K>,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    let response = source.login(email.trim(), password)?;
    let token = match response.token {
        Some(token) if response.success => token,
        _ => return Err(DashError::InvalidCredentials),
    };

    cache.save_auth_token(&token);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Logged in as {}", email.trim())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::FixtureSource;
    use crate::store::memory::MemoryStore;

    #[test]
    fn stores_token_on_success() {
        let source = FixtureSource::default();
        let mut cache = DashboardCache::new(MemoryStore::new());

        let result = run(&source, &mut cache, "admin@lendsqr.com", "secret").unwrap();
        assert_eq!(cache.auth_token().as_deref(), Some("fixture_token"));
        assert_eq!(result.messages[0].content, "Logged in as admin@lendsqr.com");
    }

    #[test]
    fn rejects_missing_password_without_storing() {
        let source = FixtureSource::default();
        let mut cache = DashboardCache::new(MemoryStore::new());

        let err = run(&source, &mut cache, "admin@lendsqr.com", "").unwrap_err();
        assert!(matches!(err, DashError::InvalidCredentials));
        assert!(cache.auth_token().is_none());
    }

    #[test]
    fn whitespace_email_is_rejected() {
        let source = FixtureSource::default();
        let mut cache = DashboardCache::new(MemoryStore::new());
        assert!(run(&source, &mut cache, "   ", "secret").is_err());
    }
}
