use crate::config::DashConfig;
use crate::model::{UserRecord, UserStats};

pub mod config;
pub mod helpers;
pub mod list;
pub mod load;
pub mod login;
pub mod logout;
pub mod reset;
pub mod show;
pub mod stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Paging facts for the footer under the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_matches: usize,
    pub total_pages: usize,
    /// Size of the unfiltered collection.
    pub total_users: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_users: Vec<UserRecord>,
    pub user: Option<UserRecord>,
    pub stats: Option<UserStats>,
    pub page: Option<PageSummary>,
    pub config: Option<DashConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_users(mut self, users: Vec<UserRecord>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_stats(mut self, stats: UserStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_page(mut self, page: PageSummary) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: DashConfig) -> Self {
        self.config = Some(config);
        self
    }
}
