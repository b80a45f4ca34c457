use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lendboard", version)]
#[command(about = "Browse, filter and page through lending customers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to the dashboard
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Log out and forget the auth token
    Logout,

    /// List users, one page at a time
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the full details of one user
    #[command(alias = "v")]
    Show {
        /// User id (e.g. user_001)
        id: String,
    },

    /// Show headline user counts
    Stats {
        /// Fetch fresh data instead of using the cache
        #[arg(long)]
        refresh: bool,
    },

    /// Fetch the user collection again and update the cache
    Refresh,

    /// Clear cached users, the selected user and the login
    Reset,

    /// Get or set configuration
    Config {
        /// Configuration key (items-per-page, user-count, seed, latency-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Free-text search across organization, username, email, phone, status and name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Organization contains (case-insensitive)
    #[arg(long)]
    pub org: Option<String>,

    /// Username contains (case-insensitive)
    #[arg(long)]
    pub username: Option<String>,

    /// Email contains (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,

    /// Literal fragment of the join timestamp, e.g. 2023 or 2023-02
    #[arg(long)]
    pub date: Option<String>,

    /// Phone number contains
    #[arg(long)]
    pub phone: Option<String>,

    /// Exact status: Active, Inactive, Pending or Blacklisted
    #[arg(long)]
    pub status: Option<String>,

    /// Page to show (1-based)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the items-per-page setting)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Fetch fresh data instead of using the cache
    #[arg(long)]
    pub refresh: bool,
}

impl ListArgs {
    /// What a bare `lendboard` shows: the first page, unfiltered.
    pub fn default_first_page() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }
}
