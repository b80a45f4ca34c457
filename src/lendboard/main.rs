use clap::Parser;
use directories::ProjectDirs;
use lendboard::api::{ConfigAction, DashboardApi};
use lendboard::config::DashConfig;
use lendboard::error::{DashError, Result};
use lendboard::model::UserStatus;
use lendboard::query::FilterCriteria;
use lendboard::source::mock::MockApi;
use lendboard::store::fs::FileStore;
use lendboard::table::TableState;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands, ListArgs};
use cli::print;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if matches!(e, DashError::DataUnavailable(_)) {
            eprintln!("Run `lendboard refresh` to try again.");
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "lendboard=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

type AppApi = DashboardApi<MockApi, FileStore>;

struct AppContext {
    api: AppApi,
    config: DashConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Login { email, password }) => handle_login(&mut ctx, &email, &password),
        Some(Commands::Logout) => {
            print::print_messages(&ctx.api.logout().messages);
            Ok(())
        }
        Some(Commands::List(args)) => handle_list(&mut ctx, args),
        Some(Commands::Show { id }) => handle_show(&mut ctx, &id),
        Some(Commands::Stats { refresh }) => handle_stats(&mut ctx, refresh),
        Some(Commands::Refresh) => handle_refresh(&mut ctx),
        Some(Commands::Reset) => {
            print::print_messages(&ctx.api.reset().messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, ListArgs::default_first_page()),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("LENDBOARD_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "lendboard", "lendboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DashError::Config("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = DashConfig::load(&dir)?;

    let source = MockApi::new(config.user_count, config.seed)
        .with_latency(Duration::from_millis(config.latency_ms));
    let store = FileStore::new(dir.clone());

    Ok(AppContext {
        api: DashboardApi::new(source, store, dir),
        config,
    })
}

fn handle_login(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    let result = ctx.api.login(email, password)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<UserStatus>)
        .transpose()?;

    let mut state = TableState::new(args.per_page.unwrap_or(ctx.config.items_per_page))?;
    state.set_search(args.search.unwrap_or_default());
    state.apply_filters(FilterCriteria {
        organization: args.org.unwrap_or_default(),
        username: args.username.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        date: args.date.unwrap_or_default(),
        phone_number: args.phone.unwrap_or_default(),
        status: status.map(|s| s.to_string()).unwrap_or_default(),
    });
    // Requested pages are taken as-is; out-of-range ones render empty
    state.go_to_page(args.page, usize::MAX);

    let result = ctx.api.list_users(&state, args.refresh)?;
    print::print_users(&result.listed_users, result.page.as_ref());
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.user_details(id)?;
    if let Some(user) = &result.user {
        print::print_user_details(user);
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext, refresh: bool) -> Result<()> {
    let result = ctx.api.stats(refresh)?;
    if let Some(stats) = &result.stats {
        print::print_stats(stats);
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_refresh(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.load_dashboard(true)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print::print_config(config);
    }
    print::print_messages(&result.messages);
    Ok(())
}
