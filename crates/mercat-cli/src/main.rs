//! mercat - CLI for the storefront REST API.
//!
//! This is a thin wrapper over the `mercat` library: the session, client,
//! and route guard are wired once here and handed to every command.

mod cli;
mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mercat::{ApiClient, ApiUrl, FileStorage, RouteGuard, Session};

use cli::{Cli, Commands};
use commands::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    // Base address resolved once at startup: flag, then environment
    let base = cli
        .api
        .or_else(|| std::env::var("MERCAT_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    let base = ApiUrl::new(&base).context("Invalid API URL")?;
    tracing::debug!(%base, "resolved API base address");

    let session = Session::new(Box::new(FileStorage::new(session_path()?)));
    session.initialize();

    let ctx = AppContext {
        guard: RouteGuard::new(session.clone()),
        client: ApiClient::new(base, session),
    };

    match cli.command {
        Commands::Login(args) => commands::login::run(&ctx, args).await,
        Commands::Logout(args) => commands::logout::run(&ctx, args),
        Commands::Whoami(args) => commands::whoami::run(&ctx, args).await,
        Commands::Register(args) => commands::register::run(&ctx, args).await,
        Commands::Tasks(cmd) => commands::tasks::run(&ctx, cmd).await,
        Commands::Products(cmd) => commands::products::run(&ctx, cmd).await,
        Commands::Orders(cmd) => commands::orders::run(&ctx, cmd).await,
        Commands::Profile(cmd) => commands::profile::run(&ctx, cmd).await,
    }
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "mercat").context("Could not determine config directory")?;
    Ok(dirs.data_dir().join("session.json"))
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
