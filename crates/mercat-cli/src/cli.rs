//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    login::LoginArgs, logout::LogoutArgs, orders::OrdersCommand, products::ProductsCommand,
    profile::ProfileCommand, register::RegisterArgs, tasks::TasksCommand, whoami::WhoamiArgs,
};

/// CLI for the mercat storefront API.
#[derive(Parser, Debug)]
#[command(name = "mercat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL (defaults to $MERCAT_API_URL, then http://localhost:8080)
    #[arg(long, global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),

    /// Clear the stored session
    Logout(LogoutArgs),

    /// Display the active session
    Whoami(WhoamiArgs),

    /// Create a new account
    Register(RegisterArgs),

    /// Task operations
    Tasks(TasksCommand),

    /// Product operations (mutations are admin-only)
    Products(ProductsCommand),

    /// Order operations
    Orders(OrdersCommand),

    /// Profile operations
    Profile(ProfileCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
