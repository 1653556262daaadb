//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use mercat::Credentials;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(ctx: &AppContext, args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    ctx.client
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    if let Some(role) = ctx.client.session().role() {
        output::field("Role", &role);
    }

    Ok(())
}
