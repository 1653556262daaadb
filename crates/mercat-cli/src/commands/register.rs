//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

pub async fn run(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    ctx.client
        .register(&args.username, &args.email, &args.password)
        .await
        .context("Failed to register")?;

    output::success("Account created. Run 'mercat login' to sign in.");
    Ok(())
}
