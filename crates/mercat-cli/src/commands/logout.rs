//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(ctx: &AppContext, _args: LogoutArgs) -> Result<()> {
    // Idempotent: logging out while logged out is fine
    ctx.client
        .session()
        .logout()
        .context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
