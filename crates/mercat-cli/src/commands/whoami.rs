//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use mercat::RoutePolicy;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(ctx: &AppContext, _args: WhoamiArgs) -> Result<()> {
    super::require(ctx, &RoutePolicy::Authenticated)?;

    let profile = ctx
        .client
        .me()
        .await
        .context("Failed to fetch user details")?;

    output::field("Username", &profile.username);
    output::field("Email", &profile.email);
    if let Some(role) = profile.role.as_deref() {
        output::field("Role", role);
    }

    Ok(())
}
