//! Profile subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use mercat::RoutePolicy;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileSubcommand {
    /// Show your profile
    Show(ShowArgs),

    /// Update your profile
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// New username
    #[arg(long)]
    pub username: String,

    /// New email address
    #[arg(long)]
    pub email: String,
}

pub async fn run(ctx: &AppContext, cmd: ProfileCommand) -> Result<()> {
    super::require(ctx, &RoutePolicy::Authenticated)?;

    match cmd.command {
        ProfileSubcommand::Show(args) => show(ctx, args).await,
        ProfileSubcommand::Update(args) => update(ctx, args).await,
    }
}

async fn show(ctx: &AppContext, _args: ShowArgs) -> Result<()> {
    let profile = ctx
        .client
        .me()
        .await
        .context("Failed to fetch user details")?;

    output::json_pretty(&profile)
}

async fn update(ctx: &AppContext, args: UpdateArgs) -> Result<()> {
    let profile = ctx
        .client
        .update_profile(&args.username, &args.email)
        .await
        .context("Failed to update profile")?;

    output::success("Profile updated");
    output::field("Username", &profile.username);
    output::field("Email", &profile.email);
    Ok(())
}
