//! Settings commands.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsSubcommand {
    /// Print the current settings as JSON
    Get,

    /// Replace settings with a JSON document
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Settings document as a JSON object
    pub json: String,
}

pub async fn run(ctx: Context, cmd: SettingsCommand) -> Result<()> {
    match cmd.command {
        SettingsSubcommand::Get => get(ctx).await,
        SettingsSubcommand::Set(args) => set(ctx, args).await,
    }
}

async fn get(ctx: Context) -> Result<()> {
    let settings = ctx
        .client
        .settings()
        .get()
        .await
        .context("Failed to fetch settings")?;

    output::json_pretty(&settings)
}

async fn set(ctx: Context, args: SetArgs) -> Result<()> {
    let data: Value = serde_json::from_str(&args.json).context("Invalid JSON document")?;

    ctx.client
        .settings()
        .update(&data)
        .await
        .context("Failed to update settings")?;

    output::success("Settings updated");
    Ok(())
}
