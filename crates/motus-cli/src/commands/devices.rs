//! Device registry commands.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct DevicesCommand {
    #[command(subcommand)]
    pub command: DevicesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DevicesSubcommand {
    /// List registered devices
    List,

    /// Register a device
    Register(RegisterDeviceArgs),
}

#[derive(Args, Debug)]
pub struct RegisterDeviceArgs {
    /// Hardware device identifier
    pub device_id: String,

    /// Display name
    #[arg(long)]
    pub name: String,
}

pub async fn run(ctx: Context, cmd: DevicesCommand) -> Result<()> {
    match cmd.command {
        DevicesSubcommand::List => list(ctx).await,
        DevicesSubcommand::Register(args) => register(ctx, args).await,
    }
}

async fn list(ctx: Context) -> Result<()> {
    let devices = ctx
        .client
        .devices()
        .list()
        .await
        .context("Failed to list devices")?;

    if devices.is_empty() {
        println!("No devices registered.");
        return Ok(());
    }

    for device in devices {
        println!("{}  {}", device.device_id.dimmed(), device.name);
    }

    Ok(())
}

async fn register(ctx: Context, args: RegisterDeviceArgs) -> Result<()> {
    ctx.client
        .devices()
        .register(&args.device_id, &args.name)
        .await
        .context("Failed to register device")?;

    output::success("Device registered");
    output::field("Device", &args.device_id);
    output::field("Name", &args.name);

    Ok(())
}
