//! Command implementations.

mod context;

pub mod devices;
pub mod history;
pub mod login;
pub mod logout;
pub mod register;
pub mod settings;
pub mod whoami;

use anyhow::Result;

use crate::cli::{Cli, Commands};
pub use context::Context;

pub async fn handle(cli: Cli) -> Result<()> {
    let ctx = Context::new(&cli)?;

    match cli.command {
        Commands::Login(args) => login::run(ctx, args).await,
        Commands::Register(args) => register::run(ctx, args).await,
        Commands::Logout(args) => logout::run(ctx, args).await,
        Commands::Whoami(args) => whoami::run(ctx, args).await,
        Commands::Devices(cmd) => devices::run(ctx, cmd).await,
        Commands::History(cmd) => history::run(ctx, cmd).await,
        Commands::Settings(cmd) => settings::run(ctx, cmd).await,
    }
}
