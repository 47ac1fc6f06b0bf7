//! Logout command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use motus_core::CredentialStore;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(ctx: Context, _args: LogoutArgs) -> Result<()> {
    // Purely local: the server holds no session state to revoke.
    ctx.store
        .clear_session()
        .context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
