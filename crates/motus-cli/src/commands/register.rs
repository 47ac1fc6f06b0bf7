//! Register command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use motus_core::{Credentials, CredentialStore};

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name for the new account
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(ctx: Context, args: RegisterArgs) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Registering...".dimmed());

    let auth = ctx
        .client
        .auth()
        .register(&args.name, &credentials)
        .await
        .context("Failed to register")?;

    ctx.store
        .set_token(&auth.token)
        .context("Failed to save token")?;
    ctx.store
        .set_user(&auth.user)
        .context("Failed to save user profile")?;

    output::success("Account created");
    println!();
    output::field("Name", &auth.user.name);
    output::field("Email", &auth.user.email);

    Ok(())
}
