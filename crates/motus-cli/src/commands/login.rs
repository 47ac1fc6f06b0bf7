//! Login command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use motus_core::{Credentials, CredentialStore};

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(ctx: Context, args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let auth = ctx
        .client
        .auth()
        .login(&credentials)
        .await
        .context("Failed to login")?;

    // Save session
    ctx.store
        .set_token(&auth.token)
        .context("Failed to save token")?;
    ctx.store
        .set_user(&auth.user)
        .context("Failed to save user profile")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("Name", &auth.user.name);
    output::field("Email", &auth.user.email);

    Ok(())
}
