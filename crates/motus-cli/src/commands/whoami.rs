//! Whoami command implementation.

use anyhow::{Result, bail};
use clap::Args;

use motus_core::CredentialStore;

use crate::commands::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(ctx: Context, _args: WhoamiArgs) -> Result<()> {
    let session = ctx.store.session();

    if !session.is_authenticated() {
        bail!("No active session. Run 'motus login' first.");
    }

    match session.user {
        Some(user) => {
            output::field("Name", &user.name);
            output::field("Email", &user.email);
            if let Some(id) = user.id {
                output::field("Id", &id.to_string());
            }
        }
        // Token without a readable profile still counts as logged in.
        None => output::field("User", "<no stored profile>"),
    }

    Ok(())
}
