//! Shared command context.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;

use motus_client::ApiClient;
use motus_core::ApiBase;
use motus_store::FileStore;

use crate::cli::Cli;

/// Client and store shared by every command.
pub struct Context {
    pub client: ApiClient,
    pub store: Arc<FileStore>,
}

impl Context {
    pub fn new(cli: &Cli) -> Result<Self> {
        let dir = match &cli.store_dir {
            Some(dir) => dir.clone(),
            None => default_store_dir()?,
        };
        let store = Arc::new(FileStore::new(dir));

        let base = ApiBase::new(&cli.base_url).context("Invalid base URL")?;
        let client = ApiClient::new(base, store.clone());

        Ok(Self { client, store })
    }
}

/// Default session store location.
fn default_store_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "motus").context("Could not determine config directory")?;
    Ok(dirs.data_dir().join("session"))
}
