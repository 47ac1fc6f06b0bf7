//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{devices, history, login, logout, register, settings, whoami};

/// Command-line client for a motus monitoring server.
#[derive(Parser, Debug)]
#[command(name = "motus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Base URL of the monitoring server
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Override the session store directory
    #[arg(long, global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a session (login)
    Login(login::LoginArgs),

    /// Register a new account
    Register(register::RegisterArgs),

    /// Clear the stored session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Device registry operations
    Devices(devices::DevicesCommand),

    /// Activity history operations
    History(history::HistoryCommand),

    /// Server-side settings
    Settings(settings::SettingsCommand),
}
