//! Activity history commands.

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveTime, TimeZone};
use clap::{Args, Subcommand};
use colored::Colorize;

use motus_client::endpoints::HistoryQuery;

use crate::commands::Context;
use crate::output;

/// Fetch size for client-side stat counting.
const STATS_FETCH_LIMIT: u32 = 10_000;

#[derive(Args, Debug)]
pub struct HistoryCommand {
    #[command(subcommand)]
    pub command: HistorySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum HistorySubcommand {
    /// Show recent classified activity
    Recent(RecentArgs),

    /// Show activity counters
    Stats,

    /// Persist one classified interval
    Save(SaveArgs),
}

#[derive(Args, Debug)]
pub struct RecentArgs {
    /// Restrict to one device
    #[arg(long)]
    pub device_id: Option<String>,

    /// Lower time bound (passed through to the server)
    #[arg(long)]
    pub from: Option<String>,

    /// Upper time bound (passed through to the server)
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum number of intervals
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Hardware device identifier
    pub device_id: String,

    /// Interval start, epoch milliseconds
    #[arg(long)]
    pub start_ts: i64,

    /// Interval end, epoch milliseconds
    #[arg(long)]
    pub end_ts: i64,

    /// Classifier label (walking, sitting, ...)
    #[arg(long)]
    pub label: String,

    /// Classifier confidence, 0.0 to 1.0
    #[arg(long)]
    pub confidence: f64,
}

pub async fn run(ctx: Context, cmd: HistoryCommand) -> Result<()> {
    match cmd.command {
        HistorySubcommand::Recent(args) => recent(ctx, args).await,
        HistorySubcommand::Stats => stats(ctx).await,
        HistorySubcommand::Save(args) => save(ctx, args).await,
    }
}

async fn recent(ctx: Context, args: RecentArgs) -> Result<()> {
    let mut query = HistoryQuery::new().limit(args.limit);
    if let Some(device_id) = args.device_id {
        query = query.device_id(device_id);
    }
    if let Some(from) = args.from {
        query = query.from(from);
    }
    if let Some(to) = args.to {
        query = query.to(to);
    }

    let activities = ctx
        .client
        .history()
        .recent(&query)
        .await
        .context("Failed to fetch history")?;

    if activities.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for activity in &activities {
        println!(
            "{:<10} {}  {:>7} {:>5}",
            activity.label.bold(),
            format_ts(activity.start_ts).dimmed(),
            format!("{:.1}s", activity.duration_secs()),
            format!("{:.0}%", activity.confidence * 100.0),
        );
    }

    Ok(())
}

async fn stats(ctx: Context) -> Result<()> {
    let query = HistoryQuery::new().limit(STATS_FETCH_LIMIT);
    let activities = ctx
        .client
        .history()
        .recent(&query)
        .await
        .context("Failed to fetch history")?;

    let today_start = local_midnight_millis();
    let today = activities
        .iter()
        .filter(|a| a.start_ts >= today_start)
        .count();

    output::field("Total activities", &activities.len().to_string());
    output::field("Today", &today.to_string());

    Ok(())
}

async fn save(ctx: Context, args: SaveArgs) -> Result<()> {
    ctx.client
        .history()
        .save(
            &args.device_id,
            args.start_ts,
            args.end_ts,
            &args.label,
            args.confidence,
        )
        .await
        .context("Failed to save activity")?;

    output::success("Activity saved");
    Ok(())
}

/// Epoch milliseconds of today's local midnight.
fn local_midnight_millis() -> i64 {
    let now = Local::now();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) => dt.timestamp_millis(),
        // Midnight skipped or doubled by a DST transition
        chrono::LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        chrono::LocalResult::None => now.timestamp_millis(),
    }
}

/// Render an epoch-millisecond timestamp in local time.
fn format_ts(ts: i64) -> String {
    match Local.timestamp_millis_opt(ts) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => ts.to_string(),
    }
}
