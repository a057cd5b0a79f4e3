//! CLI administration tool for referral-tracker.
//!
//! Reads and resets the JSON snapshot directly, without going through HTTP.
//! Stop the server before `reset`: a running server keeps its own in-memory
//! state and will overwrite the file on the next counted click.
//!
//! # Usage
//!
//! ```bash
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Score for one reference
//! cargo run --bin admin -- score promo1
//!
//! # Top 10 references
//! cargo run --bin admin -- leaderboard --limit 10
//!
//! # Wipe all counters and the event log
//! cargo run --bin admin -- reset
//! ```
//!
//! # Environment Variables
//!
//! - `SNAPSHOT_PATH` (optional): Snapshot file, overridden by `--snapshot` (default: `db.json`)

use referral_tracker::application::services::{ClickService, StoreStats};
use referral_tracker::domain::aggregate::AggregateState;
use referral_tracker::domain::repositories::{SnapshotError, SnapshotRepository};
use referral_tracker::infrastructure::persistence::JsonFileSnapshotRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for inspecting referral-tracker snapshots.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file (defaults to $SNAPSHOT_PATH, then db.json)
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show totals
    Stats,

    /// Show the score for one reference
    Score {
        /// Referral code
        reference: String,
    },

    /// Show references ranked by clicks
    Leaderboard {
        /// Only show the top N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete all counters and the event log
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli
        .snapshot
        .or_else(|| std::env::var("SNAPSHOT_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("db.json"));

    let repo = Arc::new(JsonFileSnapshotRepository::new(path));

    match cli.command {
        Commands::Stats => handle_stats(repo).await?,
        Commands::Score { reference } => handle_score(repo, &reference).await?,
        Commands::Leaderboard { limit } => handle_leaderboard(repo, limit).await?,
        Commands::Reset { yes } => handle_reset(repo, yes).await?,
    }

    Ok(())
}

/// Loads the snapshot strictly: unlike the server, a malformed file is an error here.
async fn load_state(repo: &JsonFileSnapshotRepository) -> Result<AggregateState> {
    let state = repo
        .load()
        .await
        .with_context(|| format!("Failed to read {}", repo.path().display()))?;

    match state {
        Some(state) => Ok(state),
        None => {
            println!(
                "{}",
                format!("⚠️  No snapshot at {}", repo.path().display()).yellow()
            );
            Ok(AggregateState::new())
        }
    }
}

/// Displays totals.
///
/// Shows:
/// - Number of references with at least one click
/// - Total accepted clicks
/// - Event log length
async fn handle_stats(repo: Arc<JsonFileSnapshotRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let state = load_state(&repo).await?;
    let stats = StoreStats::from_state(&state);

    println!("  Snapshot:    {}", repo.path().display().to_string().cyan());
    println!(
        "  References:  {}",
        stats.references.to_string().bright_white().bold()
    );
    println!(
        "  Clicks:      {}",
        stats.total_clicks.to_string().bright_white().bold()
    );
    println!(
        "  Log entries: {}",
        stats.log_entries.to_string().bright_white().bold()
    );

    if !state.is_consistent() {
        println!();
        println!(
            "{}",
            "⚠️  totalClicks does not match the per-reference counters".yellow()
        );
    }

    println!();
    Ok(())
}

/// Displays the score for a single reference.
async fn handle_score(repo: Arc<JsonFileSnapshotRepository>, reference: &str) -> Result<()> {
    let state = load_state(&repo).await?;
    let service = ClickService::new(state, repo);
    let score = service.score(reference).await;

    println!("{}", "🎯 Score".bright_blue().bold());
    println!();
    println!("  Reference: {}", score.reference.cyan());
    println!(
        "  Clicks:    {}",
        score.clicks.to_string().bright_white().bold()
    );
    println!("  Total:     {}", score.total.to_string().bright_black());
    println!();

    Ok(())
}

/// Displays the leaderboard.
///
/// # Output Format
///
/// ```text
/// 🏆 Leaderboard
///
///   #    Reference                      Clicks
///   ──────────────────────────────────────────────
///   1    promo1                         3
///   2    promo2                         1
/// ```
async fn handle_leaderboard(
    repo: Arc<JsonFileSnapshotRepository>,
    limit: Option<usize>,
) -> Result<()> {
    let state = load_state(&repo).await?;
    let service = ClickService::new(state, repo);
    let entries = service.leaderboard().await;

    println!("{}", "🏆 Leaderboard".bright_blue().bold());
    println!();

    if entries.is_empty() {
        println!("{}", "  No clicks recorded yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<10}",
        "#".bright_white().bold(),
        "Reference".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(46).bright_black());

    for (rank, entry) in entries
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
    {
        println!(
            "  {:<4} {:<30} {}",
            (rank + 1).to_string().bright_black(),
            entry.reference.cyan(),
            entry.clicks.to_string().bright_white()
        );
    }

    println!();
    println!(
        "  References: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Overwrites the snapshot with an empty state after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
async fn handle_reset(repo: Arc<JsonFileSnapshotRepository>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Reset Snapshot".bright_blue().bold());
    println!();

    println!("  Snapshot: {}", repo.path().display().to_string().cyan());
    match describe_existing(&repo.load().await) {
        Existing::Clicks(total) => {
            println!("  Clicks:   {}", total.to_string().bright_white().bold())
        }
        Existing::Missing => println!("  {}", "No snapshot yet".bright_black()),
        Existing::Unreadable(reason) => println!(
            "  {}",
            format!("⚠️  Existing file is unreadable and will be replaced: {reason}").yellow()
        ),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete all counters and the event log?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.save(&AggregateState::new())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write snapshot: {}", e))?;

    println!();
    println!("{}", "✅ Snapshot reset".green().bold());
    println!();

    Ok(())
}

/// What `reset` is about to overwrite.
#[derive(Debug, PartialEq)]
enum Existing {
    Clicks(u64),
    Missing,
    Unreadable(String),
}

fn describe_existing(loaded: &Result<Option<AggregateState>, SnapshotError>) -> Existing {
    match loaded {
        Ok(Some(state)) => Existing::Clicks(state.total_clicks),
        Ok(None) => Existing::Missing,
        Err(e) => Existing::Unreadable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_loaded_snapshot() {
        let mut state = AggregateState::new();
        state.clicks.insert("promo1".to_string(), 3);
        state.total_clicks = 3;

        assert_eq!(describe_existing(&Ok(Some(state))), Existing::Clicks(3));
        assert_eq!(describe_existing(&Ok(None)), Existing::Missing);
    }

    #[test]
    fn test_describe_unreadable_snapshot() {
        let err = serde_json::from_str::<AggregateState>("{ not json").unwrap_err();

        match describe_existing(&Err(SnapshotError::from(err))) {
            Existing::Unreadable(reason) => assert!(reason.starts_with("malformed snapshot")),
            other => panic!("expected unreadable, got {other:?}"),
        }
    }
}
