use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ChallengeCommands, DayCommands, ResetArgs};

/// Tracker for fixed-length daily discipline challenges
///
/// Streak keeps one active challenge at a time. Each day lists the tasks its
/// rules require; a day can only be completed once all of them are checked,
/// and days unlock strictly in order. Running `streak` without a command shows
/// the active challenge.
#[derive(Parser)]
#[command(version, about, name = "streak")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/streak/streak.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Streak CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create and manage challenges
    #[command(alias = "c")]
    Challenge {
        #[command(subcommand)]
        command: ChallengeCommands,
    },
    /// Log progress on a single day
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Delete every challenge and photo
    Reset(ResetArgs),
}
