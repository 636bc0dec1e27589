//! Streak CLI Application
//!
//! Command-line interface for tracking fixed-length discipline challenges.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use streak_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    info!("Streak started");

    match command {
        Some(Challenge { command }) => cli.handle_challenge_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        Some(Reset(args)) => cli.reset(args).await,
        None => cli.show_active().await,
    }
}
