//! Wanderlust CLI Application
//!
//! Command-line interface for saving and browsing travel plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::{info, warn};
use renderer::TerminalRenderer;
use wanderlust_core::{
    display::OperationStatus,
    models::{PlanFilter, SelectionContext},
    PlanStoreBuilder,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        slot,
        country,
        city,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .with_slot(slot)
        .build_shared()
        .await
        .context("Failed to initialize plan store")?;

    let renderer = TerminalRenderer::new(!no_color);

    if let Some(issue) = store.load_issue().await? {
        warn!("Saved plans were not fully loaded: {issue}");
        renderer.render(&OperationStatus::warning(issue.to_string()).to_string())?;
    }

    info!("Wanderlust started");

    let cli = Cli::new(store, renderer, SelectionContext::new(country, city));
    match command {
        Some(command) => cli.handle_command(command).await,
        None => cli.list_plans(PlanFilter::All).await,
    }
}
