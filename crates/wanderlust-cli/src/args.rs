use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wanderlust_core::{
    models::{DEFAULT_CITY, DEFAULT_COUNTRY},
    storage::DEFAULT_SLOT,
};

use crate::cli::{ContainsArgs, ItemCommands, ListArgs, RemoveArgs};

/// Save and browse travel plans
///
/// Wanderlust keeps the holidays, events and long weekends you bookmark while
/// planning a trip. Plans are deduplicated, persisted after every change and
/// can be listed by type.
#[derive(Parser)]
#[command(version, about, name = "wl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wanderlust/plans.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Storage slot the plans are kept under
    #[arg(long, global = true, default_value = DEFAULT_SLOT)]
    pub slot: String,

    /// Country code recorded with newly saved plans
    #[arg(long, global = true, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// City recorded with newly saved plans
    #[arg(long, global = true, default_value = DEFAULT_CITY)]
    pub city: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wanderlust CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Save a holiday, event or long weekend
    #[command(alias = "s")]
    Save {
        #[command(subcommand)]
        item: ItemCommands,
    },
    /// Save an item if it is not saved yet, remove it if it is
    #[command(alias = "t")]
    Toggle {
        #[command(subcommand)]
        item: ItemCommands,
    },
    /// List saved plans
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show how many plans of each type are saved
    Counts,
    /// Delete a saved plan by ID
    #[command(aliases = ["rm", "d"])]
    Remove(RemoveArgs),
    /// Delete every saved plan
    Clear,
    /// Check whether an item is saved
    Contains(ContainsArgs),
}
