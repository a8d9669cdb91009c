//! Command-line argument wrappers and command handlers
//!
//! The clap structures in this module stay on the CLI side of the boundary:
//! each item subcommand converts into the core [`PlanData`] payload before it
//! reaches the store, so the core types carry no clap attributes.
//!
//! ```text
//! User Input → CLI Args (clap) → PlanData → SharedPlanStore
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::warn;
use wanderlust_core::{
    display::{OperationStatus, Plans, RemoveResult},
    models::{
        EventData, HolidayData, LongWeekendData, PlanData, PlanFilter, PlanKind,
        SelectionContext, DEFAULT_EVENT_CATEGORY,
    },
    Outcome, SharedPlanStore,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Save a public holiday
///
/// Holidays are identified by their date: a second holiday on the same date
/// is reported as already saved.
#[derive(Args)]
pub struct HolidayArgs {
    #[arg(long, help = "Date of the holiday, e.g. 2025-01-01")]
    pub date: String,
    #[arg(long, help = "English name of the holiday")]
    pub name: String,
    #[arg(long, help = "Name in the local language. Defaults to --name")]
    pub local_name: Option<String>,
    #[arg(long, help = "Country the holiday is observed in. Defaults to --country")]
    pub country_name: Option<String>,
}

impl HolidayArgs {
    fn into_data(self, context: &SelectionContext) -> HolidayData {
        HolidayData {
            local_name: self.local_name.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            date: self.date,
            country: self.country_name.unwrap_or_else(|| context.country.clone()),
        }
    }
}

/// Save an event
#[derive(Args)]
pub struct EventArgs {
    #[arg(long, help = "Title of the event, used to detect duplicates")]
    pub title: String,
    #[arg(long, help = "When the event takes place, e.g. \"Sat, Mar 1\"")]
    pub date: String,
    #[arg(long, help = "Venue or area of the event")]
    pub location: String,
    #[arg(long, default_value = DEFAULT_EVENT_CATEGORY, help = "Event category")]
    pub category: String,
}

impl From<EventArgs> for EventData {
    fn from(val: EventArgs) -> Self {
        EventData {
            title: val.title,
            date: val.date,
            location: val.location,
            category: val.category,
        }
    }
}

/// Save a long weekend
#[derive(Args)]
pub struct LongWeekendArgs {
    #[arg(long, help = "Title of the long weekend, used to detect duplicates")]
    pub title: String,
    #[arg(long, help = "Date range, e.g. \"Jan 1 - Jan 4\"")]
    pub dates: String,
    #[arg(long, help = "Length of the break, e.g. \"4 days\"")]
    pub duration: String,
}

impl From<LongWeekendArgs> for LongWeekendData {
    fn from(val: LongWeekendArgs) -> Self {
        LongWeekendData {
            title: val.title,
            dates: val.dates,
            duration: val.duration,
        }
    }
}

/// Items that can be saved or toggled.
#[derive(Subcommand)]
pub enum ItemCommands {
    /// A public holiday, keyed by date
    #[command(alias = "h")]
    Holiday(HolidayArgs),
    /// An event, keyed by title
    #[command(alias = "e")]
    Event(EventArgs),
    /// A long weekend, keyed by title
    #[command(name = "long-weekend", aliases = ["longweekend", "lw"])]
    LongWeekend(LongWeekendArgs),
}

impl ItemCommands {
    /// Convert into the core payload. Holidays fall back to the selected
    /// country when no country name is given.
    pub fn into_data(self, context: &SelectionContext) -> PlanData {
        match self {
            ItemCommands::Holiday(args) => args.into_data(context).into(),
            ItemCommands::Event(args) => EventData::from(args).into(),
            ItemCommands::LongWeekend(args) => LongWeekendData::from(args).into(),
        }
    }
}

/// List saved plans
///
/// Shows every saved plan in the order it was saved, or only one type when
/// --filter is given.
#[derive(Args)]
pub struct ListArgs {
    #[arg(
        short,
        long,
        default_value = "all",
        help = "Which plans to show (all, holiday, event, longweekend)"
    )]
    pub filter: PlanFilter,
}

/// Delete a saved plan
#[derive(Args)]
pub struct RemoveArgs {
    #[arg(help = "ID of the plan to delete")]
    pub id: u64,
}

/// Check whether an item is saved
///
/// Holidays are looked up by date, events and long weekends by title.
#[derive(Args)]
pub struct ContainsArgs {
    #[arg(help = "Type of item (holiday, event, longweekend)")]
    pub kind: PlanKind,
    #[arg(help = "Date for holidays, title for events and long weekends")]
    pub key: String,
}

/// Runs commands against a shared plan store and renders the results.
pub struct Cli {
    store: SharedPlanStore,
    renderer: TerminalRenderer,
    context: SelectionContext,
}

impl Cli {
    pub fn new(store: SharedPlanStore, renderer: TerminalRenderer, context: SelectionContext) -> Self {
        Self {
            store,
            renderer,
            context,
        }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Save { item } => self.save(item).await,
            Commands::Toggle { item } => self.toggle(item).await,
            Commands::List(args) => self.list_plans(args.filter).await,
            Commands::Counts => self.counts().await,
            Commands::Remove(args) => self.remove(args.id).await,
            Commands::Clear => self.clear().await,
            Commands::Contains(args) => self.contains(args.kind, args.key).await,
        }
    }

    async fn save(&self, item: ItemCommands) -> Result<()> {
        let data = item.into_data(&self.context);
        let outcome = self
            .store
            .add(data, self.context.clone())
            .await
            .context("Failed to save plan")?;
        let result = self.report(outcome)?;
        self.renderer.render(&result.to_string())
    }

    async fn toggle(&self, item: ItemCommands) -> Result<()> {
        let data = item.into_data(&self.context);
        let outcome = self
            .store
            .toggle(data, self.context.clone())
            .await
            .context("Failed to toggle plan")?;
        let result = self.report(outcome)?;
        self.renderer.render(&result.to_string())
    }

    pub async fn list_plans(&self, filter: PlanFilter) -> Result<()> {
        let plans = self
            .store
            .list(filter)
            .await
            .context("Failed to list plans")?;
        self.renderer
            .render(&Plans::new(plans, filter).to_string())
    }

    async fn counts(&self) -> Result<()> {
        let counts = self
            .store
            .counts()
            .await
            .context("Failed to count plans")?;
        self.renderer.render(&counts.to_string())
    }

    async fn remove(&self, id: u64) -> Result<()> {
        let outcome = self
            .store
            .remove(id)
            .await
            .context(format!("Failed to remove plan {id}"))?;
        let removed = self.report(outcome)?;
        self.renderer
            .render(&RemoveResult::new(id, removed).to_string())
    }

    async fn clear(&self) -> Result<()> {
        let outcome = self
            .store
            .clear_all()
            .await
            .context("Failed to clear plans")?;
        self.report(outcome)?;
        self.renderer
            .render(&OperationStatus::success("All plans cleared".to_string()).to_string())
    }

    async fn contains(&self, kind: PlanKind, key: String) -> Result<()> {
        let saved = self
            .store
            .contains(kind, key)
            .await
            .context("Failed to look up plan")?;
        self.renderer
            .render(if saved { "saved\n" } else { "not saved\n" })
    }

    /// Surface a persistence warning without failing the command; the change
    /// already applies for the rest of this run.
    fn report<T>(&self, outcome: Outcome<T>) -> Result<T> {
        let (value, warning) = outcome.into_parts();
        if let Some(warning) = warning {
            warn!("{warning}");
            let status = OperationStatus::warning(format!("{warning}. The change may not survive a restart"));
            self.renderer.render(&status.to_string())?;
        }
        Ok(value)
    }
}
