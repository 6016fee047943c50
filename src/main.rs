// Calendar Layout
// Command line entry point: lay out an event snapshot for one calendar view

use std::path::PathBuf;

use anyhow::{Context, Result};
use calendar_layout::models::settings::Settings;
use calendar_layout::models::ui::ViewType;
use calendar_layout::services::event::queries::filter_events_by_color;
use calendar_layout::services::event::source::{EventSource, JsonSnapshotSource};
use calendar_layout::services::settings::SettingsService;
use calendar_layout::services::views::{build_view, ViewContext};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calendar-layout")]
#[command(about = "Lay out calendar events for day, week, month, year, agenda and schedule views")]
struct Cli {
    /// Settings file (defaults to settings.toml in the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the view model for a view as JSON
    Show {
        /// JSON file holding an array of events
        #[arg(short, long)]
        events: PathBuf,

        /// View to build (day, four-day, week, month, year, agenda, schedule)
        #[arg(short, long)]
        view: Option<ViewType>,

        /// Anchor date (YYYY-MM-DD), defaults to today in the configured zone
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Only include events with this color label
        #[arg(long)]
        color: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show the active settings, optionally writing the defaults first
    Settings {
        /// Write default settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path()?,
    };

    match cli.command {
        Commands::Show {
            events,
            view,
            date,
            color,
            pretty,
        } => cmd_show(&settings_service, events, view, date, color.as_deref(), pretty),
        Commands::Settings { init } => cmd_settings(&settings_service, init),
    }
}

fn cmd_show(
    settings_service: &SettingsService,
    events_path: PathBuf,
    view: Option<ViewType>,
    date: Option<NaiveDate>,
    color: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let settings = settings_service.get()?;
    let ctx = ViewContext::from_settings(&settings).context("Invalid settings")?;
    let view = match view {
        Some(view) => view,
        None => settings.view_type()?,
    };

    let now = Utc::now();
    let anchor = date.unwrap_or_else(|| now.with_timezone(&ctx.layout.timezone).date_naive());

    let source = JsonSnapshotSource::new(events_path);
    let events = filter_events_by_color(source.load()?, color);
    log::info!(
        "Laying out {} events for {} view anchored on {}",
        events.len(),
        view,
        anchor
    );

    let model = build_view(view, anchor, &events, &ctx, now);
    let json = if pretty {
        serde_json::to_string_pretty(&model)
    } else {
        serde_json::to_string(&model)
    }
    .context("Failed to serialise view")?;

    println!("{}", json);
    Ok(())
}

fn cmd_settings(settings_service: &SettingsService, init: bool) -> Result<()> {
    if init {
        settings_service.update(&Settings::default())?;
    }

    let settings = settings_service.get()?;
    println!("# {}", settings_service.path().display());
    print!(
        "{}",
        toml::to_string_pretty(&settings).context("Failed to serialise settings")?
    );
    Ok(())
}
