mod commands;
mod dates;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tripplan_core::config::TripplanConfig;

#[derive(Parser)]
#[command(name = "tripplan")]
#[command(about = "Plan a family trip day by day and import booking confirmations")]
struct Cli {
    /// Trip to work on (defaults to `default_trip` in the config)
    #[arg(short, long, global = true)]
    trip: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import pasted booking confirmations (from FILE, or stdin)
    Import {
        file: Option<PathBuf>,

        /// Show what would be imported without saving
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Print the parse report as JSON and exit
        #[arg(long)]
        json: bool,
    },
    /// Add an activity by hand
    Add {
        title: String,

        /// Day of the activity (e.g. "2025-11-15", "tomorrow", "sat")
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// travel, eat, nap, indoor, outdoor or mixed
        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show the plan for one day, or the whole trip
    Show {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Toggle an activity's completed flag
    Done {
        /// Activity id (a unique prefix is enough)
        id: String,
    },
    /// Change an activity
    Edit {
        /// Activity id (a unique prefix is enough)
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New start time (HH:MM)
        #[arg(long, conflicts_with = "untimed")]
        time: Option<String>,

        /// Clear the start time
        #[arg(long)]
        untimed: bool,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an activity
    Remove {
        /// Activity id (a unique prefix is enough)
        id: String,
    },
    /// Export the trip as an .ics calendar
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = TripplanConfig::load()?;
    let trip = config.open_trip(cli.trip.as_deref())?;
    log::debug!("Using trip {} at {}", trip.name, trip.path().display());

    match cli.command {
        Commands::Import {
            file,
            dry_run,
            yes,
            json,
        } => commands::import::run(
            &trip,
            &config.parser_options(),
            file.as_deref(),
            commands::import::ImportMode { dry_run, yes, json },
        ),
        Commands::Add {
            title,
            date,
            time,
            kind,
            notes,
        } => commands::add::run(&trip, title, &date, time.as_deref(), kind.as_deref(), notes),
        Commands::Show { date } => commands::show::run(&trip, date.as_deref()),
        Commands::Done { id } => commands::done::run(&trip, &id),
        Commands::Edit {
            id,
            title,
            time,
            untimed,
            kind,
            notes,
        } => commands::edit::run(
            &trip,
            &id,
            commands::edit::EditArgs {
                title,
                time,
                untimed,
                kind,
                notes,
            },
        ),
        Commands::Remove { id } => commands::remove::run(&trip, &id),
        Commands::Export { output } => commands::export::run(&trip, output.as_deref()),
    }
}
