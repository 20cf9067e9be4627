use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use tripplan_core::itinerary::Trip;
use tripplan_core::parser::{ParseReport, ParserOptions, parse_report};

use crate::render::{Render, pluralize};

pub struct ImportMode {
    pub dry_run: bool,
    pub yes: bool,
    pub json: bool,
}

pub fn run(trip: &Trip, options: &ParserOptions, file: Option<&Path>, mode: ImportMode) -> Result<()> {
    let text = read_input(file)?;
    let report = parse_report(&text, options);

    if mode.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_preview(&report);

    if report.is_empty() {
        return Ok(());
    }

    if mode.dry_run {
        println!("{}", "Dry run, nothing saved".dimmed());
        return Ok(());
    }

    if !mode.yes {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("Refusing to import without confirmation. Pass --yes when piping input.");
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Add to trip '{}'?", trip.name))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let added = trip.import(&report.bookings)?;
    println!(
        "{} Added {} {} to {}",
        "✓".green(),
        added,
        pluralize("activity", added),
        trip.name.bold()
    );

    Ok(())
}

/// Read FILE, or stdin when no file (or "-") is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("{}", "Paste your confirmations, then press Ctrl-D".dimmed());
            }
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_preview(report: &ParseReport) {
    if report.is_empty() {
        println!("{}", "Nothing found".dimmed());
    } else {
        let count = report.bookings.len();
        println!("Found {} {}:", count, pluralize("booking", count));
        for booking in &report.bookings {
            println!("   {}", booking.render());
        }
    }

    if !report.rejected.is_empty() {
        let count = report.rejected.len();
        println!();
        println!("{}", format!("Skipped {} {}:", count, pluralize("section", count)).dimmed());
        for rejection in &report.rejected {
            println!("   {}", rejection.render());
        }
    }
}
