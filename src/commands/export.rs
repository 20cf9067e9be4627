use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tripplan_core::ics::generate_ics;
use tripplan_core::itinerary::Trip;

use crate::render::pluralize;

pub fn run(trip: &Trip, output: Option<&Path>) -> Result<()> {
    let days = trip.days()?;
    let ics = generate_ics(&trip.name, &days)?;

    match output {
        Some(path) => {
            std::fs::write(path, &ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            let count: usize = days.iter().map(|d| d.activities.len()).sum();
            println!(
                "{} Exported {} {} to {}",
                "✓".green(),
                count,
                pluralize("activity", count),
                path.display()
            );
        }
        None => print!("{}", ics),
    }

    Ok(())
}
