use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tripplan_core::itinerary::Trip;

pub fn run(trip: &Trip, id: &str) -> Result<()> {
    let found = trip.find_activity(id)?;
    let mut day = found.day;

    let completed = day.toggle_completed(&found.id)?;
    trip.save_day(&day)?;

    let title = day
        .get(&found.id)
        .map(|a| a.title.clone())
        .context("Activity vanished after update")?;

    if completed {
        println!("{} {}", "✓".green(), title);
    } else {
        println!("{} {} {}", "○".dimmed(), title, "(not done)".dimmed());
    }

    Ok(())
}
