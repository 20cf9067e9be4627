use anyhow::Result;
use owo_colors::OwoColorize;
use tripplan_core::itinerary::Trip;

pub fn run(trip: &Trip, id: &str) -> Result<()> {
    let found = trip.find_activity(id)?;
    let mut day = found.day;

    let removed = day.remove(&found.id)?;
    trip.save_day(&day)?;

    println!(
        "{} {} {}",
        "-".red(),
        removed.title.red(),
        format!("({})", day.date).dimmed()
    );

    Ok(())
}
