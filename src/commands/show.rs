use anyhow::Result;
use owo_colors::OwoColorize;
use tripplan_core::itinerary::Trip;

use crate::dates::parse_date;
use crate::render::Render;

pub fn run(trip: &Trip, date: Option<&str>) -> Result<()> {
    if let Some(date) = date {
        let date = parse_date(date)?;
        let plan = trip.day(date)?;

        if plan.is_empty() {
            println!("{}", format!("Nothing planned for {}", date).dimmed());
        } else {
            println!("{}", plan.render());
        }
        return Ok(());
    }

    let days = trip.days()?;
    if days.is_empty() {
        println!(
            "{}",
            format!("Nothing planned yet for {}", trip.name).dimmed()
        );
        println!(
            "{}",
            "Add something with `tripplan add` or `tripplan import`".dimmed()
        );
        return Ok(());
    }

    for (i, day) in days.iter().enumerate() {
        println!("{}", day.render());

        // Add spacing between days (but not after the last one)
        if i < days.len() - 1 {
            println!();
        }
    }

    Ok(())
}
