use anyhow::Result;
use owo_colors::OwoColorize;
use tripplan_core::activity::parse_time;
use tripplan_core::itinerary::Trip;
use tripplan_core::{Activity, ActivityType};

use crate::dates::parse_date;
use crate::render::Render;

pub fn run(
    trip: &Trip,
    title: String,
    date: &str,
    time: Option<&str>,
    kind: Option<&str>,
    notes: Option<String>,
) -> Result<()> {
    let date = parse_date(date)?;
    let time = time.map(parse_time).transpose()?;
    let kind = kind
        .map(str::parse::<ActivityType>)
        .transpose()?
        .unwrap_or(ActivityType::Mixed);

    let mut activity = Activity::new(title, time, kind);
    if let Some(notes) = notes {
        activity.notes = notes;
    }

    let rendered = activity.render();
    trip.add_activity(date, activity)?;

    println!("{} {}", "+".green(), date.format("%A %-d %B").bold());
    println!("   {}", rendered);

    Ok(())
}
