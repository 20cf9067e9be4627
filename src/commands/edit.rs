use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tripplan_core::activity::parse_time;
use tripplan_core::itinerary::Trip;
use tripplan_core::{ActivityEdit, ActivityType};

use crate::render::Render;

pub struct EditArgs {
    pub title: Option<String>,
    pub time: Option<String>,
    pub untimed: bool,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

impl EditArgs {
    fn into_edit(self) -> Result<ActivityEdit> {
        let time = if self.untimed {
            Some(None)
        } else {
            self.time.as_deref().map(parse_time).transpose()?.map(Some)
        };

        Ok(ActivityEdit {
            title: self.title,
            time,
            kind: self
                .kind
                .as_deref()
                .map(str::parse::<ActivityType>)
                .transpose()?,
            notes: self.notes,
        })
    }
}

pub fn run(trip: &Trip, id: &str, args: EditArgs) -> Result<()> {
    let edit = args.into_edit()?;
    if edit.is_empty() {
        anyhow::bail!("Nothing to change. Pass --title, --time, --untimed, --type or --notes.");
    }

    let found = trip.find_activity(id)?;
    let mut day = found.day;

    day.edit(&found.id, edit)?;
    trip.save_day(&day)?;

    let activity = day
        .get(&found.id)
        .context("Activity vanished after update")?;
    println!("{} {}", "~".yellow(), day.date.format("%A %-d %B").bold());
    println!("   {}", activity.render());

    Ok(())
}
