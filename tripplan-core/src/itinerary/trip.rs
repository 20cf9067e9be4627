//! A trip on disk: one directory, one JSON file per day plan.
//!
//! ```text
//! ~/trips/
//!   paris-2025/
//!     2025-11-15.json
//!     2025-11-16.json
//! ```
//!
//! Day files are rewritten whole on every save; the last writer wins.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::activity::Activity;
use crate::booking::Booking;
use crate::error::{TripError, TripResult};
use crate::itinerary::DayPlan;
use crate::utils::slugify;

const DAY_FILE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Trip {
    pub name: String,
    path: PathBuf,
}

/// Where an activity lives, as resolved from a full id or a unique prefix.
#[derive(Debug, Clone)]
pub struct FoundActivity {
    pub day: DayPlan,
    pub id: String,
}

impl Trip {
    /// Open (creating if needed) the trip directory `<root>/<slug of name>`.
    pub fn open(root: &Path, name: &str) -> TripResult<Self> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(TripError::InvalidInput(format!(
                "Trip name '{}' has no usable characters",
                name
            )));
        }

        let path = root.join(&slug);
        std::fs::create_dir_all(&path)?;

        Ok(Trip { name: slug, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.path
            .join(format!("{}.json", date.format(DAY_FILE_FORMAT)))
    }

    /// The plan for `date`; an empty plan if nothing is stored yet.
    pub fn day(&self, date: NaiveDate) -> TripResult<DayPlan> {
        let path = self.day_path(date);
        if !path.exists() {
            return Ok(DayPlan::new(date));
        }
        load_day(&path)
    }

    /// Write a day plan. Saving an empty plan deletes its file.
    pub fn save_day(&self, plan: &DayPlan) -> TripResult<()> {
        let path = self.day_path(plan.date);

        if plan.is_empty() {
            if path.exists() {
                std::fs::remove_file(&path)?;
                log::info!("Removed empty day {}", path.display());
            }
            return Ok(());
        }

        let content = serde_json::to_string_pretty(plan)?;
        std::fs::write(&path, content)?;
        log::info!("Saved {} activities to {}", plan.activities.len(), path.display());
        Ok(())
    }

    /// Every stored day plan, sorted by date.
    pub fn days(&self) -> TripResult<Vec<DayPlan>> {
        let mut days = Vec::new();

        for entry in std::fs::read_dir(&self.path)? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            let is_day_file = path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|s| NaiveDate::parse_from_str(s, DAY_FILE_FORMAT).is_ok());
            if !is_day_file {
                log::warn!("Skipping unexpected file {}", path.display());
                continue;
            }

            match load_day(&path) {
                Ok(day) => days.push(day),
                Err(e) => log::warn!("Skipping unreadable day {}: {}", path.display(), e),
            }
        }

        days.sort_by_key(|d| d.date);
        Ok(days)
    }

    /// Find the day holding an activity by full id or unique id prefix.
    pub fn find_activity(&self, id: &str) -> TripResult<FoundActivity> {
        if id.trim().is_empty() {
            return Err(TripError::InvalidInput("Activity id is empty".to_string()));
        }

        let mut matches: Vec<FoundActivity> = Vec::new();

        for day in self.days()? {
            let ids: Vec<String> = day
                .activities
                .iter()
                .filter(|a| a.id.starts_with(id))
                .map(|a| a.id.clone())
                .collect();

            // An exact hit beats any number of prefix hits
            if ids.iter().any(|candidate| candidate == id) {
                return Ok(FoundActivity {
                    day,
                    id: id.to_string(),
                });
            }
            for found_id in ids {
                matches.push(FoundActivity {
                    day: day.clone(),
                    id: found_id,
                });
            }
        }

        match matches.len() {
            0 => Err(TripError::ActivityNotFound(id.to_string())),
            1 => Ok(matches.remove(0)),
            n => Err(TripError::InvalidInput(format!(
                "Id prefix '{}' matches {} activities; use more characters",
                id, n
            ))),
        }
    }

    /// Add a quick-add activity to the plan for `date`.
    pub fn add_activity(&self, date: NaiveDate, activity: Activity) -> TripResult<String> {
        let mut plan = self.day(date)?;
        let id = plan.add(activity);
        self.save_day(&plan)?;
        Ok(id)
    }

    /// Merge imported bookings into their day plans.
    /// Returns the number of activities added.
    pub fn import(&self, bookings: &[Booking]) -> TripResult<usize> {
        let mut touched: BTreeMap<NaiveDate, DayPlan> = BTreeMap::new();

        for booking in bookings {
            for date in booking.activity_days() {
                if !touched.contains_key(&date) {
                    touched.insert(date, self.day(date)?);
                }
            }
        }

        let mut added = 0;
        for plan in touched.values_mut() {
            added += plan.merge_bookings(bookings);
            self.save_day(plan)?;
        }

        Ok(added)
    }
}

fn load_day(path: &Path) -> TripResult<DayPlan> {
    let content = std::fs::read_to_string(path)?;
    let mut plan: DayPlan = serde_json::from_str(&content)
        .map_err(|e| TripError::Serialization(format!("{}: {}", path.display(), e)))?;
    plan.sort();
    Ok(plan)
}
