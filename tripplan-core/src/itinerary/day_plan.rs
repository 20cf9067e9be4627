//! One day of the trip: an ordered list of activities.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityType, new_activity_id};
use crate::booking::Booking;
use crate::error::{TripError, TripResult};

/// Changes applied by `DayPlan::edit`. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ActivityEdit {
    pub title: Option<String>,
    /// `Some(None)` clears the time
    pub time: Option<Option<NaiveTime>>,
    pub kind: Option<ActivityType>,
    pub notes: Option<String>,
}

impl ActivityEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.time.is_none() && self.kind.is_none() && self.notes.is_none()
    }
}

/// Activities for one calendar date, kept sorted by time with untimed
/// entries last. Ids are unique within the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl DayPlan {
    pub fn new(date: NaiveDate) -> Self {
        DayPlan {
            date,
            activities: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Insert an activity and return its id (regenerated if it collided).
    pub fn add(&mut self, mut activity: Activity) -> String {
        while self.get(&activity.id).is_some() {
            log::debug!("Activity id {} already used on {}, regenerating", activity.id, self.date);
            activity.id = new_activity_id();
        }

        let id = activity.id.clone();
        self.activities.push(activity);
        self.sort();
        id
    }

    /// Stable sort by time; untimed activities go last in insertion order.
    pub fn sort(&mut self) {
        self.activities.sort_by_key(Activity::sort_key);
    }

    /// Flip the completed flag, returning the new value.
    pub fn toggle_completed(&mut self, id: &str) -> TripResult<bool> {
        let activity = self.get_mut(id)?;
        activity.completed = !activity.completed;
        Ok(activity.completed)
    }

    pub fn edit(&mut self, id: &str, edit: ActivityEdit) -> TripResult<()> {
        let activity = self.get_mut(id)?;

        if let Some(title) = edit.title {
            activity.title = title;
        }
        if let Some(time) = edit.time {
            activity.time = time;
        }
        if let Some(kind) = edit.kind {
            activity.kind = kind;
        }
        if let Some(notes) = edit.notes {
            activity.notes = notes;
        }

        self.sort();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> TripResult<Activity> {
        let index = self
            .activities
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| TripError::ActivityNotFound(id.to_string()))?;
        Ok(self.activities.remove(index))
    }

    /// Add an activity for every booking that lands on this day.
    /// Returns how many were added.
    pub fn merge_bookings(&mut self, bookings: &[Booking]) -> usize {
        let mut added = 0;
        for booking in bookings {
            if booking.activity_days().contains(&self.date) {
                self.add(Activity::from_booking(booking, self.date));
                added += 1;
            }
        }
        added
    }

    fn get_mut(&mut self, id: &str) -> TripResult<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| TripError::ActivityNotFound(id.to_string()))
    }
}
