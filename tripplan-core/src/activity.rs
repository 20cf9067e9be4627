//! Itinerary activities and the booking → activity mapping.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::booking::{Booking, BookingType};
use crate::error::TripError;

/// Sort key given to activities without a time, so they sort after every
/// timed entry of the day.
pub const UNTIMED_SORT_KEY: u32 = u32::MAX;

/// Kind tag shown next to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Travel,
    Eat,
    Nap,
    Indoor,
    Outdoor,
    Mixed,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Travel,
        ActivityType::Eat,
        ActivityType::Nap,
        ActivityType::Indoor,
        ActivityType::Outdoor,
        ActivityType::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Travel => "travel",
            ActivityType::Eat => "eat",
            ActivityType::Nap => "nap",
            ActivityType::Indoor => "indoor",
            ActivityType::Outdoor => "outdoor",
            ActivityType::Mixed => "mixed",
        }
    }

    /// Fixed booking type → activity type table.
    pub fn for_booking(kind: BookingType) -> Self {
        match kind {
            BookingType::Hotel => ActivityType::Indoor,
            BookingType::Train | BookingType::Flight => ActivityType::Travel,
            BookingType::Restaurant => ActivityType::Eat,
            BookingType::Activity => ActivityType::Outdoor,
            BookingType::Other => ActivityType::Mixed,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| {
                let valid: Vec<_> = ActivityType::ALL.iter().map(|t| t.as_str()).collect();
                TripError::InvalidInput(format!(
                    "Unknown activity type '{}'. Expected one of: {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// An entry in a day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default, with = "time_format", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_data: Option<Booking>,
}

impl Activity {
    /// Manual quick-add.
    pub fn new(title: impl Into<String>, time: Option<NaiveTime>, kind: ActivityType) -> Self {
        Activity {
            id: new_activity_id(),
            title: title.into(),
            time,
            kind,
            notes: String::new(),
            completed: false,
            created_at: Utc::now(),
            booking_data: None,
        }
    }

    /// Map a parsed booking onto the plan for `day`.
    ///
    /// Hotels get a "Check-in:" entry on their check-in day and a
    /// "Check-out:" entry on their check-out day.
    pub fn from_booking(booking: &Booking, day: NaiveDate) -> Self {
        let checking_out = booking.kind == BookingType::Hotel
            && booking.check_out == Some(day)
            && booking.check_in != Some(day);

        let (title, time) = match booking.kind {
            BookingType::Hotel if checking_out => (format!("Check-out: {}", booking.title), None),
            BookingType::Hotel => (format!("Check-in: {}", booking.title), booking.time),
            _ => (booking.title.clone(), booking.time),
        };

        Activity {
            id: new_activity_id(),
            title,
            time,
            kind: ActivityType::for_booking(booking.kind),
            notes: booking_notes(booking),
            completed: false,
            created_at: Utc::now(),
            booking_data: Some(booking.clone()),
        }
    }

    /// Seconds-from-midnight sort key; untimed activities get `UNTIMED_SORT_KEY`.
    pub fn sort_key(&self) -> u32 {
        self.time
            .map(|t| t.num_seconds_from_midnight())
            .unwrap_or(UNTIMED_SORT_KEY)
    }

    /// "HH:MM", or empty for untimed activities.
    pub fn time_label(&self) -> String {
        self.time
            .map(|t| t.format(time_format::FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

pub fn new_activity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Concatenate whatever descriptive fields a booking carries into one line.
fn booking_notes(booking: &Booking) -> String {
    let mut parts = Vec::new();

    if let Some(route) = booking.route() {
        parts.push(route);
    } else {
        if let Some(ref from) = booking.from {
            parts.push(format!("From: {}", from));
        }
        if let Some(ref to) = booking.to {
            parts.push(format!("To: {}", to));
        }
    }
    if let Some(check_in) = booking.check_in {
        parts.push(format!("Check-in: {}", check_in));
    }
    if let Some(check_out) = booking.check_out {
        parts.push(format!("Check-out: {}", check_out));
    }
    if let Some(end) = booking.end_time {
        parts.push(format!("Arrives: {}", end.format(time_format::FORMAT)));
    }
    if let Some(ref location) = booking.location {
        parts.push(location.clone());
    }
    if let Some(ref reference) = booking.booking_ref {
        parts.push(format!("Ref: {}", reference));
    }
    if let Some(ref notes) = booking.notes {
        parts.push(notes.clone());
    }

    parts.join(" | ")
}

/// Parse a user-supplied "HH:MM" time.
pub fn parse_time(s: &str) -> Result<NaiveTime, TripError> {
    NaiveTime::parse_from_str(s.trim(), time_format::FORMAT)
        .map_err(|_| TripError::InvalidInput(format!("Invalid time '{}'. Expected HH:MM", s)))
}

/// serde adapter storing `Option<NaiveTime>` as "HH:MM".
pub mod time_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hotel() -> Booking {
        let mut booking = Booking::new(BookingType::Hotel, "Grand Plaza Paris");
        booking.check_in = Some(date(2025, 11, 15));
        booking.check_out = Some(date(2025, 11, 19));
        booking.booking_ref = Some("ABC123".to_string());
        booking
    }

    #[test]
    fn type_table() {
        assert_eq!(ActivityType::for_booking(BookingType::Hotel), ActivityType::Indoor);
        assert_eq!(ActivityType::for_booking(BookingType::Train), ActivityType::Travel);
        assert_eq!(ActivityType::for_booking(BookingType::Flight), ActivityType::Travel);
        assert_eq!(ActivityType::for_booking(BookingType::Restaurant), ActivityType::Eat);
        assert_eq!(ActivityType::for_booking(BookingType::Activity), ActivityType::Outdoor);
        assert_eq!(ActivityType::for_booking(BookingType::Other), ActivityType::Mixed);
    }

    #[test]
    fn hotel_check_in_and_check_out_titles() {
        let booking = hotel();

        let arrival = Activity::from_booking(&booking, date(2025, 11, 15));
        assert_eq!(arrival.title, "Check-in: Grand Plaza Paris");
        assert_eq!(arrival.kind, ActivityType::Indoor);

        let departure = Activity::from_booking(&booking, date(2025, 11, 19));
        assert_eq!(departure.title, "Check-out: Grand Plaza Paris");
        assert_eq!(departure.time, None);
    }

    #[test]
    fn notes_concatenate_descriptive_fields() {
        let mut booking = Booking::new(BookingType::Train, "Train Paris → Lyon");
        booking.date = Some(date(2025, 6, 1));
        booking.from = Some("Paris".to_string());
        booking.to = Some("Lyon".to_string());
        booking.end_time = NaiveTime::from_hms_opt(11, 56, 0);
        booking.booking_ref = Some("QXZ123".to_string());
        booking.notes = Some("Coach 5, Seat 42".to_string());

        let activity = Activity::from_booking(&booking, date(2025, 6, 1));
        assert_eq!(
            activity.notes,
            "Paris → Lyon | Arrives: 11:56 | Ref: QXZ123 | Coach 5, Seat 42"
        );
        assert_eq!(activity.booking_data.as_ref(), Some(&booking));
        assert!(!activity.completed);
    }

    #[test]
    fn untimed_sorts_after_latest_time() {
        let late = Activity::new("Night walk", NaiveTime::from_hms_opt(23, 59, 0), ActivityType::Outdoor);
        let untimed = Activity::new("Souvenirs", None, ActivityType::Mixed);
        assert!(untimed.sort_key() > late.sort_key());
    }

    #[test]
    fn activity_type_from_str() {
        assert_eq!("EAT".parse::<ActivityType>().unwrap(), ActivityType::Eat);
        assert_eq!(" nap ".parse::<ActivityType>().unwrap(), ActivityType::Nap);
        assert!("dance".parse::<ActivityType>().is_err());
    }

    #[test]
    fn time_serializes_as_hh_mm() {
        let activity = Activity::new("Lunch", NaiveTime::from_hms_opt(9, 5, 0), ActivityType::Eat);
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["time"], "09:05");
        assert_eq!(json["type"], "eat");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());

        let back: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(back.time, NaiveTime::from_hms_opt(9, 5, 0));
    }

    #[test]
    fn missing_time_deserializes_as_untimed() {
        let json = r#"{"id":"a","title":"Beach","type":"outdoor","createdAt":"2025-06-01T08:00:00Z"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.time, None);
        assert_eq!(activity.notes, "");
        assert_eq!(activity.sort_key(), UNTIMED_SORT_KEY);
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert_eq!(parse_time("07:30").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(parse_time("7.30pm").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
