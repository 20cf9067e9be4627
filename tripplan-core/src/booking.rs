//! Bookings extracted from pasted confirmation text.
//!
//! A `Booking` is transient: the parser produces it, the importer turns it
//! into one or more activities, and a copy may travel along on the activity
//! as `booking_data`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::activity::time_format;

/// Category guessed for a pasted section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Hotel,
    Train,
    Flight,
    Restaurant,
    Activity,
    Other,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Hotel => "hotel",
            BookingType::Train => "train",
            BookingType::Flight => "flight",
            BookingType::Restaurant => "restaurant",
            BookingType::Activity => "activity",
            BookingType::Other => "other",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reservation recovered from a section of pasted text.
///
/// Hotels use `check_in`/`check_out`; every other type uses `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "type")]
    pub kind: BookingType,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,

    /// Departure / start / check-in time
    #[serde(default, with = "time_format", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Arrival time for train and flight legs
    #[serde(default, with = "time_format", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(kind: BookingType, title: impl Into<String>) -> Self {
        Booking {
            kind,
            title: title.into(),
            date: None,
            check_in: None,
            check_out: None,
            time: None,
            end_time: None,
            from: None,
            to: None,
            location: None,
            booking_ref: None,
            notes: None,
        }
    }

    /// The day this booking lands on: `date`, falling back to `check_in`.
    pub fn primary_date(&self) -> Option<NaiveDate> {
        self.date.or(self.check_in)
    }

    /// Days that get an activity when this booking is imported.
    ///
    /// Hotels with a distinct check-out date produce a second entry on that day.
    pub fn activity_days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.primary_date().into_iter().collect();
        if self.kind == BookingType::Hotel {
            if let Some(out) = self.check_out {
                if !days.contains(&out) {
                    days.push(out);
                }
            }
        }
        days
    }

    /// "A → B" when both ends of a leg are known.
    pub fn route(&self) -> Option<String> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some(format!("{} → {}", from, to)),
            _ => None,
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn primary_date_falls_back_to_check_in() {
        let mut booking = Booking::new(BookingType::Hotel, "Grand Plaza");
        assert_eq!(booking.primary_date(), None);

        booking.check_in = Some(date(2025, 11, 15));
        assert_eq!(booking.primary_date(), Some(date(2025, 11, 15)));

        booking.date = Some(date(2025, 11, 14));
        assert_eq!(booking.primary_date(), Some(date(2025, 11, 14)));
    }

    #[test]
    fn hotel_activity_days_include_check_out() {
        let mut booking = Booking::new(BookingType::Hotel, "Grand Plaza");
        booking.check_in = Some(date(2025, 11, 15));
        booking.check_out = Some(date(2025, 11, 19));

        assert_eq!(
            booking.activity_days(),
            vec![date(2025, 11, 15), date(2025, 11, 19)]
        );
    }

    #[test]
    fn same_day_check_out_is_not_duplicated() {
        let mut booking = Booking::new(BookingType::Hotel, "Day room");
        booking.check_in = Some(date(2025, 11, 15));
        booking.check_out = Some(date(2025, 11, 15));

        assert_eq!(booking.activity_days(), vec![date(2025, 11, 15)]);
    }

    #[test]
    fn serializes_with_camel_case_and_type_tag() {
        let mut booking = Booking::new(BookingType::Hotel, "Grand Plaza Paris");
        booking.check_in = Some(date(2025, 11, 15));
        booking.booking_ref = Some("ABC123".to_string());
        booking.time = NaiveTime::from_hms_opt(15, 0, 0);

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["type"], "hotel");
        assert_eq!(json["checkIn"], "2025-11-15");
        assert_eq!(json["bookingRef"], "ABC123");
        assert_eq!(json["time"], "15:00");
        assert!(json.get("checkOut").is_none());
    }
}
