//! ICS generation for a trip's day plans.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::activity::Activity;
use crate::error::{TripError, TripResult};
use crate::itinerary::DayPlan;

/// Generate one calendar with a VEVENT per activity.
pub fn generate_ics(trip_name: &str, days: &[DayPlan]) -> TripResult<String> {
    if days.iter().all(DayPlan::is_empty) {
        return Err(TripError::IcsGenerate(format!(
            "Trip '{}' has no activities to export",
            trip_name
        )));
    }

    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", trip_name));

    for day in days {
        for activity in &day.activities {
            cal.push(activity_event(day.date, activity));
        }
    }

    let cal = cal.done();
    Ok(strip_ics_bloat(&cal.to_string()))
}

fn activity_event(date: NaiveDate, activity: &Activity) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@tripplan", activity.id));
    ics_event.summary(&activity.title);

    let dtstamp = activity.created_at.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    match activity.time {
        Some(time) => {
            let start = date.and_time(time);
            let end = timed_end(start, activity);
            ics_event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
            ics_event.add_property("DTEND", end.format("%Y%m%dT%H%M%S").to_string());
        }
        None => {
            add_date_property(&mut ics_event, "DTSTART", date);
            add_date_property(&mut ics_event, "DTEND", date + Duration::days(1));
        }
    }

    if !activity.notes.is_empty() {
        ics_event.description(&activity.notes);
    }

    if let Some(ref booking) = activity.booking_data {
        if let Some(location) = booking.location.clone().or_else(|| booking.route()) {
            ics_event.location(&location);
        }
    }

    ics_event.add_property("X-TRIPPLAN-TYPE", activity.kind.as_str());
    if activity.completed {
        ics_event.add_property("X-TRIPPLAN-COMPLETED", "TRUE");
    }

    ics_event.done()
}

/// Arrival time from the booking when there is one (next day if it is not
/// after departure), otherwise one hour.
fn timed_end(start: NaiveDateTime, activity: &Activity) -> NaiveDateTime {
    let arrival = activity.booking_data.as_ref().and_then(|b| b.end_time);

    match arrival {
        Some(end_time) if end_time > start.time() => start.date().and_time(end_time),
        Some(end_time) => (start.date() + Duration::days(1)).and_time(end_time),
        None => start + Duration::hours(1),
    }
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with TRIPPLAN
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:TRIPPLAN\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
