//! Per-type assembly of a `Booking` from one classified section.

use crate::booking::{Booking, BookingType};

use super::extract::{
    descriptive_title, extract_booking_ref, extract_dates, extract_flight_number,
    extract_location, extract_party_size, extract_route, extract_seating, extract_tickets,
    extract_times,
};

/// Build the booking record for `section`, already classified as `kind`.
/// Unrecognized sections have no booking.
pub fn assemble(kind: BookingType, section: &str) -> Option<Booking> {
    let mut booking = match kind {
        BookingType::Hotel => hotel(section),
        BookingType::Train => train(section),
        BookingType::Flight => flight(section),
        BookingType::Restaurant => restaurant(section),
        BookingType::Activity => activity(section),
        BookingType::Other => return None,
    };
    booking.booking_ref = extract_booking_ref(section);
    Some(booking)
}

/// First two dates are check-in and check-out, in that order, whatever
/// their chronology.
fn hotel(section: &str) -> Booking {
    let location = extract_location(section);
    let title = descriptive_title(section)
        .or_else(|| location.clone())
        .unwrap_or_else(|| "Hotel stay".to_string());

    let dates = extract_dates(section);
    let mut booking = Booking::new(BookingType::Hotel, title);
    booking.check_in = dates.first().copied();
    booking.check_out = dates.get(1).copied();
    booking.time = extract_times(section).first().copied();
    booking.location = location;

    if let (Some(check_in), Some(check_out)) = (booking.check_in, booking.check_out) {
        let nights = (check_out - check_in).num_days();
        if nights > 0 {
            booking.notes = Some(format!("{} {}", nights, pluralize("night", nights)));
        }
    }

    booking
}

fn train(section: &str) -> Booking {
    let (from, to) = extract_route(section);
    let title = match (&from, &to) {
        (Some(from), Some(to)) => format!("Train {} → {}", from, to),
        (None, Some(to)) => format!("Train to {}", to),
        (Some(from), None) => format!("Train from {}", from),
        (None, None) => "Train journey".to_string(),
    };

    let mut booking = leg(BookingType::Train, title, section);
    booking.from = from;
    booking.to = to;
    booking
}

fn flight(section: &str) -> Booking {
    let (from, to) = extract_route(section);
    let mut title = match extract_flight_number(section) {
        Some(number) => format!("Flight {}", number),
        None => "Flight".to_string(),
    };
    match (&from, &to) {
        (Some(from), Some(to)) => title.push_str(&format!(" {} → {}", from, to)),
        (None, Some(to)) => title.push_str(&format!(" to {}", to)),
        _ => {}
    }

    let mut booking = leg(BookingType::Flight, title, section);
    booking.from = from;
    booking.to = to;
    booking
}

/// Shared shape of train and flight legs: first time departs, second arrives.
fn leg(kind: BookingType, title: String, section: &str) -> Booking {
    let times = extract_times(section);

    let mut booking = Booking::new(kind, title);
    booking.date = extract_dates(section).first().copied();
    booking.time = times.first().copied();
    booking.end_time = times.get(1).copied();
    booking.notes = extract_seating(section);
    booking
}

fn restaurant(section: &str) -> Booking {
    let location = extract_location(section);
    let title = descriptive_title(section)
        .or_else(|| location.clone())
        .unwrap_or_else(|| "Restaurant reservation".to_string());

    let mut booking = Booking::new(BookingType::Restaurant, title);
    booking.date = extract_dates(section).first().copied();
    booking.time = extract_times(section).first().copied();
    booking.location = location;
    booking.notes = extract_party_size(section).map(|n| format!("Table for {}", n));
    booking
}

fn activity(section: &str) -> Booking {
    let location = extract_location(section);
    let title = descriptive_title(section)
        .or_else(|| location.clone())
        .unwrap_or_else(|| "Activity".to_string());

    let mut booking = Booking::new(BookingType::Activity, title);
    booking.date = extract_dates(section).first().copied();
    booking.time = extract_times(section).first().copied();
    booking.location = location;
    booking.notes = extract_tickets(section);
    booking
}

fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
