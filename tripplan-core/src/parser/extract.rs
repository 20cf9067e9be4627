//! Field extractors shared by every booking type.
//!
//! Each extractor is a handful of regexes plus a little cleanup. Anything
//! that fails to parse (31 February, 13pm, ...) is skipped silently.

use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// =============================================================================
// Patterns
// =============================================================================

const MONTHS: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Capitalized phrase, allowing lowercase particles between words
/// ("Gare de Lyon", "Musée du Louvre").
const PLACE: &str = r"[A-Z][\p{L}'’.&-]*(?:[ \t]+(?:(?:de|du|des|la|le|of|the|am|sur|di|del)[ \t]+)?[A-Z][\p{L}'’.&-]*)*";

// -- dates --
// A trailing `T` is allowed so datetimes like 2025-11-14T08:10 keep their date
static RE_DATE_ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})(?:\b|T)").expect("valid iso date regex")
});
static RE_DATE_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/.](\d{1,2})[/.](\d{4})\b").expect("valid numeric date regex")
});
static RE_DATE_MONTH_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{MONTHS}\.?[ \t]+(\d{{1,2}})(?:st|nd|rd|th)?,?[ \t]+(\d{{4}})\b"
    ))
    .expect("valid month-first date regex")
});
static RE_DATE_DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?[ \t]+{MONTHS}\.?,?[ \t]+(\d{{4}})\b"
    ))
    .expect("valid day-first date regex")
});

// -- times --
static RE_TIME_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::([0-5]\d))?[ \t]*([ap])\.?m\b\.?").expect("valid 12h regex")
});
static RE_TIME_24H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b|T)([01]?\d|2[0-3]):([0-5]\d)\b").expect("valid 24h regex")
});

// -- booking references --
static RE_REF_CONFIRMATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:confirmation|booking|reservation|order)[ \t]*(?:(?i:number|no\.?|code|id|ref(?:erence)?)[ \t]*)?[:#][ \t]*([A-Z0-9][A-Z0-9-]{3,})\b",
    )
    .expect("valid confirmation regex")
});
static RE_REF_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:pnr|record locator|locator|reference|ref\.?)(?:[ \t]*(?i:number|no\.?|code))?(?:[ \t]*[:#][ \t]*|[ \t]+)([A-Z0-9][A-Z0-9-]{3,})\b",
    )
    .expect("valid reference regex")
});

// -- places --
static RE_LOCATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:address|location|venue|meeting point|where)[ \t]*:[ \t]*(.+?)[ \t]*$")
        .expect("valid location label regex")
});
static RE_STATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b((?:[A-Z][\p{L}'’-]*[ \t]+){0,3}(?:Station|Airport|Hbf|Hauptbahnhof|Centraal))\b",
    )
    .expect("valid station regex")
});
static RE_AFTER_PREPOSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:at|in)[ \t]+({PLACE})")).expect("valid preposition regex")
});

// -- routes --
static RE_FROM_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:from|origin|depart(?:ure|s|ing)?(?:[ \t]+(?:station|airport))?)[ \t]*:[ \t]*(.+?)[ \t]*$",
    )
    .expect("valid from label regex")
});
static RE_TO_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:to|destination|arriv(?:al|es|ing)?(?:[ \t]+(?:station|airport))?)[ \t]*:[ \t]*(.+?)[ \t]*$",
    )
    .expect("valid to label regex")
});
static RE_ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][\p{L}'’. ()-]*?)[ \t]*(?:→|->|=>|⇒|–>)[ \t]*([A-Z][\p{L}'’. ()-]*)")
        .expect("valid arrow regex")
});
static RE_FROM_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:\b(?i:from)[ \t]+)?({PLACE})[ \t]+to[ \t]+({PLACE})"))
        .expect("valid from-to regex")
});

// -- misc details --
static RE_FLIGHT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:flight)[ \t]*(?:(?i:no\.?|number|#)[ \t]*)?:?[ \t]*([A-Z]{2}|[A-Z]\d|\d[A-Z])[ \t]?(\d{1,4})\b",
    )
    .expect("valid flight number regex")
});
static RE_SEAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bseats?[ \t]*:?[ \t]*(\d{1,3}[A-Z]?)\b").expect("valid seat regex")
});
static RE_COACH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:coach|car|carriage|wagon)[ \t]*:?[ \t]*(\d{1,3})\b")
        .expect("valid coach regex")
});
static RE_GATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bgate[ \t]*:?[ \t]*([A-Z]?\d{1,3}[A-Z]?)\b").expect("valid gate regex")
});
static RE_PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:platform|track)[ \t]*:?[ \t]*(\d{1,2}[A-Z]?)\b")
        .expect("valid platform regex")
});
static RE_PARTY_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:table|party|reservation|booking)[ \t]+(?:for|of)[ \t]+(\d{1,2})|(\d{1,2})[ \t]+(?:guests?|people|persons|pax|diners|covers))\b",
    )
    .expect("valid party size regex")
});
static RE_TICKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,2}[ \t]*(?:x[ \t]*)?(?:(?:adults?|child(?:ren)?|kids?|seniors?|students?)(?:[ \t]+tickets?)?|tickets?|persons|people|participants)\b",
    )
    .expect("valid ticket count regex")
});

static RE_BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:confirm(?:ation|ed)?|booking|reservation|receipt|itinerary|e-ticket|thank(?:s| you)?|dear|hello|hi|order|invoice|summary|details|total|price|paid)\b",
    )
    .expect("valid boilerplate regex")
});

/// Leading words dropped from a route endpoint ("Eurostar London" → "London").
const ROUTE_NOISE: &[&str] = &[
    "train", "flight", "eurostar", "tgv", "sncf", "your", "booking", "ticket", "trip",
    "journey", "return", "outbound", "direct", "the",
];

/// All-digit references shorter than this are more likely amounts.
const MIN_NUMERIC_REF_DIGITS: usize = 6;

/// Longest title taken from a descriptive line.
const MAX_TITLE_CHARS: usize = 80;

// =============================================================================
// Dates and times
// =============================================================================

/// All valid calendar dates in `text`, in text order.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let mut found = Vec::new();

    collect(&RE_DATE_ISO, text, &mut found, |c| {
        ymd(num(c, 1)?, num(c, 2)?, num(c, 3)?)
    });
    collect(&RE_DATE_NUMERIC, text, &mut found, |c| {
        ymd(num(c, 3)?, num(c, 2)?, num(c, 1)?)
    });
    collect(&RE_DATE_MONTH_FIRST, text, &mut found, |c| {
        ymd(num(c, 3)?, month_number(&c[1])?, num(c, 2)?)
    });
    collect(&RE_DATE_DAY_FIRST, text, &mut found, |c| {
        ymd(num(c, 3)?, month_number(&c[2])?, num(c, 1)?)
    });

    first_come(found)
}

/// All valid times in `text`, in text order, normalized to 24-hour.
pub fn extract_times(text: &str) -> Vec<NaiveTime> {
    let mut found = Vec::new();

    // 12-hour first so "11:59 pm" wins over the bare "11:59" at the same offset
    collect(&RE_TIME_12H, text, &mut found, |c| {
        let hour: u32 = num(c, 1)?;
        let minute: u32 = c.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let pm = c[3].eq_ignore_ascii_case("p");
        to_24_hour(hour, minute, pm)
    });
    collect(&RE_TIME_24H, text, &mut found, |c| {
        NaiveTime::from_hms_opt(num(c, 1)?, num(c, 2)?, 0)
    });

    first_come(found)
}

/// Convert a 12-hour clock reading to a time of day.
///
/// `12 am` is midnight and `12 pm` is noon; hours outside 1..=12 are rejected.
pub fn to_24_hour(hour: u32, minute: u32, pm: bool) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = hour % 12 + if pm { 12 } else { 0 };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn num<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

/// Run `re` over `text`, keeping (span, value) for every match `parse` accepts.
fn collect<T>(
    re: &Regex,
    text: &str,
    found: &mut Vec<(usize, usize, T)>,
    parse: impl Fn(&Captures<'_>) -> Option<T>,
) {
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if let Some(value) = parse(&caps) {
            found.push((whole.start(), whole.end(), value));
        }
    }
}

/// Order matches by position and drop any that overlap an earlier one.
/// On equal start offsets the match collected first wins.
fn first_come<T>(mut found: Vec<(usize, usize, T)>) -> Vec<T> {
    found.sort_by_key(|(start, _, _)| *start);

    let mut taken_until = 0;
    let mut values = Vec::with_capacity(found.len());
    for (start, end, value) in found {
        if start >= taken_until {
            values.push(value);
            taken_until = end;
        }
    }
    values
}

// =============================================================================
// References, places, routes
// =============================================================================

/// Confirmation number / PNR / booking reference.
pub fn extract_booking_ref(text: &str) -> Option<String> {
    [&*RE_REF_CONFIRMATION, &*RE_REF_LABEL]
        .into_iter()
        .find_map(|re| {
            re.captures_iter(text)
                .map(|c| c[1].to_string())
                .find(|candidate| plausible_ref(candidate))
        })
}

/// Dates never count; otherwise a letter or a long run of digits is needed.
fn plausible_ref(candidate: &str) -> bool {
    if RE_DATE_ISO.is_match(candidate) {
        return false;
    }
    candidate.chars().any(|c| c.is_ascii_alphabetic())
        || candidate.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_NUMERIC_REF_DIGITS
}

/// Best guess at where a booking takes place.
///
/// Labelled lines win, then station/airport names, then a capitalized
/// phrase after "at"/"in".
pub fn extract_location(text: &str) -> Option<String> {
    RE_LOCATION_LABEL
        .captures_iter(text)
        .find_map(|c| clean_place(&c[1]))
        .or_else(|| {
            RE_STATION
                .captures(text)
                .and_then(|c| clean_place(&c[1]))
        })
        .or_else(|| {
            RE_AFTER_PREPOSITION
                .captures_iter(text)
                .find_map(|c| clean_place(&c[1]))
        })
}

/// Departure and arrival places of a train or flight leg.
pub fn extract_route(text: &str) -> (Option<String>, Option<String>) {
    let from = RE_FROM_LABEL.captures_iter(text).find_map(|c| clean_place(&c[1]));
    let to = RE_TO_LABEL.captures_iter(text).find_map(|c| clean_place(&c[1]));
    if from.is_some() || to.is_some() {
        return (from, to);
    }

    if let Some(c) = RE_ARROW.captures(text) {
        let from = clean_place(&c[1]).and_then(|p| strip_route_noise(&p));
        let to = clean_place(&c[2]);
        if from.is_some() && to.is_some() {
            return (from, to);
        }
    }

    if let Some(c) = RE_FROM_TO.captures(text) {
        return (
            clean_place(&c[1]).and_then(|p| strip_route_noise(&p)),
            clean_place(&c[2]),
        );
    }

    (None, None)
}

/// Strip dates, times and separators from a captured place; `None` when
/// nothing capitalized is left.
fn clean_place(raw: &str) -> Option<String> {
    let mut cleaned = raw.to_string();
    for re in [
        &*RE_TIME_12H,
        &*RE_TIME_24H,
        &*RE_DATE_ISO,
        &*RE_DATE_NUMERIC,
        &*RE_DATE_MONTH_FIRST,
        &*RE_DATE_DAY_FIRST,
    ] {
        cleaned = re.replace_all(&cleaned, " ").into_owned();
    }

    let mut cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    loop {
        let trimmed = cleaned
            .trim_matches(|c: char| c.is_whitespace() || ",;|-–".contains(c))
            .to_string();
        let stripped = [" at", " on", " from", " to"]
            .iter()
            .find_map(|suffix| trimmed.strip_suffix(suffix))
            .map(str::to_string);
        match stripped {
            Some(shorter) => cleaned = shorter,
            None => {
                cleaned = trimmed;
                break;
            }
        }
    }

    if cleaned.chars().any(char::is_uppercase) {
        Some(cleaned)
    } else {
        None
    }
}

fn strip_route_noise(place: &str) -> Option<String> {
    let words: Vec<&str> = place.split_whitespace().collect();
    let skip = words
        .iter()
        .take_while(|w| ROUTE_NOISE.contains(&w.to_lowercase().as_str()))
        .count();
    let rest = words[skip..].join(" ");
    if rest.is_empty() { None } else { Some(rest) }
}

// =============================================================================
// Titles and details
// =============================================================================

/// First line that reads like a name rather than a label or boilerplate.
pub fn descriptive_title(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= 3)
        .filter(|line| !line.contains(':'))
        .filter(|line| !line.starts_with(|c: char| c.is_ascii_digit()))
        .filter(|line| line.chars().any(char::is_uppercase))
        .filter(|line| !RE_BOILERPLATE.is_match(line))
        .filter(|line| extract_dates(line).is_empty() && extract_times(line).is_empty())
        .filter(|line| extract_booking_ref(line).is_none())
        .find_map(|line| {
            let title = line.trim_end_matches(|c: char| ",;.!".contains(c));
            let title: String = title.chars().take(MAX_TITLE_CHARS).collect();
            if title.is_empty() { None } else { Some(title) }
        })
}

/// Flight number such as "AF276" (spaces removed).
pub fn extract_flight_number(text: &str) -> Option<String> {
    RE_FLIGHT_NUMBER
        .captures(text)
        .map(|c| format!("{}{}", &c[1], &c[2]))
}

/// Coach / seat / platform / gate, formatted for notes.
pub fn extract_seating(text: &str) -> Option<String> {
    let parts: Vec<String> = [
        ("Coach", &*RE_COACH),
        ("Seat", &*RE_SEAT),
        ("Platform", &*RE_PLATFORM),
        ("Gate", &*RE_GATE),
    ]
    .into_iter()
    .filter_map(|(label, re)| {
        re.captures(text)
            .map(|c| format!("{} {}", label, c[1].to_uppercase()))
    })
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Number of diners on a restaurant booking.
pub fn extract_party_size(text: &str) -> Option<u32> {
    RE_PARTY_SIZE.captures(text).and_then(|c| {
        c.get(1)
            .or_else(|| c.get(2))
            .and_then(|m| m.as_str().parse().ok())
    })
}

/// Ticket counts ("2 adults, 1 child") as written in the text.
pub fn extract_tickets(text: &str) -> Option<String> {
    let counts: Vec<&str> = RE_TICKETS.find_iter(text).map(|m| m.as_str()).collect();
    if counts.is_empty() {
        None
    } else {
        Some(counts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // --- dates ---

    #[test]
    fn iso_dates_round_trip() {
        let mut day = date(2023, 12, 25);
        let last = date(2025, 3, 5);
        while day <= last {
            let text = format!("Departure on {} from platform 4", day.format("%Y-%m-%d"));
            assert_eq!(extract_dates(&text), vec![day], "text: {}", text);
            day += Duration::days(7);
        }
        // Leap day
        assert_eq!(extract_dates("Arrive 2024-02-29."), vec![date(2024, 2, 29)]);
    }

    #[test]
    fn iso_datetime_keeps_its_date() {
        assert_eq!(extract_dates("2025-11-14T15:00"), vec![date(2025, 11, 14)]);
        assert_eq!(
            extract_dates("Check-in 2025-11-14T15:00"),
            vec![date(2025, 11, 14)]
        );
        assert_eq!(
            extract_dates("Departure: 2025-11-14T08:10:00\nArrival: 2025-11-15T06:15:00"),
            vec![date(2025, 11, 14), date(2025, 11, 15)]
        );
    }

    #[test]
    fn overlapping_dates_go_to_the_earliest_match() {
        // "01/02/2025" and "2025-11-15" share the year digits
        assert_eq!(extract_dates("01/02/2025-11-15"), vec![date(2025, 2, 1)]);
    }

    #[test]
    fn first_come_drops_overlaps() {
        let found = vec![(5, 9, 'b'), (0, 6, 'a'), (9, 12, 'c'), (0, 3, 'x')];
        assert_eq!(first_come(found), vec!['a', 'c']);
    }

    #[test]
    fn all_supported_date_formats() {
        assert_eq!(extract_dates("on 15/11/2025"), vec![date(2025, 11, 15)]);
        assert_eq!(extract_dates("on 5.3.2025"), vec![date(2025, 3, 5)]);
        assert_eq!(extract_dates("November 15, 2025"), vec![date(2025, 11, 15)]);
        assert_eq!(extract_dates("Nov. 15th 2025"), vec![date(2025, 11, 15)]);
        assert_eq!(extract_dates("15 November 2025"), vec![date(2025, 11, 15)]);
        assert_eq!(extract_dates("Sat, 1st Sept 2025"), vec![date(2025, 9, 1)]);
    }

    #[test]
    fn invalid_dates_are_skipped() {
        assert!(extract_dates("2025-02-30 and 31/04/2025 and Feb 29 2025").is_empty());
        assert_eq!(
            extract_dates("2025-13-01 then 2025-06-01"),
            vec![date(2025, 6, 1)]
        );
    }

    #[test]
    fn dates_come_back_in_text_order() {
        let text = "Check-out: 19 November 2025\nCheck-in: 2025-11-15\nBooked 03/10/2025";
        assert_eq!(
            extract_dates(text),
            vec![date(2025, 11, 19), date(2025, 11, 15), date(2025, 10, 3)]
        );
    }

    // --- times ---

    #[test]
    fn twelve_hour_boundaries() {
        assert_eq!(extract_times("12:00 am"), vec![time(0, 0)]);
        assert_eq!(extract_times("12:00 pm"), vec![time(12, 0)]);
        assert_eq!(extract_times("11:59 pm"), vec![time(23, 59)]);
        assert_eq!(extract_times("at 9pm"), vec![time(21, 0)]);
        assert_eq!(extract_times("7:15 a.m."), vec![time(7, 15)]);
    }

    #[test]
    fn to_24_hour_rejects_out_of_range() {
        assert_eq!(to_24_hour(0, 30, false), None);
        assert_eq!(to_24_hour(13, 0, true), None);
        assert_eq!(to_24_hour(12, 30, false), Some(time(0, 30)));
    }

    #[test]
    fn twenty_four_hour_times() {
        assert_eq!(
            extract_times("Departs 07:42, arrives 23:05"),
            vec![time(7, 42), time(23, 5)]
        );
        assert_eq!(extract_times("2025-06-01T14:30"), vec![time(14, 30)]);
        assert!(extract_times("24:00 or 12:75").is_empty());
    }

    #[test]
    fn mixed_time_formats_keep_order() {
        assert_eq!(
            extract_times("Dep 10:30, arr 2:15 pm"),
            vec![time(10, 30), time(14, 15)]
        );
    }

    #[test]
    fn meridiem_needs_a_word_boundary() {
        assert!(extract_times("table for 2 amigos").is_empty());
    }

    // --- references ---

    #[test]
    fn booking_reference_labels() {
        assert_eq!(
            extract_booking_ref("Hotel Booking Confirmation #ABC123").as_deref(),
            Some("ABC123")
        );
        assert_eq!(
            extract_booking_ref("Confirmation number: 9912-XZ").as_deref(),
            Some("9912-XZ")
        );
        assert_eq!(
            extract_booking_ref("Booking reference: QXZ123").as_deref(),
            Some("QXZ123")
        );
        assert_eq!(extract_booking_ref("PNR XKCDQ2").as_deref(), Some("XKCDQ2"));
        assert_eq!(extract_booking_ref("Ref. 7HG2K9").as_deref(), Some("7HG2K9"));
    }

    #[test]
    fn no_reference_in_plain_text() {
        assert_eq!(extract_booking_ref("Please keep this for your reference"), None);
        assert_eq!(extract_booking_ref("Booking Confirmation"), None);
    }

    #[test]
    fn dates_and_amounts_are_not_references() {
        assert_eq!(
            extract_booking_ref("Restaurant Le Comptoir\nReservation: 2025-11-15 at 19:30\nTable for 4"),
            None
        );
        assert_eq!(
            extract_booking_ref("Booking: 1200 EUR paid\nMuseum tickets 2025-11-16"),
            None
        );
        assert_eq!(
            extract_booking_ref("Reservation: 2025-11-15\nConfirmation #884213").as_deref(),
            Some("884213")
        );
    }

    // --- places ---

    #[test]
    fn location_from_label() {
        assert_eq!(
            extract_location("Grand Plaza\nAddress: 12 Rue de Rivoli, Paris").as_deref(),
            Some("12 Rue de Rivoli, Paris")
        );
    }

    #[test]
    fn location_from_station_name() {
        assert_eq!(
            extract_location("Meet us outside Zurich Airport on arrival").as_deref(),
            Some("Zurich Airport")
        );
    }

    #[test]
    fn location_after_preposition() {
        assert_eq!(
            extract_location("Dinner at Chez Janou\nTable for 4").as_deref(),
            Some("Chez Janou")
        );
        assert_eq!(
            extract_location("Guided tour in Musée du Louvre tomorrow").as_deref(),
            Some("Musée du Louvre")
        );
        assert_eq!(extract_location("see you at 7pm"), None);
    }

    #[test]
    fn route_from_labels() {
        let text = "From: Paris Gare de Lyon 07:42\nTo: Lyon Part-Dieu 09:38";
        assert_eq!(
            extract_route(text),
            (
                Some("Paris Gare de Lyon".to_string()),
                Some("Lyon Part-Dieu".to_string())
            )
        );
    }

    #[test]
    fn route_from_arrow() {
        assert_eq!(
            extract_route("TGV 6607\nParis (CDG) -> Lyon Part-Dieu"),
            (Some("Paris (CDG)".to_string()), Some("Lyon Part-Dieu".to_string()))
        );
        assert_eq!(
            extract_route("Eurostar London → Brussels"),
            (Some("London".to_string()), Some("Brussels".to_string()))
        );
    }

    #[test]
    fn route_from_prose() {
        assert_eq!(
            extract_route("Your train from Rome to Florence leaves at 9am"),
            (Some("Rome".to_string()), Some("Florence".to_string()))
        );
        assert_eq!(
            extract_route("Flight AF276 Paris to Tokyo"),
            (Some("Paris".to_string()), Some("Tokyo".to_string()))
        );
    }

    #[test]
    fn no_route() {
        assert_eq!(extract_route("Dinner for two"), (None, None));
    }

    // --- titles and details ---

    #[test]
    fn descriptive_title_skips_boilerplate_and_labels() {
        let text = "Hotel Booking Confirmation #ABC123\nGrand Plaza Paris\nCheck-in: 15 November 2025";
        assert_eq!(descriptive_title(text).as_deref(), Some("Grand Plaza Paris"));
    }

    #[test]
    fn descriptive_title_none_when_only_labels() {
        assert_eq!(descriptive_title("Date: 2025-06-01\nTime: 19:30"), None);
    }

    #[test]
    fn flight_number_and_seating() {
        assert_eq!(
            extract_flight_number("Flight AF 276 to Tokyo").as_deref(),
            Some("AF276")
        );
        assert_eq!(
            extract_seating("Coach 5, seat 42a, platform 11").as_deref(),
            Some("Coach 5, Seat 42A, Platform 11")
        );
        assert_eq!(extract_seating("Gate B22").as_deref(), Some("Gate B22"));
        assert_eq!(extract_seating("nothing here"), None);
    }

    #[test]
    fn party_size_and_tickets() {
        assert_eq!(extract_party_size("Table for 4 at 19:30"), Some(4));
        assert_eq!(extract_party_size("6 guests"), Some(6));
        assert_eq!(extract_party_size("See you soon"), None);
        assert_eq!(
            extract_tickets("2 adults, 1 child").as_deref(),
            Some("2 adults, 1 child")
        );
        assert_eq!(
            extract_tickets("Admission: 3 x tickets").as_deref(),
            Some("3 x tickets")
        );
    }
}
