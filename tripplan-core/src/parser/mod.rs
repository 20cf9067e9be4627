//! Booking-text importer.
//!
//! Pasted confirmation text goes through a straight pipeline:
//! split into sections, classify each section, run the extractors for its
//! type, then drop anything without a usable date. Nothing here returns an
//! error; bad input just produces fewer bookings.

mod assemble;
mod classify;
mod extract;
mod split;

pub use classify::classify;
pub use extract::{extract_booking_ref, extract_dates, extract_times, to_24_hour};
pub use split::split_sections;

use serde::Serialize;
use std::fmt;

use crate::booking::{Booking, BookingType};

/// Sections shorter than this (in characters, after trimming) are noise.
pub const DEFAULT_MIN_SECTION_LEN: usize = 10;

/// Longest excerpt kept on a rejection.
const EXCERPT_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub min_section_len: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            min_section_len: DEFAULT_MIN_SECTION_LEN,
        }
    }
}

/// Why a section did not become a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum RejectReason {
    /// No keyword rule matched.
    UnrecognizedType,
    /// Classified, but no date could be resolved.
    NoDate {
        #[serde(rename = "type")]
        kind: BookingType,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::UnrecognizedType => write!(f, "not recognized as a booking"),
            RejectReason::NoDate { kind } => write!(f, "looks like a {} booking but has no date", kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    /// Zero-based index of the section among the split sections
    pub section: usize,
    pub excerpt: String,
    #[serde(flatten)]
    pub reason: RejectReason,
}

/// Bookings found in a paste, plus the sections that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub bookings: Vec<Booking>,
    pub rejected: Vec<Rejection>,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Extract every dated booking from `text`, in input order.
pub fn parse_bookings(text: &str) -> Vec<Booking> {
    parse_report(text, &ParserOptions::default()).bookings
}

/// Like `parse_bookings`, but also reports which sections were dropped and why.
pub fn parse_report(text: &str, options: &ParserOptions) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, section) in split_sections(text, options.min_section_len)
        .iter()
        .enumerate()
    {
        match parse_section(section) {
            Ok(booking) => {
                log::debug!("Section {}: {} '{}'", index, booking.kind, booking.title);
                report.bookings.push(booking);
            }
            Err(reason) => {
                log::debug!("Section {} dropped: {}", index, reason);
                report.rejected.push(Rejection {
                    section: index,
                    excerpt: excerpt(section),
                    reason,
                });
            }
        }
    }

    report
}

/// Classify and assemble one section.
pub fn parse_section(section: &str) -> Result<Booking, RejectReason> {
    let kind = classify(section);
    let booking = assemble::assemble(kind, section).ok_or(RejectReason::UnrecognizedType)?;
    if booking.primary_date().is_none() {
        return Err(RejectReason::NoDate { kind });
    }

    Ok(booking)
}

fn excerpt(section: &str) -> String {
    let first_line = section.lines().next().unwrap_or_default().trim();
    if first_line.chars().count() > EXCERPT_CHARS {
        let cut: String = first_line.chars().take(EXCERPT_CHARS).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}
