//! Core of the tripplan itinerary planner.
//!
//! - `parser`: turns pasted booking confirmations into `Booking` records
//! - `activity` / `itinerary`: day plans and their on-disk storage
//! - `ics`: iCalendar export of a trip
//! - `config`: ~/.config/tripplan/config.toml

pub mod activity;
pub mod booking;
pub mod config;
pub mod error;
pub mod ics;
pub mod itinerary;
pub mod parser;
pub mod utils;

pub use activity::{Activity, ActivityType};
pub use booking::{Booking, BookingType};
pub use error::{TripError, TripResult};
pub use itinerary::{ActivityEdit, DayPlan, Trip};
pub use parser::{ParseReport, ParserOptions, parse_bookings, parse_report};
