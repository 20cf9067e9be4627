//! iCalendar export of day plans (RFC 5545).

mod generate;

pub use generate::generate_ics;
