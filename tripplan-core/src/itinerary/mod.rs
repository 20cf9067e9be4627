//! Day plans and their storage.

mod day_plan;
mod trip;

pub use day_plan::{ActivityEdit, DayPlan};
pub use trip::{FoundActivity, Trip};
