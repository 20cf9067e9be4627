//! TUI rendering traits for tripplan types.
//!
//! Extension traits that add colored terminal rendering to tripplan-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use tripplan_core::parser::Rejection;
use tripplan_core::{Activity, ActivityType, Booking, BookingType, DayPlan};

/// Characters of an activity id shown to the user
const SHORT_ID_LEN: usize = 8;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        match word {
            "activity" => "activities".to_string(),
            _ => format!("{}s", word),
        }
    }
}

impl Render for BookingType {
    fn render(&self) -> String {
        let label = format!("{:<10}", self.as_str());
        match self {
            BookingType::Hotel => label.magenta().to_string(),
            BookingType::Train | BookingType::Flight => label.blue().to_string(),
            BookingType::Restaurant => label.yellow().to_string(),
            BookingType::Activity => label.green().to_string(),
            BookingType::Other => label.dimmed().to_string(),
        }
    }
}

impl Render for Booking {
    fn render(&self) -> String {
        let when = match (self.kind, self.check_in, self.check_out) {
            (BookingType::Hotel, Some(check_in), Some(check_out)) => {
                format!("{} → {}", check_in, check_out)
            }
            _ => {
                let date = self
                    .primary_date()
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                match self.time {
                    Some(time) => format!("{} {}", date, time.format("%H:%M")),
                    None => date,
                }
            }
        };

        format!("{} {} {}", self.kind.render(), self.to_string().bold(), when.dimmed())
    }
}

impl Render for ActivityType {
    fn render(&self) -> String {
        let label = format!("[{}]", self.as_str());
        match self {
            ActivityType::Travel => label.blue().to_string(),
            ActivityType::Eat => label.yellow().to_string(),
            ActivityType::Nap => label.cyan().to_string(),
            ActivityType::Indoor => label.magenta().to_string(),
            ActivityType::Outdoor => label.green().to_string(),
            ActivityType::Mixed => label.dimmed().to_string(),
        }
    }
}

impl Render for Activity {
    fn render(&self) -> String {
        let time = format!("{:>5}", self.time_label());

        let (mark, title) = if self.completed {
            ("✓".green().to_string(), self.title.strikethrough().dimmed().to_string())
        } else {
            ("○".dimmed().to_string(), self.title.clone())
        };

        format!(
            "{} {} {} {} {}",
            mark,
            time.bold(),
            title,
            self.kind.render(),
            short_id(&self.id).dimmed()
        )
    }
}

impl Render for DayPlan {
    fn render(&self) -> String {
        let mut lines = vec![format!("📅 {}", self.date.format("%A %-d %B %Y")).bold().to_string()];

        for activity in &self.activities {
            lines.push(format!("   {}", activity.render()));
            if !activity.notes.is_empty() {
                lines.push(format!("           {}", activity.notes.dimmed()));
            }
        }

        lines.join("\n")
    }
}

impl Render for Rejection {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            format!("#{}", self.section + 1).dimmed(),
            format!("\"{}\"", self.excerpt).italic(),
            self.reason.to_string().dimmed()
        )
    }
}
