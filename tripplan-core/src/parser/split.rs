//! Splitting pasted text into candidate booking sections.

use regex::Regex;
use std::sync::LazyLock;

/// A line made only of `===` or `---` (three or more).
static RE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:={3,}|-{3,})\s*$").expect("valid delimiter regex"));

/// Split `text` on blank-line runs and delimiter lines.
///
/// Sections shorter than `min_len` characters (after trimming) are dropped
/// as noise. Order of the remaining sections follows the input.
pub fn split_sections(text: &str, min_len: usize) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() || RE_DELIMITER.is_match(line) {
            flush(&mut current, &mut sections, min_len);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut sections, min_len);

    sections
}

fn flush(current: &mut Vec<&str>, sections: &mut Vec<String>, min_len: usize) {
    if current.is_empty() {
        return;
    }

    let section = current.join("\n").trim().to_string();
    current.clear();

    if section.chars().count() >= min_len {
        sections.push(section);
    } else {
        log::debug!("Dropping short section: {:?}", section);
    }
}
