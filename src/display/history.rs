//! Points history formatting

use chrono::{DateTime, Utc};

use crate::standings::PointsHistoryEntry;

/// Short timestamp used in history listings
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %d, %H:%M").to_string()
}

/// "10 Points awarded to Gryffindor" / "5 Points deducted from Slytherin"
pub fn describe(entry: &PointsHistoryEntry) -> String {
    let direction = if entry.is_deduction {
        "deducted from"
    } else {
        "awarded to"
    };
    format!("{} Points {} {}", entry.points.unsigned_abs(), direction, entry.house)
}

/// Lines shown for a single entry
pub fn entry_lines(entry: &PointsHistoryEntry) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {}",
        describe(entry),
        format_timestamp(&entry.timestamp)
    )];

    if let Some(reason) = entry.reason.as_deref().filter(|r| !r.is_empty()) {
        lines.push(format!("  \"{}\"", reason));
    }
    lines.push(format!("  By Professor {}", entry.teacher.name));
    lines
}
