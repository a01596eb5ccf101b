use super::ScheduleRow;
use crate::error::SyncResult;
use std::path::Path;
use tracing::{info, warn};

/// Parse the markdown table text into schedule rows
///
/// The table carries six columns: day, title, start, end, color key,
/// reminder minutes. The first table line is the header; separator
/// lines and blank lines are skipped. Rows with an empty title are
/// dropped here so the resolver never sees them.
pub fn parse_schedule_table(text: &str) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();
    let mut header_seen = false;

    for line in text.lines() {
        let trimmed = line.trim();

        // Skip empty lines and anything outside the table
        if trimmed.is_empty() || !trimmed.starts_with('|') {
            continue;
        }

        // Split the line by | and trim each cell
        let cells: Vec<&str> = trimmed
            .trim_matches('|')
            .split('|')
            .map(|s| s.trim())
            .collect();

        // Skip separator lines (like |---|---|)
        if cells.iter().any(|cell| cell.contains("---")) {
            continue;
        }

        // The first table line is the header
        if !header_seen {
            header_seen = true;
            continue;
        }

        if cells.len() < 4 {
            warn!("Skipping malformed table row: {}", trimmed);
            continue;
        }

        let title = cells[1].to_string();
        if title.is_empty() {
            continue;
        }

        rows.push(ScheduleRow {
            day: cells[0].to_string(),
            title,
            start_time: cells[2].to_string(),
            end_time: cells[3].to_string(),
            color_key: cells.get(4).unwrap_or(&"").to_string(),
            reminder_minutes: cells.get(5).unwrap_or(&"").to_string(),
        });
    }

    info!("Parsed {} schedule rows from table", rows.len());
    rows
}

/// Read and parse the schedule table file
pub fn read_schedule_file(path: impl AsRef<Path>) -> SyncResult<Vec<ScheduleRow>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_schedule_table(&text))
}
