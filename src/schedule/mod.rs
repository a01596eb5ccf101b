pub mod color;
pub mod resolver;
pub mod table;

pub use color::EventColor;
pub use resolver::ResolvedInterval;

/// One row of the weekly schedule table
///
/// All fields arrive as display-formatted strings; parsing and
/// validation happen when the row is resolved, so a bad cell skips
/// that row instead of failing the whole table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct ScheduleRow {
    /// English weekday name, matched case-insensitively
    pub day: String,
    /// Event title
    pub title: String,
    /// Start time in HH:MM format
    pub start_time: String,
    /// End time in HH:MM format
    pub end_time: String,
    /// Color key "1"-"11", empty for the calendar default
    pub color_key: String,
    /// Reminder lead time in minutes, empty for no reminder
    pub reminder_minutes: String,
}

impl ScheduleRow {
    /// Reminder lead minutes, if set to a positive integer
    ///
    /// Zero, negative and unparseable values mean "no reminder".
    pub fn reminder(&self) -> Option<i64> {
        let minutes = self.reminder_minutes.trim().parse::<i64>().ok()?;
        if minutes > 0 {
            Some(minutes)
        } else {
            None
        }
    }

    /// Color from the fixed palette, if the key is recognized
    pub fn color(&self) -> Option<EventColor> {
        EventColor::from_key(self.color_key.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_reminder(value: &str) -> ScheduleRow {
        ScheduleRow {
            reminder_minutes: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_reminder_parsing() {
        assert_eq!(row_with_reminder("10").reminder(), Some(10));
        assert_eq!(row_with_reminder(" 45 ").reminder(), Some(45));

        // Zero, negative and garbage all mean no reminder
        assert_eq!(row_with_reminder("0").reminder(), None);
        assert_eq!(row_with_reminder("-5").reminder(), None);
        assert_eq!(row_with_reminder("soon").reminder(), None);
        assert_eq!(row_with_reminder("").reminder(), None);
    }

    #[test]
    fn test_color_lookup() {
        let row = ScheduleRow {
            color_key: "2".to_string(),
            ..Default::default()
        };
        assert_eq!(row.color(), Some(EventColor::PaleGreen));

        let row = ScheduleRow {
            color_key: "".to_string(),
            ..Default::default()
        };
        assert_eq!(row.color(), None);
    }
}
