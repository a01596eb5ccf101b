use serde::{Deserialize, Serialize};

/// Request body for the Google Calendar events.insert API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResource {
    pub summary: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub recurrence: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
    pub reminders: EventReminders,
}

/// Timed start or end of an event in a named timezone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

/// Reminder settings for an event
///
/// `use_default` is always false so a row without a reminder ends up
/// with a known empty state instead of inheriting calendar defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: String,
    pub minutes: i64,
}
