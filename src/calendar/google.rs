use super::models::{EventDateTime, EventReminders, EventResource, ReminderOverride};
use super::token::TokenManager;
use super::{CalendarSink, EventSpec};
use crate::config::Config;
use crate::error::{google_calendar_error, SyncResult};
use async_trait::async_trait;
use chrono_tz::Tz;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Weekly recurrence rule applied to every synced event
const WEEKLY_RRULE: &str = "RRULE:FREQ=WEEKLY";

/// Calendar sink backed by the Google Calendar v3 API
pub struct GoogleCalendarSink {
    calendar_id: String,
    timezone: Tz,
    token_manager: TokenManager,
    client: Client,
}

impl GoogleCalendarSink {
    pub fn new(config: &Config) -> SyncResult<Self> {
        Ok(Self {
            calendar_id: config.google_calendar_id.clone(),
            timezone: config.parse_timezone()?,
            token_manager: TokenManager::new(config),
            client: Client::new(),
        })
    }

    fn event_resource(&self, spec: &EventSpec) -> EventResource {
        let time_zone = self.timezone.name().to_string();

        let overrides = match spec.reminder_minutes {
            Some(minutes) => vec![ReminderOverride {
                method: "popup".to_string(),
                minutes,
            }],
            None => Vec::new(),
        };

        EventResource {
            summary: spec.title.clone(),
            start: EventDateTime {
                date_time: spec.interval.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
                time_zone: time_zone.clone(),
            },
            end: EventDateTime {
                date_time: spec.interval.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
                time_zone,
            },
            recurrence: vec![WEEKLY_RRULE.to_string()],
            color_id: spec.color.map(|c| c.color_id().to_string()),
            reminders: EventReminders {
                use_default: false,
                overrides,
            },
        }
    }
}

#[async_trait]
impl CalendarSink for GoogleCalendarSink {
    async fn create_weekly_event(&self, spec: &EventSpec) -> SyncResult<()> {
        let access_token = self.token_manager.access_token().await?;

        let url_str = format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            self.calendar_id
        );
        let url = Url::parse(&url_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        let body = self.event_resource(spec);
        debug!("Creating event: {}", body.summary);

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", access_token))
            .json(&body)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to create event: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to create event: HTTP {} - {}",
                status, error_body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{EventColor, ResolvedInterval};
    use chrono::NaiveDate;

    fn test_sink() -> GoogleCalendarSink {
        let config = Config {
            google_client_id: String::new(),
            google_client_secret: String::new(),
            google_calendar_id: "test_calendar_id".to_string(),
            schedule_path: "schedule.md".to_string(),
            token_path: "config/token.json".to_string(),
            timezone: "Europe/Helsinki".to_string(),
        };
        GoogleCalendarSink::new(&config).unwrap()
    }

    fn yoga_spec() -> EventSpec {
        let date = NaiveDate::from_ymd_opt(2023, 1, 7).unwrap();
        EventSpec {
            title: "Yoga".to_string(),
            interval: ResolvedInterval {
                start: date.and_hms_opt(8, 0, 0).unwrap(),
                end: date.and_hms_opt(9, 0, 0).unwrap(),
            },
            color: Some(EventColor::PaleGreen),
            reminder_minutes: Some(10),
        }
    }

    #[test]
    fn test_event_resource_body() {
        let resource = test_sink().event_resource(&yoga_spec());

        assert_eq!(resource.summary, "Yoga");
        assert_eq!(resource.start.date_time, "2023-01-07T08:00:00");
        assert_eq!(resource.end.date_time, "2023-01-07T09:00:00");
        assert_eq!(resource.start.time_zone, "Europe/Helsinki");
        assert_eq!(resource.recurrence, vec!["RRULE:FREQ=WEEKLY".to_string()]);
        assert_eq!(resource.color_id.as_deref(), Some("2"));
        assert!(!resource.reminders.use_default);
        assert_eq!(resource.reminders.overrides.len(), 1);
        assert_eq!(resource.reminders.overrides[0].method, "popup");
        assert_eq!(resource.reminders.overrides[0].minutes, 10);
    }

    #[test]
    fn test_event_resource_without_extras() {
        let spec = EventSpec {
            color: None,
            reminder_minutes: None,
            ..yoga_spec()
        };
        let resource = test_sink().event_resource(&spec);

        assert_eq!(resource.color_id, None);
        // Reminders are cleared to a known empty state, not defaulted
        assert!(!resource.reminders.use_default);
        assert!(resource.reminders.overrides.is_empty());

        let json = serde_json::to_value(&resource).unwrap();
        assert!(json.get("colorId").is_none());
        assert_eq!(json["reminders"]["useDefault"], serde_json::json!(false));
    }
}
