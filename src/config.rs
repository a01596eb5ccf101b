use crate::error::{config_error, env_error, SyncResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default path of the schedule table file
pub const DEFAULT_SCHEDULE_PATH: &str = "schedule.md";

/// Default path of the cached OAuth token
pub const DEFAULT_TOKEN_PATH: &str = "config/token.json";

/// Main configuration structure for the sync tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Google Calendar ID to write events into
    pub google_calendar_id: String,
    /// Path of the schedule table file
    pub schedule_path: String,
    /// Path of the cached OAuth token JSON
    pub token_path: String,
    /// IANA timezone the schedule times are expressed in
    pub timezone: String,
}

/// Optional file-based overrides for the non-secret settings
#[derive(Debug, Default, Deserialize)]
struct FileOverrides {
    google_calendar_id: Option<String>,
    schedule_path: Option<String>,
    token_path: Option<String>,
    timezone: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> SyncResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").map_err(|_| env_error("GOOGLE_CALENDAR_ID"))?;

        // Optional environment variables with defaults
        let schedule_path =
            env::var("SCHEDULE_PATH").unwrap_or_else(|_| String::from(DEFAULT_SCHEDULE_PATH));
        let token_path =
            env::var("TOKEN_PATH").unwrap_or_else(|_| String::from(DEFAULT_TOKEN_PATH));
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));

        let mut config = Config {
            google_client_id,
            google_client_secret,
            google_calendar_id,
            schedule_path,
            token_path,
            timezone,
        };

        // Apply file overrides if the config file exists
        if let Ok(content) = fs::read_to_string("config/weeksync.toml") {
            let overrides: FileOverrides = toml::from_str(&content)?;
            if let Some(calendar_id) = overrides.google_calendar_id {
                config.google_calendar_id = calendar_id;
            }
            if let Some(path) = overrides.schedule_path {
                config.schedule_path = path;
            }
            if let Some(path) = overrides.token_path {
                config.token_path = path;
            }
            if let Some(tz) = overrides.timezone {
                config.timezone = tz;
            }
        }

        // Fail early on an unparseable timezone
        config.parse_timezone()?;

        Ok(config)
    }

    /// Parse the configured timezone into a chrono-tz value
    pub fn parse_timezone(&self) -> SyncResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.timezone)))
    }
}
