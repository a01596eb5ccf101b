mod google;
pub mod models;
pub mod token;

pub use google::GoogleCalendarSink;

use crate::error::SyncResult;
use crate::schedule::{EventColor, ResolvedInterval};
use async_trait::async_trait;

/// Everything the sink needs to create one weekly-recurring event
#[derive(Debug, Clone)]
pub struct EventSpec {
    pub title: String,
    pub interval: ResolvedInterval,
    pub color: Option<EventColor>,
    pub reminder_minutes: Option<i64>,
}

/// Calendar capability the sync driver writes events through
///
/// The real implementation talks to the Google Calendar API; tests
/// substitute an in-memory recorder.
#[async_trait]
pub trait CalendarSink: Send + Sync {
    /// Create one weekly-recurring event
    async fn create_weekly_event(&self, spec: &EventSpec) -> SyncResult<()>;
}
