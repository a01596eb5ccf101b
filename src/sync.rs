use crate::calendar::{CalendarSink, EventSpec};
use crate::error::SyncResult;
use crate::notify::Notifier;
use crate::schedule::{resolver, ScheduleRow};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Outcome of one sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Events created in the calendar
    pub created: usize,
    /// Rows skipped because of an invalid weekday or time
    pub skipped: usize,
}

/// Sync schedule rows into weekly-recurring calendar events
///
/// Rows are processed strictly in input order. A row that fails to
/// resolve is skipped with a warning and the run continues; a sink
/// failure aborts the whole run after reporting a generic failure
/// notice through the notifier.
pub async fn sync_rows(
    rows: &[ScheduleRow],
    today: NaiveDate,
    sink: &dyn CalendarSink,
    notifier: &dyn Notifier,
) -> SyncResult<SyncReport> {
    let mut report = SyncReport::default();

    for row in rows {
        if row.title.trim().is_empty() {
            continue;
        }

        let Some(date) = resolver::next_date_for_weekday(&row.day, today) else {
            warn!("Skipping '{}': unrecognized weekday '{}'", row.title, row.day);
            report.skipped += 1;
            continue;
        };

        let Some(interval) = resolver::build_interval(date, &row.start_time, &row.end_time) else {
            warn!(
                "Skipping '{}': invalid time range {}-{}",
                row.title, row.start_time, row.end_time
            );
            report.skipped += 1;
            continue;
        };

        let spec = EventSpec {
            title: row.title.clone(),
            interval,
            color: row.color(),
            reminder_minutes: row.reminder(),
        };

        if let Err(e) = sink.create_weekly_event(&spec).await {
            // Batch-fatal: surface a generic notice, keep detail in the error
            let _ = notifier.report_failure().await;
            return Err(e);
        }

        info!("Created weekly event '{}' starting {}", spec.title, spec.interval.start);
        report.created += 1;
    }

    notifier.report_success(report.created).await?;

    Ok(report)
}
