use crate::calendar::GoogleCalendarSink;
use crate::config::Config;
use crate::error::Error;
use crate::notify::TerminalNotifier;
use crate::schedule::table;
use crate::sync::sync_rows;
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Read the schedule table and sync it into the calendar
pub async fn run_sync(config: Config) -> miette::Result<()> {
    let rows = table::read_schedule_file(&config.schedule_path).map_err(|e| {
        error!("Failed to read schedule from {}: {:?}", config.schedule_path, e);
        e
    })?;

    let timezone = config.parse_timezone()?;
    let today = Utc::now().with_timezone(&timezone).date_naive();

    let sink = GoogleCalendarSink::new(&config)?;
    let notifier = TerminalNotifier;

    let report = sync_rows(&rows, today, &sink, &notifier).await?;
    info!(
        "Sync finished: {} events created, {} rows skipped",
        report.created, report.skipped
    );

    Ok(())
}
