mod calendar;
mod config;
mod error;
mod notify;
mod schedule;
mod startup;
mod sync;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting weeksync");

    // Load configuration
    let config = startup::load_config()?;

    // Sync the schedule into the calendar
    startup::run_sync(config).await
}
