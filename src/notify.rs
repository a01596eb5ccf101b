use crate::error::SyncResult;
use async_trait::async_trait;

/// User-facing reporting capability for the end of a sync run
///
/// Mirrors the alert the schedule owners see: a final count on
/// success, a single generic notice on batch failure. Diagnostic
/// detail goes to the logs, not through here.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn report_success(&self, created: usize) -> SyncResult<()>;
    async fn report_failure(&self) -> SyncResult<()>;
}

/// Notifier that reports to the terminal
pub struct TerminalNotifier;

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn report_success(&self, created: usize) -> SyncResult<()> {
        println!("{} events created", created);
        Ok(())
    }

    async fn report_failure(&self) -> SyncResult<()> {
        println!("An error occurred while creating events.");
        Ok(())
    }
}
