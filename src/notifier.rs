use tokio::time::{interval, Duration};
use tracing::{debug, error, info};

/// Start the due-task check loop.
/// Ticks every `interval_secs`; the first tick fires immediately on startup.
pub async fn start_notification_task(db_path: String, interval_secs: u64) {
    info!("[notifier] Starting due-task check (every {}s)...", interval_secs);

    let mut interval = interval(Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;

        if let Err(e) = check_and_notify_tasks(&db_path) {
            error!("[notifier] Due-task check failed: {}", e);
        }
    }
}

/// Due-task sweep. Currently a stub: no rows are selected, nothing is
/// dispatched, and no `notified` flag changes.
///
/// TODO: once a mail transport exists, select tasks with
/// `due_date <= now AND notified = 0`, send each reminder, and set
/// `notified = 1` per delivered task.
pub fn check_and_notify_tasks(_db_path: &str) -> rusqlite::Result<()> {
    debug!("[notifier] Tick: notification dispatch not implemented");
    Ok(())
}
