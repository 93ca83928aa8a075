use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::services::todo_service::TodoService;

pub const DEFAULT_OVERDUE_INTERVAL: Duration = Duration::from_secs(60);

/// Overdue check scheduler.
/// Runs once right away, then on a fixed interval.
pub struct OverdueScheduler {
    service: TodoService,
    interval: Duration,
}

/// Handle to a running scheduler. Dropping it leaves the task running.
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl OverdueScheduler {
    pub fn new(service: TodoService, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Runs the check forever at the configured interval.
    pub async fn start(self) {
        info!("Starting overdue scheduler (interval: {:?})", self.interval);

        loop {
            let events = self.service.check_overdue().await;
            if events.is_empty() {
                tracing::debug!("Overdue check completed - nothing overdue");
            } else {
                info!("Overdue check completed - {} overdue todos", events.len());
            }

            tokio::time::sleep(self.interval).await;
        }
    }

    pub fn spawn(self) -> SchedulerHandle {
        SchedulerHandle {
            task: tokio::spawn(self.start()),
        }
    }
}
