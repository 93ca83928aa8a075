use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::clock::Clock;
use crate::models::{NotificationKind, NotificationRecord};
use crate::services::notification_queue::{NotificationQueue, NotificationSink};

/// Shared handle over the notification queue.
///
/// Every record is shown on the sink right away and taken down again by its
/// own timer task once the display duration has passed.
#[derive(Clone)]
pub struct Notifier {
    queue: Arc<Mutex<NotificationQueue>>,
    sink: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
}

impl Notifier {
    pub fn new(queue: NotificationQueue, sink: Arc<dyn NotificationSink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(queue)),
            sink,
            clock,
        }
    }

    /// Must be called from within a tokio runtime.
    pub async fn notify(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationRecord {
        let (record, display_duration) = {
            let mut queue = self.queue.lock().await;
            let record = queue.enqueue(kind, title, message, self.clock.now());
            (record, queue.display_duration())
        };

        self.sink.display(&record);

        let queue = self.queue.clone();
        let sink = self.sink.clone();
        let id = record.id;
        tokio::spawn(async move {
            tokio::time::sleep(display_duration).await;
            if queue.lock().await.dismiss(id) {
                debug!("notification {} expired", id);
                sink.remove(id);
            }
        });

        record
    }

    /// Closes a notification early. Unknown ids are ignored.
    pub async fn dismiss(&self, id: Uuid) -> bool {
        let removed = self.queue.lock().await.dismiss(id);
        if removed {
            self.sink.remove(id);
        }
        removed
    }

    pub async fn active(&self) -> Vec<NotificationRecord> {
        self.queue.lock().await.active().to_vec()
    }
}
