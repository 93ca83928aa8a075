use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::models::{NotificationKind, NotificationRecord};

pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Presentation side of the queue: shows records and takes them down again.
pub trait NotificationSink: Send + Sync {
    fn display(&self, record: &NotificationRecord);

    fn remove(&self, _id: Uuid) {}
}

/// Sink that writes notifications to the tracing log.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn display(&self, record: &NotificationRecord) {
        match record.kind {
            NotificationKind::Error => error!("{}: {}", record.title, record.message),
            NotificationKind::Warning => warn!("{}: {}", record.title, record.message),
            NotificationKind::Success | NotificationKind::Info => {
                info!("{}: {}", record.title, record.message)
            }
        }
    }

    fn remove(&self, id: Uuid) {
        debug!("notification {} removed", id);
    }
}

/// Live notifications in insertion order.
#[derive(Debug)]
pub struct NotificationQueue {
    records: Vec<NotificationRecord>,
    display_duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_DURATION)
    }
}

impl NotificationQueue {
    pub fn new(display_duration: Duration) -> Self {
        Self {
            records: Vec::new(),
            display_duration,
        }
    }

    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    pub fn enqueue(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: NaiveDateTime,
    ) -> NotificationRecord {
        let record = NotificationRecord {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at: now,
        };
        self.records.push(record.clone());
        record
    }

    /// Removes the record. Dismissing an unknown or already removed id is a
    /// no-op that returns `false`.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn active(&self) -> &[NotificationRecord] {
        &self.records
    }
}
