#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use todo_board::clock::FixedClock;
use todo_board::config::AppConfig;
use todo_board::models::{NotificationKind, NotificationRecord};
use todo_board::services::{NotificationSink, OverdueMode};
use todo_board::state::AppState;
use uuid::Uuid;

/// Sink that records everything it is asked to show.
#[derive(Default)]
pub struct RecordingSink {
    shown: Mutex<Vec<NotificationRecord>>,
    removed: Mutex<Vec<Uuid>>,
}

impl RecordingSink {
    pub fn shown(&self) -> Vec<NotificationRecord> {
        self.shown.lock().unwrap().clone()
    }

    pub fn shown_of(&self, kind: NotificationKind) -> Vec<NotificationRecord> {
        self.shown().into_iter().filter(|r| r.kind == kind).collect()
    }

    pub fn removed(&self) -> Vec<Uuid> {
        self.removed.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn display(&self, record: &NotificationRecord) {
        self.shown.lock().unwrap().push(record.clone());
    }

    fn remove(&self, id: Uuid) {
        self.removed.lock().unwrap().push(id);
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct Harness {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub sink: Arc<RecordingSink>,
}

/// Sample todos loaded, clock pinned to midnight of `today`.
pub fn harness(today: NaiveDate) -> Harness {
    harness_with(today, OverdueMode::Repeat)
}

pub fn harness_with(today: NaiveDate, mode: OverdueMode) -> Harness {
    let config = AppConfig {
        overdue_mode: mode,
        notification_display: Duration::from_millis(5000),
        ..AppConfig::default()
    };
    let clock = Arc::new(FixedClock::at_date(today));
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new(&config, clock.clone(), sink.clone());

    Harness { state, clock, sink }
}
