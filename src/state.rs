use std::sync::Arc;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::repository::TodoStore;
use crate::services::{NotificationQueue, NotificationSink, Notifier, OverdueMonitor, TodoService};

#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
}

impl AppState {
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>, sink: Arc<dyn NotificationSink>) -> Self {
        let store = if config.seed_sample_todos {
            TodoStore::with_sample_data(clock.now())
        } else {
            TodoStore::new()
        };
        let notifier = Notifier::new(
            NotificationQueue::new(config.notification_display),
            sink,
            clock.clone(),
        );
        let todos = TodoService::new(store, OverdueMonitor::new(config.overdue_mode), notifier, clock);

        Self { todos }
    }
}
