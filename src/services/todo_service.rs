use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::AppError;
use crate::models::{
    FilterCriteria, NewTodoRequest, NotificationKind, Todo, TodoDraft, TodoId, TodoPatch,
    UpdateTodoRequest,
};
use crate::repository::TodoStore;
use crate::services::filter_engine::{FilterEngine, FilteredTodos};
use crate::services::notifier::Notifier;
use crate::services::overdue_monitor::{OverdueEvent, OverdueMonitor};

#[derive(Debug, Clone, Serialize)]
pub struct TodoSummary {
    pub pending_count: usize,
    pub total: usize,
    pub overdue: Vec<Todo>,
    pub categories: Vec<String>,
}

/// Entry point for every operation on the todo list.
///
/// Each call holds the store lock for its whole duration, so a mutation and
/// an overdue scan never interleave.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<Mutex<TodoStore>>,
    monitor: Arc<Mutex<OverdueMonitor>>,
    notifier: Notifier,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    pub fn new(
        store: TodoStore,
        monitor: OverdueMonitor,
        notifier: Notifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            monitor: Arc::new(Mutex::new(monitor)),
            notifier,
            clock,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Validates and appends a todo. On a validation failure an error
    /// notification is shown and the store is left untouched.
    pub async fn add(&self, req: NewTodoRequest) -> Result<Todo, AppError> {
        let draft = self.validated(TodoDraft::try_from(req)).await?;

        let todo = self.store.lock().await.insert(draft, self.clock.now());
        info!("added todo {}", todo.id);
        self.notifier
            .notify(NotificationKind::Success, "Success", "Todo added successfully!")
            .await;
        Ok(todo)
    }

    async fn validated<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(e) = &result {
            let message = match e {
                AppError::Validation(msg) => msg.clone(),
                other => other.to_string(),
            };
            self.notifier
                .notify(NotificationKind::Error, "Validation Error", message)
                .await;
        }
        result
    }

    /// Flips the completion state. Unknown ids are a silent no-op.
    pub async fn toggle(&self, id: TodoId) -> Option<Todo> {
        let toggled = self.store.lock().await.toggle(id, self.clock.now());
        let Some(todo) = toggled else {
            debug!("toggle ignored, todo {} not found", id);
            return None;
        };

        let state = if todo.completed { "completed" } else { "pending" };
        self.notifier
            .notify(
                NotificationKind::Success,
                "Status Updated",
                format!("Todo marked as {}", state),
            )
            .await;
        Some(todo)
    }

    /// Edits descriptive fields. `completed` is only changed by [`toggle`](Self::toggle).
    /// An invalid edit shows an error notification and changes nothing.
    pub async fn update(&self, id: TodoId, req: UpdateTodoRequest) -> Result<Option<Todo>, AppError> {
        let patch = self.validated(TodoPatch::try_from(req)).await?;
        let updated = self.store.lock().await.update(id, patch, self.clock.now());
        if updated.is_none() {
            debug!("update ignored, todo {} not found", id);
        }
        Ok(updated)
    }

    /// Removes a todo for good. Unknown ids are a silent no-op.
    pub async fn delete(&self, id: TodoId) -> bool {
        let removed = self.store.lock().await.remove(id);
        if removed {
            info!("deleted todo {}", id);
            self.notifier
                .notify(NotificationKind::Success, "Deleted", "Todo deleted successfully!")
                .await;
        } else {
            debug!("delete ignored, todo {} not found", id);
        }
        removed
    }

    pub async fn get(&self, id: TodoId) -> Option<Todo> {
        self.store.lock().await.find_by_id(id).cloned()
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.store.lock().await.all().to_vec()
    }

    pub async fn filter(&self, criteria: &FilterCriteria) -> FilteredTodos {
        let store = self.store.lock().await;
        FilterEngine::apply(store.all(), criteria, self.clock.today())
    }

    pub async fn summary(&self) -> TodoSummary {
        let store = self.store.lock().await;
        let today = self.clock.today();
        TodoSummary {
            pending_count: store.pending_count(),
            total: store.len(),
            overdue: store
                .all()
                .iter()
                .filter(|todo| todo.is_overdue(today))
                .cloned()
                .collect(),
            categories: store.categories(),
        }
    }

    /// One overdue tick: scans the store and raises a warning per event.
    pub async fn check_overdue(&self) -> Vec<OverdueEvent> {
        let events = {
            let store = self.store.lock().await;
            let mut monitor = self.monitor.lock().await;
            monitor.scan(store.all(), self.clock.now())
        };

        for event in &events {
            self.notifier
                .notify(NotificationKind::Warning, "Overdue Todo", event.message())
                .await;
        }
        events
    }
}
