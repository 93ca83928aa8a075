use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::todo::format_display_date;
use crate::models::{Todo, TodoId};

/// How often an item that stays overdue is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverdueMode {
    /// Every tick reports every overdue item again.
    #[default]
    Repeat,
    /// One report per item until it is completed, removed, or re-dated.
    Once,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueEvent {
    pub todo_id: TodoId,
    pub description: String,
    pub due_date: NaiveDate,
    pub formatted_due_date: String,
}

impl OverdueEvent {
    pub fn message(&self) -> String {
        format!("\"{}\" was due on {}", self.description, self.formatted_due_date)
    }
}

#[derive(Debug, Default)]
pub struct OverdueMonitor {
    mode: OverdueMode,
    /// Due date each item had when it was last reported (`Once` mode only).
    reported: HashMap<TodoId, NaiveDate>,
}

impl OverdueMonitor {
    pub fn new(mode: OverdueMode) -> Self {
        Self {
            mode,
            reported: HashMap::new(),
        }
    }

    /// Runs one tick over the whole collection.
    ///
    /// A pending todo is reported once the start of its due day lies before
    /// `now`. This is looser than the calendar-day overdue filter: an item due
    /// today is reported from midnight on. Todos are never modified.
    pub fn scan(&mut self, todos: &[Todo], now: NaiveDateTime) -> Vec<OverdueEvent> {
        let mut events = Vec::new();
        let mut still_overdue = HashMap::new();

        for todo in todos {
            if todo.completed {
                continue;
            }
            let Some(due_date) = todo.due_date else {
                continue;
            };
            if due_date.and_time(NaiveTime::MIN) >= now {
                continue;
            }

            if self.mode == OverdueMode::Once {
                still_overdue.insert(todo.id, due_date);
                if self.reported.get(&todo.id) == Some(&due_date) {
                    debug!("todo {} already reported as overdue", todo.id);
                    continue;
                }
            }

            events.push(OverdueEvent {
                todo_id: todo.id,
                description: todo.description.clone(),
                due_date,
                formatted_due_date: format_display_date(due_date),
            });
        }

        if self.mode == OverdueMode::Once {
            self.reported = still_overdue;
        }

        events
    }
}
