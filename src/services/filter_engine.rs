use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{FilterCriteria, Todo};
use crate::services::matcher;

/// Todos that passed the filter, in store order, plus how many there are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredTodos {
    pub todos: Vec<Todo>,
    pub count: usize,
}

pub struct FilterEngine;

impl FilterEngine {
    pub fn apply(todos: &[Todo], criteria: &FilterCriteria, today: NaiveDate) -> FilteredTodos {
        let todos: Vec<Todo> = todos
            .iter()
            .filter(|todo| matcher::matches(todo, criteria, today))
            .cloned()
            .collect();
        let count = todos.len();

        FilteredTodos { todos, count }
    }
}
