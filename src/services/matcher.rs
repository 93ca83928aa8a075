//! Predicates deciding whether a single todo passes the active filter.
//!
//! All functions are pure. `today` is passed in rather than read from a clock
//! so the same inputs always give the same answer.

use chrono::NaiveDate;

use crate::models::{CategoryFilter, DueDateFilter, FilterCriteria, PriorityFilter, StatusFilter, Todo};

pub fn matches(todo: &Todo, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    let text = matches_text(todo, &criteria.search_text);
    let status = matches_status(todo, criteria.status);
    let priority = matches_priority(todo, criteria.priority);
    let category = matches_category(todo, &criteria.category);
    let due = matches_due_date(todo, criteria.due.as_ref());
    let overdue = matches_overdue(todo, criteria.overdue_only, today);

    text && status && priority && category && due && overdue
}

pub fn matches_text(todo: &Todo, search_text: &str) -> bool {
    search_text.is_empty()
        || todo
            .description
            .to_lowercase()
            .contains(&search_text.to_lowercase())
}

pub fn matches_status(todo: &Todo, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Completed => todo.completed,
        StatusFilter::Pending => !todo.completed,
    }
}

pub fn matches_priority(todo: &Todo, priority: PriorityFilter) -> bool {
    match priority {
        PriorityFilter::All => true,
        PriorityFilter::Only(p) => todo.priority == p,
    }
}

pub fn matches_category(todo: &Todo, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Only(c) => todo.category.as_deref() == Some(c.as_str()),
    }
}

/// A todo without a due date never matches an active date filter.
pub fn matches_due_date(todo: &Todo, filter: Option<&DueDateFilter>) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    let Some(due) = todo.due_date else {
        return false;
    };

    match filter {
        DueDateFilter::On(day) => due == *day,
        // Calendar-day comparison makes `end` inclusive through 23:59:59.999.
        DueDateFilter::Between(start, end) => *start <= due && due <= *end,
        DueDateFilter::Unparsable(_) => false,
    }
}

pub fn matches_overdue(todo: &Todo, overdue_only: bool, today: NaiveDate) -> bool {
    !overdue_only || todo.is_overdue(today)
}
