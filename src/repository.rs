use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Priority, Todo, TodoDraft, TodoId, TodoPatch};

/// Ordered in-memory collection of todos.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after the todo holding it is deleted.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-loaded with the demonstration todos; the next id is 6.
    pub fn with_sample_data(now: NaiveDateTime) -> Self {
        let mut store = Self::new();
        for draft in sample_todos() {
            store.insert(draft, now);
        }
        store
    }

    pub fn insert(&mut self, draft: TodoDraft, now: NaiveDateTime) -> Todo {
        let id = self.next_id;
        self.next_id += 1;

        let todo = Todo {
            id,
            description: draft.description,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            completed: draft.completed,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        self.todos.push(todo.clone());
        todo
    }

    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Flips `completed`. Returns `None` when the id is unknown.
    pub fn toggle(&mut self, id: TodoId, now: NaiveDateTime) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;
        todo.updated_at = now;
        Some(todo.clone())
    }

    pub fn update(&mut self, id: TodoId, patch: TodoPatch, now: NaiveDateTime) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        patch.apply(todo);
        todo.updated_at = now;
        Some(todo.clone())
    }

    /// Removes the todo. Returns `false` when nothing was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Distinct categories, sorted, for the category filter choices.
    pub fn categories(&self) -> Vec<String> {
        self.todos
            .iter()
            .filter_map(|todo| todo.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn sample_todos() -> Vec<TodoDraft> {
    let date = |d: u32| NaiveDate::from_ymd_opt(2023, 12, d);
    let mut drafts = vec![
        TodoDraft::new("Complete project proposal")
            .priority(Priority::High)
            .category("Work")
            .notes("Send to manager for review"),
        TodoDraft::new("Buy groceries")
            .priority(Priority::Medium)
            .category("Shopping")
            .notes("Milk, eggs, bread, fruits"),
        TodoDraft::new("Schedule doctor appointment")
            .priority(Priority::Medium)
            .category("Health")
            .notes("Annual checkup")
            .completed(true),
        TodoDraft::new("Call mom")
            .priority(Priority::Low)
            .category("Personal")
            .notes("Ask about Christmas plans"),
        TodoDraft::new("Finish reading book")
            .priority(Priority::Low)
            .category("Personal")
            .notes("Only 3 chapters left"),
    ];
    for (draft, day) in drafts.iter_mut().zip([15, 10, 5, 20, 25]) {
        draft.due_date = date(day);
    }
    drafts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = TodoStore::new();
        let a = store.insert(TodoDraft::new("a"), now());
        let b = store.insert(TodoDraft::new("b"), now());

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(2), Some(&b));
    }

    #[test]
    fn test_sample_data_continues_at_six() {
        let mut store = TodoStore::with_sample_data(now());
        assert_eq!(store.len(), 5);
        assert_eq!(store.pending_count(), 4);

        let todo = store.insert(TodoDraft::new("new"), now());
        assert_eq!(todo.id, 6);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = TodoStore::with_sample_data(now());
        let original = store.find_by_id(3).unwrap().completed;

        let once = store.toggle(3, now()).expect("todo 3 exists");
        assert_eq!(once.completed, !original);

        let twice = store.toggle(3, now()).expect("todo 3 exists");
        assert_eq!(twice.completed, original);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut store = TodoStore::with_sample_data(now());
        let before = store.all().to_vec();

        assert!(store.toggle(42, now()).is_none());
        assert!(store.update(42, TodoPatch::default(), now()).is_none());
        assert!(!store.remove(42));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_deleted_id_is_never_reused() {
        let mut store = TodoStore::new();
        store.insert(TodoDraft::new("a"), now());
        let b = store.insert(TodoDraft::new("b"), now());

        assert!(store.remove(b.id));
        assert!(store.find_by_id(b.id).is_none());
        assert!(!store.remove(b.id));

        let c = store.insert(TodoDraft::new("c"), now());
        assert_eq!(c.id, 3);
        assert!(store.all().iter().all(|t| t.id != b.id));
    }

    #[test]
    fn test_update_keeps_id_and_completed() {
        let mut store = TodoStore::with_sample_data(now());
        let later = now() + chrono::Duration::hours(1);
        let patch = TodoPatch {
            description: Some("Call dad".to_string()),
            category: Some(None),
            ..Default::default()
        };

        let updated = store.update(4, patch, later).expect("todo 4 exists");
        assert_eq!(updated.id, 4);
        assert_eq!(updated.description, "Call dad");
        assert_eq!(updated.category, None);
        assert!(!updated.completed);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, now());
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let store = TodoStore::with_sample_data(now());
        assert_eq!(
            store.categories(),
            vec!["Health", "Personal", "Shopping", "Work"]
        );
    }
}
