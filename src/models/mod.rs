pub mod filter;
pub mod notification;
pub mod todo;

pub use filter::{CategoryFilter, DueDateFilter, FilterCriteria, PriorityFilter, RawFilter, StatusFilter};
pub use notification::{NotificationKind, NotificationRecord};
pub use todo::{NewTodoRequest, Priority, Todo, TodoDraft, TodoId, TodoPatch, UpdateTodoRequest};
