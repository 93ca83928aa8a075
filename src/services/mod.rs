pub mod filter_engine;
pub mod matcher;
pub mod notification_queue;
pub mod notifier;
pub mod overdue_monitor;
pub mod scheduler;
pub mod todo_service;

pub use filter_engine::{FilterEngine, FilteredTodos};
pub use notification_queue::{LogSink, NotificationQueue, NotificationSink};
pub use notifier::Notifier;
pub use overdue_monitor::{OverdueEvent, OverdueMode, OverdueMonitor};
pub use scheduler::{OverdueScheduler, SchedulerHandle};
pub use todo_service::{TodoService, TodoSummary};
