mod common;

use std::time::Duration;

use todo_board::models::NotificationKind;
use todo_board::services::{OverdueMode, OverdueScheduler};

use common::{date, harness, harness_with};

#[tokio::test(start_paused = true)]
async fn test_scheduler_ticks_at_start_and_every_interval() {
    // On 12/16, 1 (12/15) and 2 (12/10) are overdue
    let h = harness(date(2023, 12, 16));
    let scheduler = OverdueScheduler::new(h.state.todos.clone(), Duration::from_secs(60));
    let handle = scheduler.spawn();

    // Check at startup
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(h.sink.shown_of(NotificationKind::Warning).len(), 2);

    // Second check after 60s; no dedup, so the same items again
    tokio::time::sleep(Duration::from_secs(60)).await;
    let warnings = h.sink.shown_of(NotificationKind::Warning);
    assert_eq!(warnings.len(), 4);
    assert_eq!(warnings[0].title, "Overdue Todo");
    assert_eq!(
        warnings[0].message,
        "\"Complete project proposal\" was due on Dec 15, 2023"
    );
    assert_eq!(warnings[2].message, warnings[0].message);

    handle.cancel();
    tokio::time::sleep(Duration::from_secs(180)).await;
    assert_eq!(h.sink.shown_of(NotificationKind::Warning).len(), 4);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_once_mode_reports_each_item_once() {
    let h = harness_with(date(2023, 12, 16), OverdueMode::Once);
    let handle = OverdueScheduler::new(h.state.todos.clone(), Duration::from_secs(60)).spawn();

    tokio::time::sleep(Duration::from_secs(150)).await;
    assert_eq!(h.sink.shown_of(NotificationKind::Warning).len(), 2);

    handle.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_picks_up_mutations_between_ticks() {
    let h = harness(date(2023, 12, 16));
    let handle = OverdueScheduler::new(h.state.todos.clone(), Duration::from_secs(60)).spawn();

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(h.sink.shown_of(NotificationKind::Warning).len(), 2);

    // A completed item is not reported on the next check
    h.state.todos.toggle(1).await.expect("todo 1 exists");
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(h.sink.shown_of(NotificationKind::Warning).len(), 3);

    handle.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_overdue_warnings_expire_like_other_notifications() {
    let h = harness(date(2023, 12, 16));
    h.state.todos.check_overdue().await;
    assert_eq!(h.state.todos.notifier().active().await.len(), 2);

    tokio::time::sleep(Duration::from_millis(5001)).await;
    assert!(h.state.todos.notifier().active().await.is_empty());
    assert_eq!(h.sink.removed().len(), 2);
}
