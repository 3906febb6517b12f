//! Integration tests for domain_housekeeping

use chrono::{Duration, Utc};

use core_kernel::{HotelId, RoomTypeId};
use domain_housekeeping::{
    priority_label, HousekeepingError, HousekeepingQueue, PriorityLabel, TaskPriority, TaskStatus,
    TaskType,
};
use domain_rooms::Room;

fn room(number: &str) -> Room {
    Room::new(HotelId::new(), RoomTypeId::new(), number)
}

#[test]
fn checkout_creates_high_priority_clean() {
    let mut queue = HousekeepingQueue::new();
    let room = room("305");

    let task = queue.create_checkout_task(&room, Utc::now());
    assert_eq!(task.task_type, TaskType::CheckoutClean);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.room_id, room.id);
    assert_eq!(task.notes.as_deref(), Some("Checkout cleaning - Room 305"));
}

#[test]
fn queue_orders_by_score_not_insertion() {
    let mut queue = HousekeepingQueue::new();
    let now = Utc::now();
    let deep = room("101");
    let arriving = room("102");
    let vip = room("103");

    queue.create_task(
        deep.hotel_id,
        deep.id,
        TaskType::DeepClean,
        TaskPriority::Low,
        now,
    );
    queue.create_task(
        arriving.hotel_id,
        arriving.id,
        TaskType::RegularClean,
        TaskPriority::Normal,
        now,
    );
    queue.create_task(
        vip.hotel_id,
        vip.id,
        TaskType::VipClean,
        TaskPriority::High,
        now,
    );

    let ranked = queue.prioritized(&[arriving.id], now);
    assert_eq!(ranked.len(), 3);
    // VIP (100) and arrival-boosted regular (60+40) tie at the cap,
    // deep clean (30) trails.
    assert_eq!(ranked[0].1, 100);
    assert_eq!(ranked[1].1, 100);
    assert_eq!(ranked[2].0.room_id, deep.id);
    assert_eq!(priority_label(ranked[2].1), PriorityLabel::Low);
}

#[test]
fn old_tasks_climb_the_queue() {
    let mut queue = HousekeepingQueue::new();
    let now = Utc::now();
    let stale = room("201");
    let fresh = room("202");

    queue.create_task(
        stale.hotel_id,
        stale.id,
        TaskType::Inspection,
        TaskPriority::Low,
        now - Duration::hours(20),
    );
    queue.create_task(
        fresh.hotel_id,
        fresh.id,
        TaskType::Inspection,
        TaskPriority::Low,
        now,
    );

    let ranked = queue.prioritized(&[], now);
    // Both are inspections; the 20-hour-old one gets the full age bonus.
    assert_eq!(ranked[0].0.room_id, stale.id);
    assert_eq!(ranked[0].1, 60);
    assert_eq!(ranked[1].1, 40);
}

#[test]
fn completing_a_task_removes_it_from_the_open_set() {
    let mut queue = HousekeepingQueue::new();
    let room = room("401");
    let task_id = queue.create_checkout_task(&room, Utc::now()).id;

    assert_eq!(queue.open_for_room(room.id).len(), 1);
    let completed = queue.complete(task_id, Utc::now()).unwrap();
    assert_eq!(completed.status, TaskStatus::Completed);
    assert!(completed.completed_at.is_some());
    assert!(queue.open_for_room(room.id).is_empty());

    // Retained for audit even after completion
    assert_eq!(queue.tasks().len(), 1);
}

#[test]
fn completing_unknown_task_is_a_named_error() {
    let mut queue = HousekeepingQueue::new();
    let err = queue
        .complete(core_kernel::TaskId::new(), Utc::now())
        .unwrap_err();
    match err {
        HousekeepingError::TaskNotFound(id) => assert!(id.starts_with("TSK-")),
        other => panic!("expected TaskNotFound, got {other:?}"),
    }
}
