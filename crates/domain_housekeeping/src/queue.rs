//! Housekeeping task queue

use chrono::{DateTime, Utc};
use tracing::info;

use core_kernel::{HotelId, RoomId, TaskId};
use domain_rooms::Room;

use crate::error::HousekeepingError;
use crate::priority::priority_score;
use crate::task::{HousekeepingTask, TaskPriority, TaskType};

/// In-memory queue of housekeeping work
///
/// Completed and cancelled tasks are retained so the day's work remains
/// auditable; only open tasks participate in ordering.
#[derive(Debug, Default)]
pub struct HousekeepingQueue {
    tasks: Vec<HousekeepingTask>,
}

impl HousekeepingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the high-priority checkout-clean task for a departing room
    pub fn create_checkout_task(&mut self, room: &Room, at: DateTime<Utc>) -> &HousekeepingTask {
        let task = HousekeepingTask::new(
            room.hotel_id,
            room.id,
            TaskType::CheckoutClean,
            TaskPriority::High,
            at,
        )
        .with_notes(format!("Checkout cleaning - Room {}", room.room_number));

        info!(
            task_id = %task.id,
            room_number = %room.room_number,
            "created checkout cleaning task"
        );
        self.tasks.push(task);
        self.tasks.last().unwrap()
    }

    /// Creates an arbitrary task
    pub fn create_task(
        &mut self,
        hotel_id: HotelId,
        room_id: RoomId,
        task_type: TaskType,
        priority: TaskPriority,
        at: DateTime<Utc>,
    ) -> &HousekeepingTask {
        let task = HousekeepingTask::new(hotel_id, room_id, task_type, priority, at);
        self.tasks.push(task);
        self.tasks.last().unwrap()
    }

    pub fn get(&self, task_id: TaskId) -> Option<&HousekeepingTask> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Completes an open task and returns it
    pub fn complete(
        &mut self,
        task_id: TaskId,
        at: DateTime<Utc>,
    ) -> Result<&HousekeepingTask, HousekeepingError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| HousekeepingError::TaskNotFound(task_id.to_string()))?;

        if !task.is_open() {
            return Err(HousekeepingError::TaskNotOpen {
                id: task_id.to_string(),
                status: task.status,
            });
        }

        task.complete(at);
        info!(task_id = %task.id, room_id = %task.room_id, "housekeeping task completed");
        Ok(task)
    }

    /// Open tasks for one room
    pub fn open_for_room(&self, room_id: RoomId) -> Vec<&HousekeepingTask> {
        self.tasks
            .iter()
            .filter(|t| t.room_id == room_id && t.is_open())
            .collect()
    }

    /// Open tasks across the hotel, highest score first
    pub fn prioritized(
        &self,
        arrivals_today: &[RoomId],
        now: DateTime<Utc>,
    ) -> Vec<(&HousekeepingTask, u32)> {
        let mut scored: Vec<_> = self
            .tasks
            .iter()
            .filter(|t| t.is_open())
            .map(|t| (t, priority_score(t, arrivals_today, now)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    pub fn tasks(&self) -> &[HousekeepingTask] {
        &self.tasks
    }

    /// True when the room still has an open checkout clean
    pub fn has_open_checkout_clean(&self, room_id: RoomId) -> bool {
        self.tasks
            .iter()
            .any(|t| t.room_id == room_id && t.task_type == TaskType::CheckoutClean && t.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::RoomTypeId;

    fn room() -> Room {
        Room::new(HotelId::new(), RoomTypeId::new(), "204")
    }

    #[test]
    fn test_checkout_task_notes_carry_room_number() {
        let mut queue = HousekeepingQueue::new();
        let room = room();
        let task = queue.create_checkout_task(&room, Utc::now());
        assert_eq!(task.task_type, TaskType::CheckoutClean);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.notes.as_deref(), Some("Checkout cleaning - Room 204"));
    }

    #[test]
    fn test_complete_twice_fails() {
        let mut queue = HousekeepingQueue::new();
        let room = room();
        let task_id = queue.create_checkout_task(&room, Utc::now()).id;

        queue.complete(task_id, Utc::now()).unwrap();
        let err = queue.complete(task_id, Utc::now()).unwrap_err();
        assert!(matches!(err, HousekeepingError::TaskNotOpen { .. }));
    }

    #[test]
    fn test_open_checkout_clean_tracking() {
        let mut queue = HousekeepingQueue::new();
        let room = room();
        assert!(!queue.has_open_checkout_clean(room.id));

        let task_id = queue.create_checkout_task(&room, Utc::now()).id;
        assert!(queue.has_open_checkout_clean(room.id));

        queue.complete(task_id, Utc::now()).unwrap();
        assert!(!queue.has_open_checkout_clean(room.id));
    }
}
