//! Housekeeping task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{HotelId, RoomId, TaskId};

/// Kind of housekeeping work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// Full clean after a guest departs
    CheckoutClean,
    /// Stayover clean while the guest is out
    RegularClean,
    /// Periodic deep clean
    DeepClean,
    /// Supervisor inspection
    Inspection,
    /// Priority clean for a VIP arrival
    VipClean,
}

/// Assigned urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Normal,
    Low,
}

/// Task lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// A unit of housekeeping work tied to one room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousekeepingTask {
    /// Unique identifier
    pub id: TaskId,
    /// Owning hotel
    pub hotel_id: HotelId,
    /// Room the work applies to
    pub room_id: RoomId,
    /// Kind of work
    pub task_type: TaskType,
    /// Assigned urgency
    pub priority: TaskPriority,
    /// Lifecycle state
    pub status: TaskStatus,
    /// Free-form note, e.g. "Checkout cleaning - Room 204"
    pub notes: Option<String>,
    /// Staff member the task is assigned to
    pub assigned_to: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp
    pub completed_at: Option<DateTime<Utc>>,
}

impl HousekeepingTask {
    /// Creates a pending task
    pub fn new(
        hotel_id: HotelId,
        room_id: RoomId,
        task_type: TaskType,
        priority: TaskPriority,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId::new_v7(),
            hotel_id,
            room_id,
            task_type,
            priority,
            status: TaskStatus::Pending,
            notes: None,
            assigned_to: None,
            created_at: at,
            completed_at: None,
        }
    }

    /// Attaches a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Assigns the task to a staff member
    pub fn assign_to(&mut self, staff: impl Into<String>) {
        self.assigned_to = Some(staff.into());
        self.status = TaskStatus::InProgress;
    }

    /// Marks the task completed
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(at);
    }

    /// True while the task still needs doing
    pub fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Pending | TaskStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = HousekeepingTask::new(
            HotelId::new(),
            RoomId::new(),
            TaskType::CheckoutClean,
            TaskPriority::High,
            Utc::now(),
        );
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.is_open());
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_complete_stamps_time() {
        let mut task = HousekeepingTask::new(
            HotelId::new(),
            RoomId::new(),
            TaskType::RegularClean,
            TaskPriority::Normal,
            Utc::now(),
        );
        task.assign_to("maria");
        assert_eq!(task.status, TaskStatus::InProgress);

        task.complete(Utc::now());
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(!task.is_open());
        assert!(task.completed_at.is_some());
    }
}
