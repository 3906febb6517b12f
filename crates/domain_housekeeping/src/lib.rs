//! Housekeeping Domain - Cleaning Tasks from Room-State Events
//!
//! Translates room-state events into actionable cleaning work. The
//! checkout path is the important one: every guest departure creates a
//! high-priority checkout-clean task, and the room only returns to
//! Vacant once that task is completed.
//!
//! Task creation never changes room status; the room state machine in
//! `domain_rooms` owns that.

pub mod error;
pub mod priority;
pub mod queue;
pub mod task;

pub use error::HousekeepingError;
pub use priority::{priority_label, priority_score, PriorityLabel};
pub use queue::HousekeepingQueue;
pub use task::{HousekeepingTask, TaskPriority, TaskStatus, TaskType};
