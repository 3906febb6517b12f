//! Task priority scoring
//!
//! Pending work is ordered by a numeric score rather than creation
//! order, so a checkout clean for a room with a same-day arrival jumps
//! ahead of a routine stayover clean, and old tasks cannot starve.

use chrono::{DateTime, Utc};

use core_kernel::RoomId;

use crate::task::{HousekeepingTask, TaskType};

const SCORE_HIGH: u32 = 80;
const SCORE_MEDIUM: u32 = 50;

/// Human-readable priority band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

fn base_weight(task_type: TaskType) -> u32 {
    match task_type {
        TaskType::VipClean => 100,
        TaskType::CheckoutClean => 80,
        TaskType::RegularClean => 60,
        TaskType::Inspection => 40,
        TaskType::DeepClean => 30,
    }
}

/// Scores a task from 0 to 100
///
/// Factors: base weight of the task type, a bonus when the room has an
/// arrival today (the room must be ready before the guest shows up),
/// and an age bonus after four hours so old tasks eventually win.
pub fn priority_score(
    task: &HousekeepingTask,
    arrivals_today: &[RoomId],
    now: DateTime<Utc>,
) -> u32 {
    let mut score = base_weight(task.task_type);

    if arrivals_today.contains(&task.room_id) {
        score += 40;
    }

    let hours_old = (now - task.created_at).num_hours();
    if hours_old > 4 {
        score += (20).min((hours_old - 4) as u32 * 2);
    }

    score.min(100)
}

/// Converts a numeric score to its band
pub fn priority_label(score: u32) -> PriorityLabel {
    if score >= SCORE_HIGH {
        PriorityLabel::High
    } else if score >= SCORE_MEDIUM {
        PriorityLabel::Medium
    } else {
        PriorityLabel::Low
    }
}
