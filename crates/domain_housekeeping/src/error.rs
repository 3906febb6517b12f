//! Housekeeping error types

use thiserror::Error;

use crate::task::TaskStatus;

#[derive(Debug, Error)]
pub enum HousekeepingError {
    #[error("No housekeeping task found for {0}")]
    TaskNotFound(String),

    #[error("Task {id} is {status:?} and cannot be completed")]
    TaskNotOpen { id: String, status: TaskStatus },
}
