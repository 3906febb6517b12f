//! Room status audit trail

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{HotelId, RoomId};

use crate::status::RoomStatus;

/// One immutable audit row per room status change
///
/// Rows are append-only; nothing in the system edits or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusHistory {
    /// Unique row identifier
    pub id: Uuid,
    /// Owning hotel
    pub hotel_id: HotelId,
    /// Room whose status changed
    pub room_id: RoomId,
    /// Status before the change
    pub old_status: RoomStatus,
    /// Status after the change
    pub new_status: RoomStatus,
    /// Why the change happened, e.g. "check-in" or "checkout"
    pub reason: String,
    /// Who made the change
    pub actor: String,
    /// When the change happened
    pub changed_at: DateTime<Utc>,
}
