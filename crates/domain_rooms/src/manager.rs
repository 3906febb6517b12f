//! Gatekeeper for all physical room-state mutation

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::history::RoomStatusHistory;
use crate::room::Room;
use crate::status::{RoomStatus, RoomStatusError};

/// Validates room status transitions and keeps the audit trail
///
/// This is the only code path that writes `Room::status`. A transition
/// either updates the room and appends a history row, or fails leaving
/// both untouched.
#[derive(Debug, Default)]
pub struct RoomStatusManager {
    history: Vec<RoomStatusHistory>,
}

impl RoomStatusManager {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Changes a room's physical status
    ///
    /// # Errors
    ///
    /// Returns [`RoomStatusError::InvalidTransition`] naming the
    /// attempted from/to pair when it is not in the adjacency table;
    /// the room is left unchanged.
    pub fn change_status(
        &mut self,
        room: &mut Room,
        new_status: RoomStatus,
        reason: &str,
        actor: &str,
        at: DateTime<Utc>,
    ) -> Result<&RoomStatusHistory, RoomStatusError> {
        let old_status = room.status();

        if !old_status.can_transition_to(new_status) {
            tracing::warn!(
                room = %room.room_number,
                from = %old_status,
                to = %new_status,
                "rejected room status transition"
            );
            return Err(RoomStatusError::InvalidTransition {
                from: old_status,
                to: new_status,
            });
        }

        room.set_status(new_status);
        self.history.push(RoomStatusHistory {
            id: Uuid::new_v4(),
            hotel_id: room.hotel_id,
            room_id: room.id,
            old_status,
            new_status,
            reason: reason.to_string(),
            actor: actor.to_string(),
            changed_at: at,
        });

        tracing::info!(
            room = %room.room_number,
            from = %old_status,
            to = %new_status,
            reason,
            "room status changed"
        );

        Ok(self.history.last().expect("row just pushed"))
    }

    /// The full audit trail, oldest first
    pub fn history(&self) -> &[RoomStatusHistory] {
        &self.history
    }

    /// Audit rows for one room, oldest first
    pub fn history_for_room(&self, room_id: core_kernel::RoomId) -> Vec<&RoomStatusHistory> {
        self.history
            .iter()
            .filter(|h| h.room_id == room_id)
            .collect()
    }
}
