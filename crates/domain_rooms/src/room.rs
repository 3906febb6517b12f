//! Room aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{HotelId, RoomId, RoomTypeId};

use crate::status::RoomStatus;

/// A physical, assignable room
///
/// The status field is private: outside this crate it is read-only,
/// and inside the crate only [`crate::RoomStatusManager`] writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: RoomId,
    /// Owning hotel (tenant scope)
    pub hotel_id: HotelId,
    /// Room type (determines the base rate)
    pub room_type_id: RoomTypeId,
    /// Human-readable room number, e.g. "204"
    pub room_number: String,
    /// Floor the room is on
    pub floor: Option<i16>,
    /// Physical status; mutated only by the status manager
    status: RoomStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Creates a new room, starting Vacant
    pub fn new(
        hotel_id: HotelId,
        room_type_id: RoomTypeId,
        room_number: impl Into<String>,
    ) -> Self {
        Self {
            id: RoomId::new_v7(),
            hotel_id,
            room_type_id,
            room_number: room_number.into(),
            floor: None,
            status: RoomStatus::Vacant,
            created_at: Utc::now(),
        }
    }

    /// Sets the floor
    pub fn on_floor(mut self, floor: i16) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Current physical status
    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// Whether a guest can be checked into this room right now
    ///
    /// Only a Vacant room is ready: Dirty needs cleaning, Occupied has
    /// a guest, Maintenance is out of order.
    pub fn is_ready_for_check_in(&self) -> bool {
        self.status == RoomStatus::Vacant
    }

    /// Why the room cannot take a check-in, if it cannot
    pub fn check_in_blocker(&self) -> Option<&'static str> {
        match self.status {
            RoomStatus::Vacant => None,
            RoomStatus::Dirty => Some("room needs cleaning before check-in"),
            RoomStatus::Occupied => Some("room is currently occupied"),
            RoomStatus::Maintenance => Some("room is under maintenance"),
        }
    }

    pub(crate) fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_vacant() {
        let room = Room::new(HotelId::new(), RoomTypeId::new(), "101");
        assert_eq!(room.status(), RoomStatus::Vacant);
        assert!(room.is_ready_for_check_in());
        assert!(room.check_in_blocker().is_none());
    }

    #[test]
    fn test_on_floor() {
        let room = Room::new(HotelId::new(), RoomTypeId::new(), "301").on_floor(3);
        assert_eq!(room.floor, Some(3));
    }
}
