//! Integration tests for domain_rooms

use chrono::Utc;

use core_kernel::{HotelId, RoomTypeId};
use domain_rooms::{Room, RoomStatus, RoomStatusError, RoomStatusManager};

use RoomStatus::*;

const ALL_STATUSES: [RoomStatus; 4] = [Vacant, Dirty, Occupied, Maintenance];

fn new_room() -> Room {
    Room::new(HotelId::new(), RoomTypeId::new(), "210").on_floor(2)
}

/// Walks a room into the requested status through legal transitions only.
fn room_in_status(manager: &mut RoomStatusManager, status: RoomStatus) -> Room {
    let mut room = new_room();
    let path: &[RoomStatus] = match status {
        Vacant => &[],
        Dirty => &[Dirty],
        Occupied => &[Occupied],
        Maintenance => &[Maintenance],
    };
    for step in path {
        manager
            .change_status(&mut room, *step, "setup", "test", Utc::now())
            .unwrap();
    }
    assert_eq!(room.status(), status);
    room
}

#[test]
fn every_non_member_pair_fails_and_leaves_status_unchanged() {
    for from in ALL_STATUSES {
        for to in ALL_STATUSES {
            if from.can_transition_to(to) {
                continue;
            }
            let mut manager = RoomStatusManager::new();
            let mut room = room_in_status(&mut manager, from);
            let history_before = manager.history().len();

            let result = manager.change_status(&mut room, to, "test", "test", Utc::now());

            assert_eq!(
                result.unwrap_err(),
                RoomStatusError::InvalidTransition { from, to }
            );
            assert_eq!(room.status(), from);
            assert_eq!(manager.history().len(), history_before);
        }
    }
}

#[test]
fn every_member_pair_succeeds_with_one_audit_row() {
    for from in ALL_STATUSES {
        for to in from.allowed_transitions() {
            let mut manager = RoomStatusManager::new();
            let mut room = room_in_status(&mut manager, from);
            let history_before = manager.history().len();

            let row = manager
                .change_status(&mut room, *to, "test", "test", Utc::now())
                .unwrap();

            assert_eq!(row.old_status, from);
            assert_eq!(row.new_status, *to);
            assert_eq!(room.status(), *to);
            assert_eq!(manager.history().len(), history_before + 1);
        }
    }
}

#[test]
fn checkout_cycle_occupied_dirty_vacant() {
    let mut manager = RoomStatusManager::new();
    let mut room = new_room();
    let now = Utc::now();

    manager
        .change_status(&mut room, Occupied, "check-in", "reception", now)
        .unwrap();
    manager
        .change_status(&mut room, Dirty, "checkout", "reception", now)
        .unwrap();
    manager
        .change_status(&mut room, Vacant, "cleaning complete", "housekeeping", now)
        .unwrap();

    let trail = manager.history_for_room(room.id);
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[0].reason, "check-in");
    assert_eq!(trail[1].reason, "checkout");
    assert_eq!(trail[2].actor, "housekeeping");
}

#[test]
fn dirty_room_blocks_check_in_with_named_reason() {
    let mut manager = RoomStatusManager::new();
    let room = room_in_status(&mut manager, Dirty);

    assert!(!room.is_ready_for_check_in());
    assert_eq!(
        room.check_in_blocker(),
        Some("room needs cleaning before check-in")
    );
}

#[test]
fn room_status_serde_roundtrip() {
    let room = new_room();
    let json = serde_json::to_string(&room).unwrap();
    let back: Room = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status(), Vacant);
    assert_eq!(back.room_number, room.room_number);
}
