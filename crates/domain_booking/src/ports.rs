//! Collaborator interfaces consumed by the booking service
//!
//! The core stays storage-agnostic: rooms come from a
//! [`RoomRepository`] and nightly prices from a [`RatePlan`]. The
//! in-memory implementations here back the test suites and small
//! deployments; an embedding application substitutes its own.

use std::collections::HashMap;

use core_kernel::{HotelId, Money, RoomId, RoomTypeId};
use domain_rooms::Room;

/// Source of room records
pub trait RoomRepository {
    fn get(&self, room_id: RoomId) -> Option<&Room>;

    fn get_mut(&mut self, room_id: RoomId) -> Option<&mut Room>;

    /// All rooms of one type in a hotel, in stable assignment order
    fn rooms_of_type(&self, hotel_id: HotelId, room_type_id: RoomTypeId) -> Vec<&Room>;
}

/// Source of nightly prices per room type
///
/// Dynamic pricing lives behind this seam; the core only multiplies
/// the returned rate by the number of nights.
pub trait RatePlan {
    fn nightly_rate(&self, hotel_id: HotelId, room_type_id: RoomTypeId) -> Option<Money>;
}

/// Room storage backed by a plain vector
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: Vec<Room>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.rooms.push(room);
        id
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn get(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    fn get_mut(&mut self, room_id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == room_id)
    }

    fn rooms_of_type(&self, hotel_id: HotelId, room_type_id: RoomTypeId) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.hotel_id == hotel_id && r.room_type_id == room_type_id)
            .collect()
    }
}

/// One fixed nightly rate per room type
#[derive(Debug, Default)]
pub struct FlatRatePlan {
    rates: HashMap<RoomTypeId, Money>,
}

impl FlatRatePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rate(&mut self, room_type_id: RoomTypeId, nightly: Money) {
        self.rates.insert(room_type_id, nightly);
    }
}

impl RatePlan for FlatRatePlan {
    fn nightly_rate(&self, _hotel_id: HotelId, room_type_id: RoomTypeId) -> Option<Money> {
        self.rates.get(&room_type_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rooms_of_type_scoped_to_hotel() {
        let mut repo = InMemoryRoomRepository::new();
        let hotel_a = HotelId::new();
        let hotel_b = HotelId::new();
        let standard = RoomTypeId::new();

        repo.add(Room::new(hotel_a, standard, "101"));
        repo.add(Room::new(hotel_a, standard, "102"));
        repo.add(Room::new(hotel_b, standard, "101"));

        assert_eq!(repo.rooms_of_type(hotel_a, standard).len(), 2);
        assert_eq!(repo.rooms_of_type(hotel_b, standard).len(), 1);
    }

    #[test]
    fn test_flat_rate_plan_lookup() {
        let mut rates = FlatRatePlan::new();
        let standard = RoomTypeId::new();
        rates.set_rate(standard, Money::new(dec!(100), Currency::USD));

        assert_eq!(
            rates.nightly_rate(HotelId::new(), standard),
            Some(Money::new(dec!(100), Currency::USD))
        );
        assert!(rates.nightly_rate(HotelId::new(), RoomTypeId::new()).is_none());
    }
}
