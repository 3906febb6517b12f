//! Test-bed builders

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{BookingId, FixedClock, HotelId, Money, RoomId, RoomTypeId};
use domain_booking::{
    BookingPolicy, BookingRequest, BookingService, FlatRatePlan, GuestDetails,
    InMemoryRoomRepository,
};
use domain_rooms::Room;

use crate::fixtures::{business_date, usd};

/// A hotel with rooms of one type, a flat rate, and a pinned clock
///
/// The room ids are in room-number order, so `room_ids[0]` is the room
/// auto-assignment picks first.
pub struct TestHotel {
    pub hotel_id: HotelId,
    pub room_type_id: RoomTypeId,
    pub room_ids: Vec<RoomId>,
    pub service: BookingService<InMemoryRoomRepository, FlatRatePlan, FixedClock>,
}

impl TestHotel {
    pub fn builder() -> TestHotelBuilder {
        TestHotelBuilder::default()
    }

    /// Creates a Reserved booking for the given dates
    pub fn reserve(
        &mut self,
        guest_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> BookingId {
        self.service
            .create_booking(BookingRequest::new(
                self.hotel_id,
                GuestDetails::new(guest_name),
                self.room_type_id,
                check_in,
                check_out,
            ))
            .expect("booking created")
    }
}

pub struct TestHotelBuilder {
    rooms: u32,
    nightly_rate: Money,
    today: NaiveDate,
    policy: Option<BookingPolicy>,
}

impl Default for TestHotelBuilder {
    fn default() -> Self {
        Self {
            rooms: 2,
            nightly_rate: usd(dec!(100)),
            today: business_date(),
            policy: None,
        }
    }
}

impl TestHotelBuilder {
    pub fn rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn nightly_rate(mut self, rate: Money) -> Self {
        self.nightly_rate = rate;
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> TestHotel {
        let hotel_id = HotelId::new();
        let room_type_id = RoomTypeId::new();

        let mut repo = InMemoryRoomRepository::new();
        let room_ids: Vec<RoomId> = (0..self.rooms)
            .map(|i| repo.add(Room::new(hotel_id, room_type_id, format!("{}", 101 + i))))
            .collect();

        let mut rates = FlatRatePlan::new();
        rates.set_rate(room_type_id, self.nightly_rate);

        let mut service = BookingService::new(
            repo,
            rates,
            FixedClock::on(self.today),
            self.nightly_rate.currency(),
        );
        if let Some(policy) = self.policy {
            service = service.with_policy(policy);
        }

        TestHotel {
            hotel_id,
            room_type_id,
            room_ids,
            service,
        }
    }
}
