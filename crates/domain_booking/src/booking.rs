//! Booking aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{BookingId, HotelId, Money, RoomId, RoomTypeId, StayPeriod};

use crate::state_machine::BookingStatus;

/// Denormalized guest contact details stored on the booking
///
/// A snapshot at reservation time; later guest-profile edits do not
/// rewrite financial records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl GuestDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Channel the reservation arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingSource {
    #[default]
    Direct,
    Website,
    Phone,
    Email,
    WalkIn,
    OnlineTravelAgency,
}

/// Input for [`crate::BookingService::create_booking`]
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub hotel_id: HotelId,
    pub guest: GuestDetails,
    pub room_type_id: RoomTypeId,
    /// Explicit room; when `None` the service auto-assigns the first
    /// available room of the requested type
    pub room_id: Option<RoomId>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub source: BookingSource,
}

impl BookingRequest {
    pub fn new(
        hotel_id: HotelId,
        guest: GuestDetails,
        room_type_id: RoomTypeId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            hotel_id,
            guest,
            room_type_id,
            room_id: None,
            check_in,
            check_out,
            source: BookingSource::default(),
        }
    }

    /// Requests a specific room instead of auto-assignment
    pub fn in_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn via(mut self, source: BookingSource) -> Self {
        self.source = source;
        self
    }
}

/// A reservation for one room over a stay period
///
/// Never hard-deleted (it is a financial record); terminal outcomes are
/// statuses. The status field is private and written only by
/// [`crate::BookingStateMachine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: BookingId,
    /// Human-readable reference, e.g. "BKG-20250601-A4F2C1"
    pub reference: String,
    /// Owning hotel (tenant scope)
    pub hotel_id: HotelId,
    /// Guest snapshot
    pub guest: GuestDetails,
    /// Requested room type
    pub room_type_id: RoomTypeId,
    /// Assigned room, if any
    pub room_id: Option<RoomId>,
    /// The half-open stay range
    pub stay: StayPeriod,
    /// Lifecycle status; mutated only by the state machine
    status: BookingStatus,
    /// Reservation channel
    pub source: BookingSource,
    /// Invoiced total, kept in step with the invoice as fees post
    pub total_amount: Money,
    /// Net of payments and refunds
    pub amount_paid: Money,
    /// Reason given at cancellation
    pub cancellation_reason: Option<String>,
    /// Fee charged at cancellation
    pub cancellation_fee: Option<Money>,
    /// Fee charged when the guest never arrived
    pub no_show_fee: Option<Money>,
    pub created_at: DateTime<Utc>,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub checked_out_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Creates a Reserved booking
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hotel_id: HotelId,
        guest: GuestDetails,
        room_type_id: RoomTypeId,
        room_id: Option<RoomId>,
        stay: StayPeriod,
        source: BookingSource,
        total_amount: Money,
        booked_on: NaiveDate,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: BookingId::new_v7(),
            reference: generate_reference(booked_on),
            hotel_id,
            guest,
            room_type_id,
            room_id,
            stay,
            status: BookingStatus::Reserved,
            source,
            total_amount,
            amount_paid: Money::zero(total_amount.currency()),
            cancellation_reason: None,
            cancellation_fee: None,
            no_show_fee: None,
            created_at: at,
            checked_in_at: None,
            checked_out_at: None,
            cancelled_at: None,
        }
    }

    /// Current lifecycle status
    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// Outstanding amount; negative under the overpayment policy
    pub fn balance(&self) -> Money {
        self.total_amount - self.amount_paid
    }

    /// Number of nights in the stay
    pub fn nights(&self) -> u32 {
        self.stay.nights()
    }

    pub(crate) fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}

/// Booking reference: booked-on date plus a short random suffix
fn generate_reference(booked_on: NaiveDate) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    format!("BKG-{}-{}", booked_on.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn stay() -> StayPeriod {
        StayPeriod::new(
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
        )
        .unwrap()
    }

    fn booking() -> Booking {
        Booking::new(
            HotelId::new(),
            GuestDetails::new("Ana Torres").with_email("ana@example.com"),
            RoomTypeId::new(),
            None,
            stay(),
            BookingSource::Website,
            Money::new(dec!(240), Currency::USD),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_booking_is_reserved_and_unpaid() {
        let b = booking();
        assert_eq!(b.status(), BookingStatus::Reserved);
        assert_eq!(b.balance(), b.total_amount);
        assert_eq!(b.nights(), 2);
        assert!(b.room_id.is_none());
    }

    #[test]
    fn test_reference_format() {
        let b = booking();
        assert!(b.reference.starts_with("BKG-20250601-"));
        assert_eq!(b.reference.len(), "BKG-20250601-".len() + 6);
        let suffix = b.reference.rsplit('-').next().unwrap();
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_balance_goes_negative_on_overpayment() {
        let mut b = booking();
        b.amount_paid = Money::new(dec!(300), Currency::USD);
        assert_eq!(b.balance().amount(), dec!(-60));
    }
}
