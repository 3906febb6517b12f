//! Booking error types
//!
//! Business-rule rejections name the specific violated precondition so
//! the presentation layer can show the guest or staff member exactly
//! what went wrong.

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{Money, MoneyError, StayError, StayPeriod};
use domain_accounting::AccountingError;
use domain_housekeeping::HousekeepingError;
use domain_rooms::RoomStatusError;

use crate::state_machine::BookingStatus;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    InvalidStay(#[from] StayError),

    #[error("No booking found for {0}")]
    BookingNotFound(String),

    #[error("No room found for {0}")]
    RoomNotFound(String),

    #[error("Booking {0} has no room assigned")]
    RoomNotAssigned(String),

    #[error("No room of type {0} is available for the requested dates")]
    NoRoomAvailable(String),

    #[error("Room {room_number} is not of the requested room type")]
    RoomTypeMismatch { room_number: String },

    #[error("Room {room_number} already has a booking for {stay}")]
    RoomUnavailable {
        room_number: String,
        stay: StayPeriod,
    },

    #[error("Room {room_number} is not ready for check-in: {reason}")]
    RoomNotReady {
        room_number: String,
        reason: &'static str,
    },

    #[error("Outstanding balance: {0}")]
    OutstandingBalance(Money),

    #[error("Invalid booking status transition from {from} to {to}")]
    IllegalStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Cannot mark no-show before the check-in date {check_in} has passed")]
    NoShowTooEarly { check_in: NaiveDate },

    #[error("Payment amount must be positive, got {0}")]
    NonPositivePayment(Money),

    #[error("Room can only be assigned while the booking is Reserved, current status is {0}")]
    RoomAssignmentBlocked(BookingStatus),

    #[error("Room {room_number} has booking {reference} arriving within {lead_days} days")]
    MaintenanceWindowConflict {
        room_number: String,
        reference: String,
        lead_days: i64,
    },

    #[error("No nightly rate configured for room type {0}")]
    NoRateConfigured(String),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    RoomStatus(#[from] RoomStatusError),

    #[error(transparent)]
    Accounting(#[from] AccountingError),

    #[error(transparent)]
    Housekeeping(#[from] HousekeepingError),
}
