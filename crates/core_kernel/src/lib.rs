//! Core Kernel - Foundational types and utilities for the hotel system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Stay periods and the date-range overlap test
//! - Injectable clocks for hotel-local business dates
//! - Common identifiers and value objects

pub mod clock;
pub mod identifiers;
pub mod money;
pub mod stay;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::{
    AccountId, BookingId, HotelId, InvoiceId, JournalEntryId, PaymentId, RoomId, RoomTypeId,
    TaskId,
};
pub use money::{Currency, Money, MoneyError, Rate};
pub use stay::{StayError, StayPeriod};
