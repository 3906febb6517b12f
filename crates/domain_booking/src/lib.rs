//! Booking Domain - The Reservation Lifecycle
//!
//! The orchestrating crate of the workspace. [`BookingService`] is the
//! single entry point for every lifecycle operation: it validates all
//! preconditions before the first mutation, then drives the booking
//! state machine, the room state machine, the accounting ledger, and
//! the housekeeping queue together.
//!
//! Two invariants anchor the design:
//!
//! - No two bookings in a live status (Reserved or CheckedIn) may claim
//!   the same room over overlapping stay periods.
//! - A guest with an outstanding balance can never be checked out.
//!
//! A room being "reserved" is a logical property derived from the
//! overlap query over live bookings; it is never written into the
//! room's physical status.

pub mod booking;
pub mod error;
pub mod policy;
pub mod ports;
pub mod service;
pub mod state_machine;

pub use booking::{Booking, BookingRequest, BookingSource, GuestDetails};
pub use error::BookingError;
pub use policy::{BookingPolicy, CancellationPolicy, FeeTier};
pub use ports::{FlatRatePlan, InMemoryRoomRepository, RatePlan, RoomRepository};
pub use service::BookingService;
pub use state_machine::{BookingStateMachine, BookingStatus, BookingTransitionLog};
