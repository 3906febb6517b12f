//! The reservation lifecycle state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use core_kernel::BookingId;

use crate::booking::Booking;
use crate::error::BookingError;

/// Lifecycle status of a booking
///
/// `Reserved` is the only initial state; `CheckedOut`, `Cancelled`, and
/// `NoShow` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Reserved,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    /// Whether `self -> target` is an allowed lifecycle transition
    pub fn can_transition_to(self, target: BookingStatus) -> bool {
        matches!(
            (self, target),
            (BookingStatus::Reserved, BookingStatus::CheckedIn)
                | (BookingStatus::Reserved, BookingStatus::Cancelled)
                | (BookingStatus::Reserved, BookingStatus::NoShow)
                | (BookingStatus::CheckedIn, BookingStatus::CheckedOut)
        )
    }

    /// The statuses reachable from this one
    pub fn allowed_transitions(self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Reserved => &[
                BookingStatus::CheckedIn,
                BookingStatus::Cancelled,
                BookingStatus::NoShow,
            ],
            BookingStatus::CheckedIn => &[BookingStatus::CheckedOut],
            BookingStatus::CheckedOut | BookingStatus::Cancelled | BookingStatus::NoShow => &[],
        }
    }

    /// True for statuses with no outgoing transitions
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Live bookings hold their room: they participate in the
    /// availability overlap check.
    pub fn is_live(self) -> bool {
        matches!(self, BookingStatus::Reserved | BookingStatus::CheckedIn)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStatus::Reserved => "Reserved",
            BookingStatus::CheckedIn => "CheckedIn",
            BookingStatus::CheckedOut => "CheckedOut",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::NoShow => "NoShow",
        };
        write!(f, "{name}")
    }
}

/// One audit row per booking status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingTransitionLog {
    pub id: Uuid,
    pub booking_id: BookingId,
    pub from: BookingStatus,
    pub to: BookingStatus,
    pub actor: String,
    pub changed_at: DateTime<Utc>,
}

/// Gatekeeper for all booking status mutation
///
/// The only code path that writes `Booking::status`. A transition
/// either updates the booking, stamps the lifecycle timestamp, and
/// appends a log row, or fails leaving everything untouched.
#[derive(Debug, Default)]
pub struct BookingStateMachine {
    log: Vec<BookingTransitionLog>,
}

impl BookingStateMachine {
    pub fn new() -> Self {
        Self { log: Vec::new() }
    }

    /// Changes a booking's lifecycle status
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::IllegalStatusTransition`] naming the
    /// attempted from/to pair when it is not in the transition table;
    /// the booking is left unchanged.
    pub fn change_status(
        &mut self,
        booking: &mut Booking,
        new_status: BookingStatus,
        actor: &str,
        at: DateTime<Utc>,
    ) -> Result<&BookingTransitionLog, BookingError> {
        let from = booking.status();

        if !from.can_transition_to(new_status) {
            tracing::warn!(
                booking = %booking.reference,
                %from,
                to = %new_status,
                "rejected booking status transition"
            );
            return Err(BookingError::IllegalStatusTransition {
                from,
                to: new_status,
            });
        }

        booking.set_status(new_status);
        match new_status {
            BookingStatus::CheckedIn => booking.checked_in_at = Some(at),
            BookingStatus::CheckedOut => booking.checked_out_at = Some(at),
            BookingStatus::Cancelled => booking.cancelled_at = Some(at),
            BookingStatus::Reserved | BookingStatus::NoShow => {}
        }

        self.log.push(BookingTransitionLog {
            id: Uuid::new_v4(),
            booking_id: booking.id,
            from,
            to: new_status,
            actor: actor.to_string(),
            changed_at: at,
        });

        tracing::info!(
            booking = %booking.reference,
            %from,
            to = %new_status,
            actor,
            "booking status changed"
        );

        Ok(self.log.last().expect("row just pushed"))
    }

    /// The full transition log, oldest first
    pub fn log(&self) -> &[BookingTransitionLog] {
        &self.log
    }

    /// Transition rows for one booking, oldest first
    pub fn log_for_booking(&self, booking_id: BookingId) -> Vec<&BookingTransitionLog> {
        self.log
            .iter()
            .filter(|row| row.booking_id == booking_id)
            .collect()
    }
}
