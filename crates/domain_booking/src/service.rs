//! The booking lifecycle orchestrator
//!
//! Every lifecycle operation validates all of its preconditions before
//! the first mutation, so a business-rule rejection leaves bookings,
//! rooms, the ledger, the housekeeping queue, and the audit logs
//! untouched. When this core is embedded over a concurrent store, each
//! operation must additionally run inside one transaction; in
//! particular the availability check and booking insert in
//! [`BookingService::create_booking`] need store-level protection (a
//! unique range constraint or row locking) against two overlapping
//! reservations racing.

use chrono::Days;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

use core_kernel::{
    BookingId, Clock, Currency, Money, PaymentId, RoomId, StayPeriod, TaskId,
};
use domain_accounting::{AccountingLedger, PaymentMethod};
use domain_housekeeping::{HousekeepingError, HousekeepingQueue};
use domain_rooms::{RoomStatus, RoomStatusError, RoomStatusManager};

use crate::booking::{Booking, BookingRequest};
use crate::error::BookingError;
use crate::policy::BookingPolicy;
use crate::ports::{RatePlan, RoomRepository};
use crate::state_machine::{BookingStateMachine, BookingStatus};

/// Orchestrates the reservation lifecycle
///
/// Owns the booking store and the four collaborating subsystems; the
/// presentation layer never mutates booking or room state directly.
#[derive(Debug)]
pub struct BookingService<R, P, C> {
    rooms: R,
    rates: P,
    clock: C,
    policy: BookingPolicy,
    bookings: HashMap<BookingId, Booking>,
    state_machine: BookingStateMachine,
    room_status: RoomStatusManager,
    ledger: AccountingLedger,
    housekeeping: HousekeepingQueue,
}

impl<R, P, C> BookingService<R, P, C>
where
    R: RoomRepository,
    P: RatePlan,
    C: Clock,
{
    pub fn new(rooms: R, rates: P, clock: C, currency: Currency) -> Self {
        Self {
            rooms,
            rates,
            clock,
            policy: BookingPolicy::default(),
            bookings: HashMap::new(),
            state_machine: BookingStateMachine::new(),
            room_status: RoomStatusManager::new(),
            ledger: AccountingLedger::new(currency),
            housekeeping: HousekeepingQueue::new(),
        }
    }

    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    // ------------------------------------------------------------------
    // Lifecycle operations
    // ------------------------------------------------------------------

    /// Creates a Reserved booking and its invoice
    ///
    /// Validates the date range, resolves the nightly rate, and runs
    /// the availability overlap check against every live booking. An
    /// explicit room is honoured after type and availability checks;
    /// otherwise the first free room of the requested type is assigned.
    /// The room's physical status is not touched: a reservation is a
    /// logical claim derived from the overlap query.
    pub fn create_booking(&mut self, request: BookingRequest) -> Result<BookingId, BookingError> {
        let stay = StayPeriod::new(request.check_in, request.check_out)?;

        let nightly = self
            .rates
            .nightly_rate(request.hotel_id, request.room_type_id)
            .ok_or_else(|| BookingError::NoRateConfigured(request.room_type_id.to_string()))?;

        let room_id = match request.room_id {
            Some(room_id) => {
                let room = self
                    .rooms
                    .get(room_id)
                    .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
                if room.room_type_id != request.room_type_id {
                    return Err(BookingError::RoomTypeMismatch {
                        room_number: room.room_number.clone(),
                    });
                }
                if let Some(conflict) = self.conflicting_booking(room_id, &stay, None) {
                    return Err(BookingError::RoomUnavailable {
                        room_number: room.room_number.clone(),
                        stay: conflict.stay,
                    });
                }
                room_id
            }
            None => self
                .rooms
                .rooms_of_type(request.hotel_id, request.room_type_id)
                .into_iter()
                .filter(|room| room.status() != RoomStatus::Maintenance)
                .find(|room| self.conflicting_booking(room.id, &stay, None).is_none())
                .map(|room| room.id)
                .ok_or_else(|| {
                    BookingError::NoRoomAvailable(request.room_type_id.to_string())
                })?,
        };

        let now = self.clock.now();
        let total = nightly.multiply(Decimal::from(stay.nights())).round_to_currency();
        let booking = Booking::new(
            request.hotel_id,
            request.guest,
            request.room_type_id,
            Some(room_id),
            stay,
            request.source,
            total,
            self.clock.today(),
            now,
        );
        let booking_id = booking.id;

        self.ledger.open_invoice(
            request.hotel_id,
            booking_id,
            &booking.reference,
            total,
            stay.nights(),
            now,
        )?;

        info!(
            booking = %booking.reference,
            guest = %booking.guest.name,
            %stay,
            total = %total,
            "booking created"
        );
        self.bookings.insert(booking_id, booking);
        Ok(booking_id)
    }

    /// Checks the guest in
    ///
    /// Requires a Reserved booking with an assigned, physically Vacant
    /// room. The failure names which condition blocked: wrong booking
    /// status, missing room, or the room's own state (Dirty, Occupied,
    /// Maintenance).
    pub fn check_in(&mut self, booking_id: BookingId, actor: &str) -> Result<(), BookingError> {
        let now = self.clock.now();
        let booking = self.get_booking(booking_id)?;
        if booking.status() != BookingStatus::Reserved {
            return Err(BookingError::IllegalStatusTransition {
                from: booking.status(),
                to: BookingStatus::CheckedIn,
            });
        }
        let room_id = booking
            .room_id
            .ok_or_else(|| BookingError::RoomNotAssigned(booking.reference.clone()))?;
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        if let Some(reason) = room.check_in_blocker() {
            return Err(BookingError::RoomNotReady {
                room_number: room.room_number.clone(),
                reason,
            });
        }

        let booking = self.bookings.get_mut(&booking_id).expect("checked above");
        self.state_machine
            .change_status(booking, BookingStatus::CheckedIn, actor, now)?;
        let room = self.rooms.get_mut(room_id).expect("checked above");
        self.room_status
            .change_status(room, RoomStatus::Occupied, "check-in", actor, now)?;
        Ok(())
    }

    /// Checks the guest out
    ///
    /// The hard gate: an outstanding balance blocks checkout, with the
    /// amount in the error. On success the invoice is finalized, room
    /// revenue is recognised (once), the booking moves to CheckedOut,
    /// a checkout-clean task is queued, and the room becomes Dirty.
    pub fn check_out(&mut self, booking_id: BookingId, actor: &str) -> Result<(), BookingError> {
        let now = self.clock.now();
        let booking = self.get_booking(booking_id)?;
        if booking.status() != BookingStatus::CheckedIn {
            return Err(BookingError::IllegalStatusTransition {
                from: booking.status(),
                to: BookingStatus::CheckedOut,
            });
        }
        let room_id = booking
            .room_id
            .ok_or_else(|| BookingError::RoomNotAssigned(booking.reference.clone()))?;
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        if !room.status().can_transition_to(RoomStatus::Dirty) {
            return Err(RoomStatusError::InvalidTransition {
                from: room.status(),
                to: RoomStatus::Dirty,
            }
            .into());
        }

        let balance = self.ledger.balance_due(booking_id)?;
        if balance.is_positive() {
            return Err(BookingError::OutstandingBalance(balance));
        }

        self.ledger.post_revenue_recognition(booking_id, now)?;
        self.ledger.finalize_invoice(booking_id, now)?;

        let booking = self.bookings.get_mut(&booking_id).expect("checked above");
        self.state_machine
            .change_status(booking, BookingStatus::CheckedOut, actor, now)?;

        {
            let room = self.rooms.get(room_id).expect("checked above");
            self.housekeeping.create_checkout_task(room, now);
        }
        let room = self.rooms.get_mut(room_id).expect("checked above");
        self.room_status
            .change_status(room, RoomStatus::Dirty, "checkout", actor, now)?;

        self.sync_financials(booking_id);
        Ok(())
    }

    /// Cancels a Reserved booking
    ///
    /// The fee is the scheduled percentage of the total for the number
    /// of calendar days between the hotel-local business date and the
    /// check-in date. Prepayments above the fee are refunded. The room
    /// keeps its physical status; availability is restored because the
    /// cancelled booking drops out of the overlap check.
    pub fn cancel_booking(
        &mut self,
        booking_id: BookingId,
        reason: &str,
        actor: &str,
    ) -> Result<Money, BookingError> {
        let now = self.clock.now();
        let today = self.clock.today();
        let booking = self.get_booking(booking_id)?;
        if booking.status() != BookingStatus::Reserved {
            return Err(BookingError::IllegalStatusTransition {
                from: booking.status(),
                to: BookingStatus::Cancelled,
            });
        }

        let days_out = booking.stay.days_until_check_in(today);
        let fee = self
            .policy
            .cancellation
            .rate_for(days_out)
            .apply(&booking.total_amount)
            .round_to_currency();

        let paid = self
            .ledger
            .invoice(booking_id)
            .map(|invoice| invoice.amount_paid())
            .unwrap_or_else(|| Money::zero(fee.currency()));

        if fee.is_positive() {
            self.ledger.post_cancellation_fee(booking_id, fee, now)?;
        }
        if paid > fee {
            self.ledger
                .post_refund(booking_id, paid - fee, "cancellation refund", actor, now)?;
        }

        let booking = self.bookings.get_mut(&booking_id).expect("checked above");
        self.state_machine
            .change_status(booking, BookingStatus::Cancelled, actor, now)?;
        booking.cancellation_reason = Some(reason.to_string());
        booking.cancellation_fee = Some(fee);

        self.sync_financials(booking_id);
        info!(%booking_id, days_out, fee = %fee, "booking cancelled");
        Ok(fee)
    }

    /// Resolves a Reserved booking whose guest never arrived
    ///
    /// Only allowed once the check-in date has passed (hotel-local).
    /// Charges the configured number of nights at the booking's own
    /// nightly rate, then moves the booking to NoShow.
    pub fn mark_no_show(&mut self, booking_id: BookingId, actor: &str) -> Result<Money, BookingError> {
        let now = self.clock.now();
        let today = self.clock.today();
        let booking = self.get_booking(booking_id)?;
        if booking.status() != BookingStatus::Reserved {
            return Err(BookingError::IllegalStatusTransition {
                from: booking.status(),
                to: BookingStatus::NoShow,
            });
        }
        if booking.stay.check_in() >= today {
            return Err(BookingError::NoShowTooEarly {
                check_in: booking.stay.check_in(),
            });
        }

        let nightly = booking
            .total_amount
            .divide(Decimal::from(booking.nights()))?;
        let fee = nightly
            .multiply(Decimal::from(self.policy.no_show_nights))
            .round_to_currency();

        self.ledger.post_no_show_fee(booking_id, fee, now)?;

        let booking = self.bookings.get_mut(&booking_id).expect("checked above");
        self.state_machine
            .change_status(booking, BookingStatus::NoShow, actor, now)?;
        booking.no_show_fee = Some(fee);

        self.sync_financials(booking_id);
        info!(%booking_id, fee = %fee, "booking marked no-show");
        Ok(fee)
    }

    /// Records a guest payment
    ///
    /// The amount must be strictly positive; refunds only happen
    /// through the cancellation path. Overpayment is accepted without a
    /// cap and leaves the balance negative.
    pub fn record_payment(
        &mut self,
        booking_id: BookingId,
        amount: Money,
        method: PaymentMethod,
        actor: &str,
    ) -> Result<PaymentId, BookingError> {
        if !amount.is_positive() {
            return Err(BookingError::NonPositivePayment(amount));
        }
        self.get_booking(booking_id)?;

        let now = self.clock.now();
        let payment_id = self.ledger.post_payment(booking_id, amount, method, actor, now)?;
        self.sync_financials(booking_id);
        Ok(payment_id)
    }

    // ------------------------------------------------------------------
    // Room operations routed through the orchestrator
    // ------------------------------------------------------------------

    /// Moves a Reserved booking to a different room
    ///
    /// Re-runs the type and availability checks against the new room.
    pub fn assign_room(
        &mut self,
        booking_id: BookingId,
        room_id: RoomId,
        actor: &str,
    ) -> Result<(), BookingError> {
        let booking = self.get_booking(booking_id)?;
        if booking.status() != BookingStatus::Reserved {
            return Err(BookingError::RoomAssignmentBlocked(booking.status()));
        }
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        if room.room_type_id != booking.room_type_id {
            return Err(BookingError::RoomTypeMismatch {
                room_number: room.room_number.clone(),
            });
        }
        if let Some(conflict) = self.conflicting_booking(room_id, &booking.stay, Some(booking_id)) {
            return Err(BookingError::RoomUnavailable {
                room_number: room.room_number.clone(),
                stay: conflict.stay,
            });
        }

        let room_number = room.room_number.clone();
        let booking = self.bookings.get_mut(&booking_id).expect("checked above");
        booking.room_id = Some(room_id);
        info!(booking = %booking.reference, room = %room_number, actor, "room assigned");
        Ok(())
    }

    /// Takes a room out of service
    ///
    /// Refused while a live booking for the room arrives within the
    /// configured lead window; this check needs booking data, so it
    /// lives here rather than in the room state machine.
    pub fn place_room_in_maintenance(
        &mut self,
        room_id: RoomId,
        reason: &str,
        actor: &str,
    ) -> Result<(), BookingError> {
        let now = self.clock.now();
        let today = self.clock.today();
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;

        let lead_days = self.policy.maintenance_lead_days.max(1);
        let window = StayPeriod::new(today, today + Days::new(lead_days as u64))
            .expect("lead window is non-empty");
        if let Some(conflict) = self.bookings.values().find(|b| {
            b.room_id == Some(room_id) && b.status().is_live() && b.stay.overlaps(&window)
        }) {
            return Err(BookingError::MaintenanceWindowConflict {
                room_number: room.room_number.clone(),
                reference: conflict.reference.clone(),
                lead_days,
            });
        }

        let room = self.rooms.get_mut(room_id).expect("checked above");
        self.room_status
            .change_status(room, RoomStatus::Maintenance, reason, actor, now)?;
        Ok(())
    }

    /// Marks a cleaning task done and returns the room to Vacant
    pub fn complete_cleaning(&mut self, task_id: TaskId, actor: &str) -> Result<(), BookingError> {
        let now = self.clock.now();
        let task = self
            .housekeeping
            .get(task_id)
            .ok_or_else(|| HousekeepingError::TaskNotFound(task_id.to_string()))?;
        if !task.is_open() {
            return Err(HousekeepingError::TaskNotOpen {
                id: task_id.to_string(),
                status: task.status,
            }
            .into());
        }
        let room_id = task.room_id;
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        if !room.status().can_transition_to(RoomStatus::Vacant) {
            return Err(RoomStatusError::InvalidTransition {
                from: room.status(),
                to: RoomStatus::Vacant,
            }
            .into());
        }

        self.housekeeping.complete(task_id, now)?;
        let room = self.rooms.get_mut(room_id).expect("checked above");
        self.room_status
            .change_status(room, RoomStatus::Vacant, "cleaning completed", actor, now)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.get(&booking_id)
    }

    pub fn rooms(&self) -> &R {
        &self.rooms
    }

    pub fn ledger(&self) -> &AccountingLedger {
        &self.ledger
    }

    pub fn housekeeping(&self) -> &HousekeepingQueue {
        &self.housekeeping
    }

    pub fn transition_log(&self) -> &[crate::state_machine::BookingTransitionLog] {
        self.state_machine.log()
    }

    pub fn room_history(&self) -> &[domain_rooms::RoomStatusHistory] {
        self.room_status.history()
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Whether a room is logically reserved on a date: claimed by a
    /// live booking whose stay contains it
    pub fn is_room_reserved_on(&self, room_id: RoomId, date: chrono::NaiveDate) -> bool {
        self.bookings.values().any(|b| {
            b.room_id == Some(room_id) && b.status().is_live() && b.stay.contains(date)
        })
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn get_booking(&self, booking_id: BookingId) -> Result<&Booking, BookingError> {
        self.bookings
            .get(&booking_id)
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))
    }

    /// The availability overlap check over live bookings
    fn conflicting_booking(
        &self,
        room_id: RoomId,
        stay: &StayPeriod,
        exclude: Option<BookingId>,
    ) -> Option<&Booking> {
        self.bookings.values().find(|b| {
            exclude != Some(b.id)
                && b.room_id == Some(room_id)
                && b.status().is_live()
                && b.stay.overlaps(stay)
        })
    }

    /// Mirrors invoice totals onto the booking after a posting
    fn sync_financials(&mut self, booking_id: BookingId) {
        if let Some(invoice) = self.ledger.invoice(booking_id) {
            let total = invoice.total();
            let paid = invoice.amount_paid();
            if let Some(booking) = self.bookings.get_mut(&booking_id) {
                booking.total_amount = total;
                booking.amount_paid = paid;
            }
        }
    }
}
