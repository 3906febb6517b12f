//! Invoices
//!
//! Each booking carries exactly one invoice. Fees raise the invoice
//! total; payments (and negative refund payments) move `amount_paid`.
//! An invoice is never hard-deleted; reversing one sets `voided_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{BookingId, Currency, HotelId, InvoiceId, Money};

/// Invoice settlement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// No payment received yet
    Open,
    /// Some payment received, below the total
    PartiallyPaid,
    /// Payments cover the total (overpayment included)
    Paid,
}

/// What an invoice line charges for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceLineKind {
    /// One night's room charge
    RoomCharge,
    /// Cancellation fee per the fee schedule
    CancellationFee,
    /// One-night no-show fee
    NoShowFee,
}

/// A single charge on an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub id: Uuid,
    pub kind: InvoiceLineKind,
    pub description: String,
    pub amount: Money,
}

impl InvoiceLine {
    pub fn new(kind: InvoiceLineKind, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            amount,
        }
    }
}

/// The financial document tied 1:1 to a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Human-readable number, e.g. "INV-BKG-20250310-7C1A2B"
    pub invoice_number: String,
    /// Owning hotel
    pub hotel_id: HotelId,
    /// The booking this invoice belongs to
    pub booking_id: BookingId,
    /// Currency of all lines
    pub currency: Currency,
    /// Charges
    lines: Vec<InvoiceLine>,
    /// Sum of all lines
    total: Money,
    /// Sum of all payments (refunds subtract)
    amount_paid: Money,
    /// Settlement state
    status: InvoiceStatus,
    /// Set at checkout; no further charges accepted afterwards
    pub finalized_at: Option<DateTime<Utc>>,
    /// Soft-delete marker for a reversed invoice
    pub voided_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Opens a new, empty invoice for a booking
    pub fn open(
        hotel_id: HotelId,
        booking_id: BookingId,
        booking_reference: &str,
        currency: Currency,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: InvoiceId::new_v7(),
            invoice_number: format!("INV-{booking_reference}"),
            hotel_id,
            booking_id,
            currency,
            lines: Vec::new(),
            total: Money::zero(currency),
            amount_paid: Money::zero(currency),
            status: InvoiceStatus::Open,
            finalized_at: None,
            voided_at: None,
            created_at: at,
            updated_at: at,
        }
    }

    /// Adds a charge and raises the total
    pub fn add_line(&mut self, line: InvoiceLine, at: DateTime<Utc>) {
        self.total = self.total + line.amount;
        self.lines.push(line);
        self.updated_at = at;
        self.refresh_status();
    }

    /// Applies a payment; a refund is a negative amount
    pub fn apply_payment(&mut self, amount: Money, at: DateTime<Utc>) {
        self.amount_paid = self.amount_paid + amount;
        self.updated_at = at;
        self.refresh_status();
    }

    /// Marks the invoice final at checkout
    pub fn finalize(&mut self, at: DateTime<Utc>) {
        self.finalized_at = Some(at);
        self.updated_at = at;
    }

    /// Soft-deletes the invoice
    pub fn void(&mut self, at: DateTime<Utc>) {
        self.voided_at = Some(at);
        self.updated_at = at;
    }

    /// All charges
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Invoiced total
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total payments received (net of refunds)
    pub fn amount_paid(&self) -> Money {
        self.amount_paid
    }

    /// Settlement state
    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Outstanding balance: total minus paid, negative when overpaid
    pub fn balance_due(&self) -> Money {
        self.total - self.amount_paid
    }

    /// Paid iff payments cover the total; overpayment is accepted
    /// without a cap and never an error.
    fn refresh_status(&mut self) {
        self.status = if !self.amount_paid.is_zero() && self.amount_paid >= self.total {
            InvoiceStatus::Paid
        } else if self.amount_paid.is_positive() {
            InvoiceStatus::PartiallyPaid
        } else {
            InvoiceStatus::Open
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn invoice() -> Invoice {
        Invoice::open(
            HotelId::new(),
            BookingId::new(),
            "BKG-20250310-TEST01",
            Currency::USD,
            Utc::now(),
        )
    }

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_open_invoice_is_empty() {
        let inv = invoice();
        assert_eq!(inv.status(), InvoiceStatus::Open);
        assert!(inv.total().is_zero());
        assert!(inv.invoice_number.starts_with("INV-BKG-"));
    }

    #[test]
    fn test_lines_raise_total() {
        let mut inv = invoice();
        inv.add_line(
            InvoiceLine::new(InvoiceLineKind::RoomCharge, "Night 1", usd(dec!(100))),
            Utc::now(),
        );
        inv.add_line(
            InvoiceLine::new(InvoiceLineKind::CancellationFee, "Fee", usd(dec!(50))),
            Utc::now(),
        );
        assert_eq!(inv.total().amount(), dec!(150));
        assert_eq!(inv.balance_due().amount(), dec!(150));
    }

    #[test]
    fn test_partial_then_full_payment() {
        let mut inv = invoice();
        inv.add_line(
            InvoiceLine::new(InvoiceLineKind::RoomCharge, "Night 1", usd(dec!(200))),
            Utc::now(),
        );

        inv.apply_payment(usd(dec!(50)), Utc::now());
        assert_eq!(inv.status(), InvoiceStatus::PartiallyPaid);

        inv.apply_payment(usd(dec!(150)), Utc::now());
        assert_eq!(inv.status(), InvoiceStatus::Paid);
        assert!(inv.balance_due().is_zero());
    }

    #[test]
    fn test_overpayment_is_accepted() {
        let mut inv = invoice();
        inv.add_line(
            InvoiceLine::new(InvoiceLineKind::RoomCharge, "Night 1", usd(dec!(100))),
            Utc::now(),
        );

        inv.apply_payment(usd(dec!(150)), Utc::now());
        assert_eq!(inv.status(), InvoiceStatus::Paid);
        assert_eq!(inv.balance_due().amount(), dec!(-50));
    }

    #[test]
    fn test_refund_reduces_amount_paid() {
        let mut inv = invoice();
        inv.add_line(
            InvoiceLine::new(InvoiceLineKind::RoomCharge, "Night 1", usd(dec!(100))),
            Utc::now(),
        );
        inv.apply_payment(usd(dec!(100)), Utc::now());
        inv.apply_payment(usd(dec!(-40)), Utc::now());

        assert_eq!(inv.amount_paid().amount(), dec!(60));
        assert_eq!(inv.status(), InvoiceStatus::PartiallyPaid);
    }
}
