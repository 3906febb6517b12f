//! Payment records
//!
//! Payments are append-only. Money leaving the hotel (a refund) is a
//! new payment with a negative amount, never an edit to an earlier row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{BookingId, HotelId, InvoiceId, Money, PaymentId};

/// How the money moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
    DigitalWallet,
    /// Money returned to the guest; the amount is negative
    Refund,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::DigitalWallet => "Digital Wallet",
            PaymentMethod::Refund => "Refund",
        };
        write!(f, "{label}")
    }
}

/// An immutable record of money received against (or refunded from) an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Owning hotel
    pub hotel_id: HotelId,
    /// Invoice the payment settles
    pub invoice_id: InvoiceId,
    /// Booking the invoice belongs to
    pub booking_id: BookingId,
    /// Signed amount; negative means refund
    pub amount: Money,
    /// Payment method
    pub method: PaymentMethod,
    /// Who recorded it
    pub recorded_by: String,
    /// When it was recorded
    pub recorded_at: DateTime<Utc>,
    /// Free-form note, e.g. the refund reason
    pub notes: Option<String>,
}

impl Payment {
    pub fn new(
        hotel_id: HotelId,
        invoice_id: InvoiceId,
        booking_id: BookingId,
        amount: Money,
        method: PaymentMethod,
        recorded_by: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PaymentId::new_v7(),
            hotel_id,
            invoice_id,
            booking_id,
            amount,
            method,
            recorded_by: recorded_by.into(),
            recorded_at,
            notes: None,
        }
    }

    /// Attaches a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True when this row is money going back to the guest
    pub fn is_refund(&self) -> bool {
        self.amount.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_refund_detection() {
        let payment = Payment::new(
            HotelId::new(),
            InvoiceId::new(),
            BookingId::new(),
            Money::new(dec!(-75), Currency::USD),
            PaymentMethod::Refund,
            "front-desk",
            Utc::now(),
        )
        .with_notes("Cancellation refund");

        assert!(payment.is_refund());
        assert_eq!(payment.notes.as_deref(), Some("Cancellation refund"));
    }
}
