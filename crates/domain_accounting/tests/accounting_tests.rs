//! Integration tests for domain_accounting

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::{BookingId, Currency, HotelId, Money};
use domain_accounting::{
    AccountRole, AccountingError, AccountingLedger, EntryDraft, InvoiceLineKind, InvoiceStatus,
    PaymentMethod,
};

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn booking_invoice(ledger: &mut AccountingLedger, hotel_id: HotelId, total: Money, nights: u32) -> BookingId {
    let booking_id = BookingId::new_v7();
    ledger
        .open_invoice(hotel_id, booking_id, "BKG-20250601-F00BA4", total, nights, Utc::now())
        .unwrap();
    booking_id
}

#[test]
fn full_booking_settlement_cycle() {
    let mut ledger = AccountingLedger::new(Currency::USD);
    let hotel_id = HotelId::new();
    let booking_id = booking_invoice(&mut ledger, hotel_id, usd(dec!(300)), 3);

    // Guest pays in two installments
    ledger
        .post_payment(booking_id, usd(dec!(100)), PaymentMethod::Cash, "reception", Utc::now())
        .unwrap();
    assert_eq!(
        ledger.invoice(booking_id).unwrap().status(),
        InvoiceStatus::PartiallyPaid
    );

    ledger
        .post_payment(booking_id, usd(dec!(200)), PaymentMethod::CreditCard, "reception", Utc::now())
        .unwrap();
    let invoice = ledger.invoice(booking_id).unwrap();
    assert_eq!(invoice.status(), InvoiceStatus::Paid);
    assert!(invoice.balance_due().is_zero());

    // Checkout: revenue recognised once, invoice finalized
    ledger
        .post_revenue_recognition(booking_id, Utc::now())
        .unwrap()
        .expect("first recognition posts");
    ledger.finalize_invoice(booking_id, Utc::now()).unwrap();

    assert_eq!(
        ledger.role_balance(hotel_id, AccountRole::RoomRevenue).amount(),
        dec!(300)
    );
    assert_eq!(
        ledger.role_balance(hotel_id, AccountRole::Cash).amount(),
        dec!(300)
    );
    // AR: +300 recognised, -300 paid
    assert!(ledger
        .role_balance(hotel_id, AccountRole::AccountsReceivable)
        .is_zero());
}

#[test]
fn cancellation_with_partial_refund() {
    let mut ledger = AccountingLedger::new(Currency::USD);
    let hotel_id = HotelId::new();
    let booking_id = booking_invoice(&mut ledger, hotel_id, usd(dec!(400)), 4);

    // Guest prepaid in full, then cancels inside the 50% window
    ledger
        .post_payment(booking_id, usd(dec!(400)), PaymentMethod::BankTransfer, "web", Utc::now())
        .unwrap();
    ledger
        .post_cancellation_fee(booking_id, usd(dec!(200)), Utc::now())
        .unwrap();
    ledger
        .post_refund(booking_id, usd(dec!(200)), "cancellation refund", "reception", Utc::now())
        .unwrap();

    let invoice = ledger.invoice(booking_id).unwrap();
    assert_eq!(invoice.total().amount(), dec!(600));
    assert_eq!(invoice.amount_paid().amount(), dec!(200));

    assert_eq!(
        ledger
            .role_balance(hotel_id, AccountRole::CancellationFeeRevenue)
            .amount(),
        dec!(200)
    );
    assert_eq!(
        ledger.role_balance(hotel_id, AccountRole::Cash).amount(),
        dec!(200)
    );

    let fee_lines: Vec<_> = invoice
        .lines()
        .iter()
        .filter(|l| l.kind == InvoiceLineKind::CancellationFee)
        .collect();
    assert_eq!(fee_lines.len(), 1);
}

#[test]
fn uneven_nightly_split_preserves_total() {
    let mut ledger = AccountingLedger::new(Currency::USD);
    let hotel_id = HotelId::new();
    // 100.00 over 3 nights does not divide evenly
    let booking_id = booking_invoice(&mut ledger, hotel_id, usd(dec!(100)), 3);

    let invoice = ledger.invoice(booking_id).unwrap();
    assert_eq!(invoice.lines().len(), 3);
    let sum: rust_decimal::Decimal = invoice.lines().iter().map(|l| l.amount.amount()).sum();
    assert_eq!(sum, dec!(100));
}

#[test]
fn missing_invoice_is_a_named_error() {
    let mut ledger = AccountingLedger::new(Currency::USD);
    let unknown = BookingId::new();

    let result = ledger.post_payment(unknown, usd(dec!(50)), PaymentMethod::Cash, "x", Utc::now());
    match result {
        Err(AccountingError::InvoiceNotFound(id)) => assert!(id.contains("BKG-")),
        other => panic!("expected InvoiceNotFound, got {other:?}"),
    }
}

#[test]
fn ledger_rejects_unbalanced_draft() {
    // EntryDraft is the only way to build an entry, and the ledger is
    // the only way to store one; a lopsided draft must never post.
    let cash = core_kernel::AccountId::new();
    let ar = core_kernel::AccountId::new();
    let draft = EntryDraft::new("lopsided")
        .debit(cash, usd(dec!(100)))
        .credit(ar, usd(dec!(90)));
    assert!(!draft.is_balanced());
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every entry produced by any sequence of ledger operations balances.
        #[test]
        fn all_posted_entries_balance(
            total in 100i64..100_000i64,
            paid in 1i64..100_000i64,
            fee in 1i64..50_000i64,
            nights in 1u32..14u32,
        ) {
            let mut ledger = AccountingLedger::new(Currency::USD);
            let hotel_id = HotelId::new();
            let booking_id = BookingId::new();
            ledger
                .open_invoice(
                    hotel_id,
                    booking_id,
                    "BKG-PROP",
                    Money::from_minor(total, Currency::USD),
                    nights,
                    Utc::now(),
                )
                .unwrap();

            ledger
                .post_payment(
                    booking_id,
                    Money::from_minor(paid, Currency::USD),
                    PaymentMethod::Cash,
                    "prop",
                    Utc::now(),
                )
                .unwrap();
            ledger
                .post_cancellation_fee(booking_id, Money::from_minor(fee, Currency::USD), Utc::now())
                .unwrap();

            for entry in ledger.entries() {
                prop_assert_eq!(entry.total_debits(), entry.total_credits());
            }
        }
    }
}
