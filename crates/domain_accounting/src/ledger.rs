//! The accounting ledger
//!
//! [`AccountingLedger`] is the single write path for booking finances:
//! invoices, payment rows, and balanced journal entries all go through
//! it. Each posting operation produces exactly one journal entry and
//! verifies `sum(debits) == sum(credits)` before anything is stored.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use core_kernel::{AccountId, BookingId, Currency, HotelId, JournalEntryId, Money, PaymentId};

use crate::account::{AccountRole, ChartOfAccounts};
use crate::error::AccountingError;
use crate::invoice::{Invoice, InvoiceLine, InvoiceLineKind};
use crate::journal::{EntryDraft, JournalEntry, LineSide};
use crate::payment::{Payment, PaymentMethod};

/// Double-entry ledger plus invoice/payment bookkeeping for bookings
///
/// # Invariants
///
/// - Every stored journal entry balances exactly
/// - Account balances are always consistent with posted entries
/// - Invoices and payments are never deleted; refunds are new negative
///   payment rows and reversed invoices are voided, not removed
#[derive(Debug)]
pub struct AccountingLedger {
    currency: Currency,
    chart: ChartOfAccounts,
    entries: Vec<JournalEntry>,
    balances: HashMap<AccountId, Money>,
    invoices: HashMap<BookingId, Invoice>,
    payments: Vec<Payment>,
    revenue_posted: HashSet<BookingId>,
}

impl AccountingLedger {
    /// Creates an empty ledger for the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            chart: ChartOfAccounts::new(),
            entries: Vec::new(),
            balances: HashMap::new(),
            invoices: HashMap::new(),
            payments: Vec::new(),
            revenue_posted: HashSet::new(),
        }
    }

    /// The ledger currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    // ------------------------------------------------------------------
    // Invoices
    // ------------------------------------------------------------------

    /// Opens the invoice for a freshly created booking
    ///
    /// The stay total is itemised into one room-charge line per night;
    /// the per-night split preserves the total to the cent.
    pub fn open_invoice(
        &mut self,
        hotel_id: HotelId,
        booking_id: BookingId,
        booking_reference: &str,
        stay_total: Money,
        nights: u32,
        at: DateTime<Utc>,
    ) -> Result<&Invoice, AccountingError> {
        if self.invoices.contains_key(&booking_id) {
            return Err(AccountingError::InvoiceAlreadyExists(booking_id.to_string()));
        }

        let mut invoice = Invoice::open(hotel_id, booking_id, booking_reference, self.currency, at);
        let nightly = stay_total.allocate(nights.max(1))?;
        for (i, amount) in nightly.into_iter().enumerate() {
            invoice.add_line(
                InvoiceLine::new(
                    InvoiceLineKind::RoomCharge,
                    format!("Room charge, night {}", i + 1),
                    amount,
                ),
                at,
            );
        }

        tracing::info!(
            invoice = %invoice.invoice_number,
            total = %invoice.total(),
            "invoice opened"
        );

        self.invoices.insert(booking_id, invoice);
        Ok(self.invoices.get(&booking_id).expect("just inserted"))
    }

    /// The invoice for a booking, if one exists
    pub fn invoice(&self, booking_id: BookingId) -> Option<&Invoice> {
        self.invoices.get(&booking_id)
    }

    /// Outstanding balance for a booking: invoice total minus payments
    pub fn balance_due(&self, booking_id: BookingId) -> Result<Money, AccountingError> {
        self.invoices
            .get(&booking_id)
            .map(Invoice::balance_due)
            .ok_or_else(|| AccountingError::InvoiceNotFound(booking_id.to_string()))
    }

    /// Marks the invoice final at checkout
    pub fn finalize_invoice(
        &mut self,
        booking_id: BookingId,
        at: DateTime<Utc>,
    ) -> Result<(), AccountingError> {
        let invoice = self
            .invoices
            .get_mut(&booking_id)
            .ok_or_else(|| AccountingError::InvoiceNotFound(booking_id.to_string()))?;
        invoice.finalize(at);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Posting operations
    // ------------------------------------------------------------------

    /// Records a guest payment: Debit Cash, Credit Accounts Receivable
    pub fn post_payment(
        &mut self,
        booking_id: BookingId,
        amount: Money,
        method: PaymentMethod,
        actor: &str,
        at: DateTime<Utc>,
    ) -> Result<PaymentId, AccountingError> {
        if !amount.is_positive() {
            return Err(core_kernel::MoneyError::InvalidAmount(
                "payment amount must be positive".to_string(),
            )
            .into());
        }

        let invoice = self
            .invoices
            .get(&booking_id)
            .ok_or_else(|| AccountingError::InvoiceNotFound(booking_id.to_string()))?;
        let hotel_id = invoice.hotel_id;
        let invoice_id = invoice.id;
        let reference = invoice.invoice_number.clone();

        let cash = self.chart.resolve(hotel_id, AccountRole::Cash);
        let receivable = self.chart.resolve(hotel_id, AccountRole::AccountsReceivable);

        self.post(
            EntryDraft::new(format!("Payment received for {reference}"))
                .for_booking(booking_id)
                .debit(cash, amount)
                .credit(receivable, amount),
            at,
        )?;

        let payment = Payment::new(hotel_id, invoice_id, booking_id, amount, method, actor, at);
        let payment_id = payment.id;
        self.payments.push(payment);

        let invoice = self.invoices.get_mut(&booking_id).expect("checked above");
        invoice.apply_payment(amount, at);

        tracing::info!(%booking_id, amount = %amount, %method, "payment recorded");
        Ok(payment_id)
    }

    /// Issues a refund: Debit Accounts Receivable (reversing), Credit Cash
    ///
    /// `amount` is the positive sum to return; the stored payment row
    /// carries it negated.
    pub fn post_refund(
        &mut self,
        booking_id: BookingId,
        amount: Money,
        reason: &str,
        actor: &str,
        at: DateTime<Utc>,
    ) -> Result<PaymentId, AccountingError> {
        if !amount.is_positive() {
            return Err(core_kernel::MoneyError::InvalidAmount(
                "refund amount must be positive".to_string(),
            )
            .into());
        }

        let invoice = self
            .invoices
            .get(&booking_id)
            .ok_or_else(|| AccountingError::InvoiceNotFound(booking_id.to_string()))?;
        let hotel_id = invoice.hotel_id;
        let invoice_id = invoice.id;
        let reference = invoice.invoice_number.clone();

        let cash = self.chart.resolve(hotel_id, AccountRole::Cash);
        let receivable = self.chart.resolve(hotel_id, AccountRole::AccountsReceivable);

        self.post(
            EntryDraft::new(format!("Refund for {reference}: {reason}"))
                .for_booking(booking_id)
                .debit(receivable, amount)
                .credit(cash, amount),
            at,
        )?;

        let refund = Payment::new(
            hotel_id,
            invoice_id,
            booking_id,
            -amount,
            PaymentMethod::Refund,
            actor,
            at,
        )
        .with_notes(reason);
        let payment_id = refund.id;
        self.payments.push(refund);

        let invoice = self.invoices.get_mut(&booking_id).expect("checked above");
        invoice.apply_payment(-amount, at);

        tracing::info!(%booking_id, amount = %amount, reason, "refund issued");
        Ok(payment_id)
    }

    /// Posts the cancellation fee: raises the invoice total and
    /// Debit Accounts Receivable, Credit Cancellation Fee Revenue
    pub fn post_cancellation_fee(
        &mut self,
        booking_id: BookingId,
        fee: Money,
        at: DateTime<Utc>,
    ) -> Result<JournalEntryId, AccountingError> {
        self.post_fee(
            booking_id,
            fee,
            InvoiceLineKind::CancellationFee,
            AccountRole::CancellationFeeRevenue,
            "Cancellation fee",
            at,
        )
    }

    /// Posts the one-night no-show fee: raises the invoice total and
    /// Debit Accounts Receivable, Credit No-Show Fee Revenue
    pub fn post_no_show_fee(
        &mut self,
        booking_id: BookingId,
        fee: Money,
        at: DateTime<Utc>,
    ) -> Result<JournalEntryId, AccountingError> {
        self.post_fee(
            booking_id,
            fee,
            InvoiceLineKind::NoShowFee,
            AccountRole::NoShowFeeRevenue,
            "No-show fee",
            at,
        )
    }

    /// Recognises room revenue at checkout:
    /// Debit Accounts Receivable, Credit Room Revenue for the invoice total
    ///
    /// Idempotent per booking: a second call posts nothing and returns
    /// `None`.
    pub fn post_revenue_recognition(
        &mut self,
        booking_id: BookingId,
        at: DateTime<Utc>,
    ) -> Result<Option<JournalEntryId>, AccountingError> {
        if self.revenue_posted.contains(&booking_id) {
            return Ok(None);
        }

        let invoice = self
            .invoices
            .get(&booking_id)
            .ok_or_else(|| AccountingError::InvoiceNotFound(booking_id.to_string()))?;
        let hotel_id = invoice.hotel_id;
        let total = invoice.total();
        let reference = invoice.invoice_number.clone();

        let receivable = self.chart.resolve(hotel_id, AccountRole::AccountsReceivable);
        let revenue = self.chart.resolve(hotel_id, AccountRole::RoomRevenue);

        let entry_id = self.post(
            EntryDraft::new(format!("Room revenue for {reference}"))
                .for_booking(booking_id)
                .debit(receivable, total)
                .credit(revenue, total),
            at,
        )?;

        self.revenue_posted.insert(booking_id);
        tracing::info!(%booking_id, amount = %total, "room revenue recognised");
        Ok(Some(entry_id))
    }

    fn post_fee(
        &mut self,
        booking_id: BookingId,
        fee: Money,
        line_kind: InvoiceLineKind,
        revenue_role: AccountRole,
        label: &str,
        at: DateTime<Utc>,
    ) -> Result<JournalEntryId, AccountingError> {
        let invoice = self
            .invoices
            .get(&booking_id)
            .ok_or_else(|| AccountingError::InvoiceNotFound(booking_id.to_string()))?;
        if invoice.finalized_at.is_some() {
            return Err(AccountingError::InvoiceFinalized(
                invoice.invoice_number.clone(),
            ));
        }
        let hotel_id = invoice.hotel_id;
        let reference = invoice.invoice_number.clone();

        let receivable = self.chart.resolve(hotel_id, AccountRole::AccountsReceivable);
        let revenue = self.chart.resolve(hotel_id, revenue_role);

        let entry_id = self.post(
            EntryDraft::new(format!("{label} for {reference}"))
                .for_booking(booking_id)
                .debit(receivable, fee)
                .credit(revenue, fee),
            at,
        )?;

        let invoice = self.invoices.get_mut(&booking_id).expect("checked above");
        invoice.add_line(InvoiceLine::new(line_kind, label, fee), at);

        tracing::info!(%booking_id, amount = %fee, label, "fee posted");
        Ok(entry_id)
    }

    /// Validates and stores a journal entry, updating account balances
    fn post(&mut self, draft: EntryDraft, at: DateTime<Utc>) -> Result<JournalEntryId, AccountingError> {
        if !draft.is_balanced() {
            let (debits, credits) = draft.totals();
            return Err(AccountingError::UnbalancedEntry { debits, credits });
        }
        for line in &draft.lines {
            if !self.chart.contains(&line.account_id) {
                return Err(AccountingError::AccountNotFound(line.account_id.to_string()));
            }
        }

        let entry = JournalEntry {
            id: JournalEntryId::new_v7(),
            description: draft.description,
            booking_id: draft.booking_id,
            lines: draft.lines,
            posted_at: at,
        };

        for line in &entry.lines {
            let account = self.chart.get(&line.account_id).expect("validated above");
            let is_debit_normal = account.account_type.is_debit_normal();
            let change = match (is_debit_normal, line.side) {
                (true, LineSide::Debit) | (false, LineSide::Credit) => line.amount,
                (true, LineSide::Credit) | (false, LineSide::Debit) => -line.amount,
            };
            let balance = self
                .balances
                .entry(line.account_id)
                .or_insert_with(|| Money::zero(self.currency));
            *balance = balance.checked_add(&change)?;
        }

        let entry_id = entry.id;
        self.entries.push(entry);
        Ok(entry_id)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All journal entries, oldest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Journal entries caused by one booking
    pub fn entries_for_booking(&self, booking_id: BookingId) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .filter(|e| e.booking_id == Some(booking_id))
            .collect()
    }

    /// Payment rows for one booking, oldest first
    pub fn payments_for_booking(&self, booking_id: BookingId) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|p| p.booking_id == booking_id)
            .collect()
    }

    /// Current balance of a well-known account, zero if never posted to
    pub fn role_balance(&self, hotel_id: HotelId, role: AccountRole) -> Money {
        self.chart
            .find(hotel_id, role)
            .and_then(|id| self.balances.get(&id).copied())
            .unwrap_or_else(|| Money::zero(self.currency))
    }
}
