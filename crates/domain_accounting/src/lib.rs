//! Accounting Domain - Double-Entry Ledger for Booking Finances
//!
//! Every money movement in the booking lifecycle lands here as exactly
//! one balanced journal entry:
//!
//! - Revenue recognition at checkout: Debit Accounts Receivable,
//!   Credit Room Revenue
//! - Payment received: Debit Cash, Credit Accounts Receivable
//! - Cancellation / no-show fee: Debit Accounts Receivable, Credit the
//!   fee revenue account (the fee is also added to the invoice total)
//! - Refund: Debit Accounts Receivable (reversing), Credit Cash
//!
//! An entry whose debit and credit lines do not sum to the same amount
//! is a programming error and is rejected with
//! [`AccountingError::UnbalancedEntry`] before anything is written.
//!
//! The ledger also owns the invoice attached 1:1 to each booking and
//! the append-only payment records; a refund is a new negative payment,
//! never an edit to a prior one.

pub mod account;
pub mod error;
pub mod invoice;
pub mod journal;
pub mod ledger;
pub mod payment;

pub use account::{Account, AccountRole, AccountType, ChartOfAccounts};
pub use error::AccountingError;
pub use invoice::{Invoice, InvoiceLine, InvoiceLineKind, InvoiceStatus};
pub use journal::{EntryDraft, JournalEntry, JournalLine, LineSide};
pub use ledger::AccountingLedger;
pub use payment::{Payment, PaymentMethod};
