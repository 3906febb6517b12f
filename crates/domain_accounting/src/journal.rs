//! Journal entries and lines
//!
//! A journal entry is built as an [`EntryDraft`] and only becomes a
//! persisted [`JournalEntry`] once the ledger has verified it balances.
//! Posted entries are immutable; corrections are new reversing entries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AccountId, BookingId, JournalEntryId, Money};

/// Which side of the entry a line sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSide {
    Debit,
    Credit,
}

/// A single line of a journal entry; amounts are always positive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    pub id: Uuid,
    pub account_id: AccountId,
    pub amount: Money,
    pub side: LineSide,
}

impl JournalLine {
    pub fn debit(account_id: AccountId, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            amount,
            side: LineSide::Debit,
        }
    }

    pub fn credit(account_id: AccountId, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            amount,
            side: LineSide::Credit,
        }
    }
}

/// An un-posted journal entry under construction
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub description: String,
    pub booking_id: Option<BookingId>,
    pub lines: Vec<JournalLine>,
}

impl EntryDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            booking_id: None,
            lines: Vec::new(),
        }
    }

    /// Ties the entry to the booking that caused it
    pub fn for_booking(mut self, booking_id: BookingId) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    /// Adds a debit line
    pub fn debit(mut self, account_id: AccountId, amount: Money) -> Self {
        self.lines.push(JournalLine::debit(account_id, amount));
        self
    }

    /// Adds a credit line
    pub fn credit(mut self, account_id: AccountId, amount: Money) -> Self {
        self.lines.push(JournalLine::credit(account_id, amount));
        self
    }

    /// Sums of the two sides
    pub fn totals(&self) -> (Decimal, Decimal) {
        let mut debits = Decimal::ZERO;
        let mut credits = Decimal::ZERO;
        for line in &self.lines {
            match line.side {
                LineSide::Debit => debits += line.amount.amount(),
                LineSide::Credit => credits += line.amount.amount(),
            }
        }
        (debits, credits)
    }

    /// Whether debit and credit totals are exactly equal
    pub fn is_balanced(&self) -> bool {
        let (debits, credits) = self.totals();
        debits == credits
    }
}

/// An immutable, posted journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry identifier
    pub id: JournalEntryId,
    /// Description, e.g. "Payment received for BKG-20250310-7C1A2B"
    pub description: String,
    /// Booking that caused the entry, if any
    pub booking_id: Option<BookingId>,
    /// Entry lines; debits and credits sum to the same amount
    pub lines: Vec<JournalLine>,
    /// When the entry was posted
    pub posted_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Sum of the debit lines (equal to the credit sum once posted)
    pub fn total_debits(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|l| l.side == LineSide::Debit)
            .map(|l| l.amount.amount())
            .sum()
    }

    /// Sum of the credit lines
    pub fn total_credits(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|l| l.side == LineSide::Credit)
            .map(|l| l.amount.amount())
            .sum()
    }
}
