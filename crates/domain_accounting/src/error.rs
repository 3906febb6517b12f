//! Accounting domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the accounting domain
#[derive(Debug, Error)]
pub enum AccountingError {
    /// Debit and credit lines do not sum to the same amount.
    /// Programming-error class: the enclosing operation must abort
    /// without writing anything.
    #[error("Unbalanced journal entry: debits={debits}, credits={credits}")]
    UnbalancedEntry { debits: Decimal, credits: Decimal },

    /// Posting referenced an account missing from the chart
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// No invoice exists for the booking
    #[error("No invoice for booking {0}")]
    InvoiceNotFound(String),

    /// The booking already has its invoice
    #[error("Invoice already exists for booking {0}")]
    InvoiceAlreadyExists(String),

    /// Charge attempted on a finalized invoice
    #[error("Invoice {0} is finalized; no further charges accepted")]
    InvoiceFinalized(String),

    /// Arithmetic failure while building an entry
    #[error("Calculation error: {0}")]
    Calculation(#[from] MoneyError),
}
