//! Cross-suite assertions

use domain_accounting::AccountingLedger;

/// Every posted journal entry must balance to the cent
pub fn assert_ledger_balanced(ledger: &AccountingLedger) {
    for entry in ledger.entries() {
        assert_eq!(
            entry.total_debits(),
            entry.total_credits(),
            "unbalanced journal entry: {}",
            entry.description
        );
    }
}
