//! Chart of accounts

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use core_kernel::{AccountId, HotelId};

/// Account classification for double-entry balance rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountType {
    /// Asset and expense accounts grow on the debit side
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }
}

/// The well-known accounts the booking lifecycle posts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountRole {
    Cash,
    AccountsReceivable,
    RoomRevenue,
    CancellationFeeRevenue,
    NoShowFeeRevenue,
}

impl AccountRole {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountRole::Cash | AccountRole::AccountsReceivable => AccountType::Asset,
            AccountRole::RoomRevenue
            | AccountRole::CancellationFeeRevenue
            | AccountRole::NoShowFeeRevenue => AccountType::Revenue,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccountRole::Cash => "Cash",
            AccountRole::AccountsReceivable => "Accounts Receivable",
            AccountRole::RoomRevenue => "Room Revenue",
            AccountRole::CancellationFeeRevenue => "Cancellation Fee Revenue",
            AccountRole::NoShowFeeRevenue => "No-Show Fee Revenue",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A ledger account scoped to one hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Owning hotel
    pub hotel_id: HotelId,
    /// Account name, e.g. "Accounts Receivable"
    pub name: String,
    /// Classification
    pub account_type: AccountType,
}

impl Account {
    pub fn new(hotel_id: HotelId, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: AccountId::new_v7(),
            hotel_id,
            name: name.into(),
            account_type,
        }
    }
}

/// Per-hotel account directory with get-or-create semantics
///
/// Accounts are keyed by `(hotel, name)`; looking one up that does not
/// exist yet creates it, so a fresh hotel needs no seeding step before
/// its first posting.
#[derive(Debug, Default)]
pub struct ChartOfAccounts {
    accounts: HashMap<AccountId, Account>,
    by_name: HashMap<(HotelId, String), AccountId>,
}

impl ChartOfAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the named account for a hotel, creating it on first use
    pub fn get_or_create(
        &mut self,
        hotel_id: HotelId,
        account_type: AccountType,
        name: &str,
    ) -> AccountId {
        if let Some(id) = self.by_name.get(&(hotel_id, name.to_string())) {
            return *id;
        }
        let account = Account::new(hotel_id, name, account_type);
        let id = account.id;
        self.by_name.insert((hotel_id, name.to_string()), id);
        self.accounts.insert(id, account);
        tracing::debug!(account = name, %hotel_id, "created ledger account");
        id
    }

    /// Resolves one of the well-known booking accounts
    pub fn resolve(&mut self, hotel_id: HotelId, role: AccountRole) -> AccountId {
        self.get_or_create(hotel_id, role.account_type(), role.name())
    }

    /// Looks up one of the well-known booking accounts without creating it
    pub fn find(&self, hotel_id: HotelId, role: AccountRole) -> Option<AccountId> {
        self.by_name
            .get(&(hotel_id, role.name().to_string()))
            .copied()
    }

    /// Looks up an account by id
    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// True if the account exists
    pub fn contains(&self, id: &AccountId) -> bool {
        self.accounts.contains_key(id)
    }
}
