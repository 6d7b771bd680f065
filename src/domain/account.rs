use crate::error::AccountError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// A monetary value held by an account.
///
/// Wraps `rust_decimal::Decimal` so balances are exact and can't be mixed up
/// with raw transaction amounts by accident.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// `None` if the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Open,
    Closed,
}

/// A single bank account.
///
/// The account starts `Open` and can only move to `Closed`, which is terminal.
/// Every mutating operation checks, in order: that the account is open, that
/// the amount is not negative and, for withdrawals, that the balance covers it.
/// A rejected operation never touches the balance.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Account {
    id: String,
    balance: Balance,
    status: AccountStatus,
}

impl Account {
    /// Opens an account seeded with `initial_balance`.
    ///
    /// The initial balance is taken as given, negative values included.
    pub fn new(id: impl Into<String>, initial_balance: Balance) -> Self {
        let id = id.into();
        if initial_balance < Balance::ZERO {
            warn!(
                account = %id,
                balance = %initial_balance,
                "account opened with a negative balance"
            );
        }
        info!(account = %id, balance = %initial_balance, "account opened");
        Self {
            id,
            balance: initial_balance,
            status: AccountStatus::Open,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current balance. Readable after the account is closed.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == AccountStatus::Open
    }

    /// Adds `amount` to the balance.
    ///
    /// A deposit that would push the balance past `Decimal::MAX` is rejected.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.ensure_open()?;
        ensure_non_negative(amount)?;
        let Some(balance) = self.balance.checked_add(Balance(amount)) else {
            debug!(
                account = %self.id,
                %amount,
                balance = %self.balance,
                "deposit overflow rejected"
            );
            return Err(AccountError::AmountTooLarge);
        };
        self.balance = balance;
        Ok(())
    }

    /// Removes `amount` from the balance if it is covered.
    ///
    /// Withdrawing zero is allowed and leaves the balance as is.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.ensure_open()?;
        ensure_non_negative(amount)?;
        if Balance(amount) > self.balance {
            debug!(account = %self.id, %amount, balance = %self.balance, "overdraw rejected");
            return Err(AccountError::InsufficientFunds);
        }
        // 0 <= amount <= balance, the difference always fits
        self.balance = self
            .balance
            .checked_sub(Balance(amount))
            .ok_or(AccountError::InsufficientFunds)?;
        Ok(())
    }

    /// Closes the account. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.is_open() {
            info!(account = %self.id, "account closed");
        }
        self.status = AccountStatus::Closed;
    }

    fn ensure_open(&self) -> Result<(), AccountError> {
        match self.status {
            AccountStatus::Open => Ok(()),
            AccountStatus::Closed => Err(AccountError::AccountClosed),
        }
    }
}

fn ensure_non_negative(amount: Decimal) -> Result<(), AccountError> {
    if amount < Decimal::ZERO {
        Err(AccountError::NegativeAmount)
    } else {
        Ok(())
    }
}
