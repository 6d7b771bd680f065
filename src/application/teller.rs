use crate::domain::account::{Account, Balance};
use crate::error::AccountError;
use rust_decimal::Decimal;
use tracing::debug;

/// A request against the account, one per menu selection.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Deposit(Decimal),
    Withdraw(Decimal),
    CheckBalance,
    Close,
    Exit,
}

/// The successful result of a [`Command`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Outcome {
    Deposited(Decimal),
    Withdrew(Decimal),
    Balance(Balance),
    Closed,
    Exited,
}

/// Executes commands against the single account it owns.
///
/// The teller holds the account by value for the whole session and hands it
/// back through [`Teller::into_account`] once the session is over.
pub struct Teller {
    account: Account,
}

impl Teller {
    /// Creates a new `Teller` owning `account`.
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    /// Runs `command` against the account.
    ///
    /// Account rejections are returned as-is; they never end the session.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, AccountError> {
        debug!(account = %self.account.id(), ?command, "executing command");

        let result = match command {
            Command::Deposit(amount) => self
                .account
                .deposit(amount)
                .map(|()| Outcome::Deposited(amount)),
            Command::Withdraw(amount) => self
                .account
                .withdraw(amount)
                .map(|()| Outcome::Withdrew(amount)),
            Command::CheckBalance => Ok(Outcome::Balance(self.account.balance())),
            Command::Close => {
                self.account.close();
                Ok(Outcome::Closed)
            }
            Command::Exit => Ok(Outcome::Exited),
        };

        if let Err(e) = &result {
            debug!(account = %self.account.id(), ?command, error = %e, "command rejected");
        }
        result
    }

    /// Consumes the teller and returns the final state of the account.
    pub fn into_account(self) -> Account {
        self.account
    }
}
