use super::input::{Input, InputReader};
use super::menu::{MenuChoice, render_menu};
use crate::application::teller::{Command, Outcome, Teller};
use crate::domain::account::{Account, Balance};
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::info;

/// The interactive menu loop.
///
/// Generic over its streams so it can be driven by Stdin/Stdout in the binary
/// and by in-memory buffers in tests. Regular output goes to `out`, account
/// errors go to `err`.
pub struct Session<R: BufRead, W: Write, E: Write> {
    input: InputReader<R>,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input: InputReader::new(input),
            out,
            err,
        }
    }

    /// Creates the account, prompting for the initial balance unless one is
    /// supplied.
    ///
    /// Any numeric value is accepted, including negative ones. Malformed
    /// entries are rejected and the prompt repeats.
    pub fn open_account(
        &mut self,
        id: &str,
        initial_balance: Option<Decimal>,
    ) -> Result<Account> {
        let initial_balance = match initial_balance {
            Some(balance) => balance,
            None => loop {
                self.prompt("Enter initial balance: ")?;
                match self.input.read_amount()? {
                    Input::Value(balance) => break balance,
                    Input::Invalid(e) => writeln!(self.out, "{e}")?,
                    Input::Closed => return Err(BankError::MissingInitialBalance),
                }
            },
        };

        let account = Account::new(id, Balance::new(initial_balance));
        writeln!(self.out, "Bank Account Created: #{}", account.id())?;
        Ok(account)
    }

    /// Runs the menu loop until the user exits or input runs out, then
    /// returns the account in its final state.
    pub fn run(&mut self, mut teller: Teller) -> Result<Account> {
        loop {
            let Some(command) = self.next_command()? else {
                info!("input closed, ending session");
                break;
            };

            match teller.execute(command) {
                Ok(outcome) => {
                    self.report(outcome)?;
                    if outcome == Outcome::Exited {
                        break;
                    }
                }
                Err(e) => writeln!(self.err, "Error: {e}")?,
            }
        }

        self.out.flush()?;
        Ok(teller.into_account())
    }

    /// Shows the menu until a complete command has been entered.
    ///
    /// Returns `None` once the input is exhausted.
    fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            render_menu(&mut self.out)?;
            self.prompt("Enter your choice: ")?;

            let choice = match self.input.read_choice()? {
                Input::Value(choice) => choice,
                Input::Invalid(e) => {
                    writeln!(self.out, "{e}")?;
                    continue;
                }
                Input::Closed => return Ok(None),
            };

            let command = match choice {
                MenuChoice::Deposit => self
                    .read_amount("Enter deposit amount: ")?
                    .map(Command::Deposit),
                MenuChoice::Withdraw => self
                    .read_amount("Enter withdrawal amount: ")?
                    .map(Command::Withdraw),
                MenuChoice::CheckBalance => Input::Value(Command::CheckBalance),
                MenuChoice::CloseAccount => Input::Value(Command::Close),
                MenuChoice::Exit => Input::Value(Command::Exit),
            };

            match command {
                Input::Value(command) => return Ok(Some(command)),
                Input::Invalid(e) => writeln!(self.out, "{e}")?,
                Input::Closed => return Ok(None),
            }
        }
    }

    /// Writes the account state as a single JSON line.
    pub fn write_summary(&mut self, account: &Account) -> Result<()> {
        let json = serde_json::to_string(account)?;
        writeln!(self.out, "{json}")?;
        self.out.flush()?;
        Ok(())
    }

    fn read_amount(&mut self, prompt: &str) -> Result<Input<Decimal>> {
        self.prompt(prompt)?;
        Ok(self.input.read_amount()?)
    }

    fn report(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Deposited(amount) => writeln!(self.out, "Depositing ${amount}...")?,
            Outcome::Withdrew(amount) => writeln!(self.out, "Withdrawal ${amount}...")?,
            Outcome::Balance(balance) => writeln!(self.out, "Current Balance: ${balance}")?,
            Outcome::Closed => writeln!(self.out, "Account closed.")?,
            Outcome::Exited => writeln!(self.out, "Exiting...")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}
