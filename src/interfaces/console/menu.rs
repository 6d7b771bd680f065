use crate::error::InputError;
use std::fmt;
use std::io::{self, Write};

/// One of the five entries of the main menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    CheckBalance,
    CloseAccount,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::CloseAccount,
        MenuChoice::Exit,
    ];

    /// The number the user types to select this entry.
    pub fn number(self) -> i64 {
        match self {
            MenuChoice::Deposit => 1,
            MenuChoice::Withdraw => 2,
            MenuChoice::CheckBalance => 3,
            MenuChoice::CloseAccount => 4,
            MenuChoice::Exit => 5,
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(InputError::OutOfRange(value))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::CloseAccount => "Close Account",
            MenuChoice::Exit => "Exit",
        };
        write!(f, "{}. {}", self.number(), label)
    }
}

/// Writes the menu header and its entries.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nMenu:")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{choice}")?;
    }
    Ok(())
}
