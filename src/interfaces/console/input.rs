use super::menu::MenuChoice;
use crate::error::InputError;
use rust_decimal::Decimal;
use std::io::{self, BufRead};
use std::str::FromStr;

/// The result of reading one validated line.
#[derive(Debug, PartialEq)]
pub enum Input<T> {
    Value(T),
    /// The line was read and discarded because it did not parse.
    Invalid(InputError),
    /// The source reached end of input.
    Closed,
}

impl<T> Input<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Input<U> {
        match self {
            Input::Value(value) => Input::Value(f(value)),
            Input::Invalid(e) => Input::Invalid(e),
            Input::Closed => Input::Closed,
        }
    }
}

/// Reads validated values from a line-oriented source (e.g. locked Stdin).
///
/// Every read consumes a whole line, so a rejected entry never leaves
/// leftovers behind for the next prompt.
pub struct InputReader<R: BufRead> {
    source: R,
    line: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            line: String::new(),
        }
    }

    /// Reads a menu selection.
    pub fn read_choice(&mut self) -> io::Result<Input<MenuChoice>> {
        self.read_with(parse_choice)
    }

    /// Reads a decimal amount. Negative values parse fine; rejecting them is
    /// up to the account.
    pub fn read_amount(&mut self) -> io::Result<Input<Decimal>> {
        self.read_with(parse_amount)
    }

    fn read_with<T>(
        &mut self,
        parse: impl FnOnce(&str) -> Result<T, InputError>,
    ) -> io::Result<Input<T>> {
        self.line.clear();
        if self.source.read_line(&mut self.line)? == 0 {
            return Ok(Input::Closed);
        }
        Ok(match parse(self.line.trim()) {
            Ok(value) => Input::Value(value),
            Err(e) => Input::Invalid(e),
        })
    }
}

fn parse_choice(text: &str) -> Result<MenuChoice, InputError> {
    let number: i64 = text.parse().map_err(|_| InputError::NotANumber)?;
    MenuChoice::try_from(number)
}

fn parse_amount(text: &str) -> Result<Decimal, InputError> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| InputError::InvalidAmount)
}
