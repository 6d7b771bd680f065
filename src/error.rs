use thiserror::Error;

/// Rejections raised by [`Account`](crate::domain::account::Account) operations.
///
/// All of them are recoverable: the account is left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount cannot be negative!")]
    NegativeAmount,
    #[error("Insufficient funds!")]
    InsufficientFunds,
    #[error("Account is closed for transactions!")]
    AccountClosed,
    #[error("Amount is too large for this account!")]
    AmountTooLarge,
}

/// Malformed console input. Never surfaced as an [`AccountError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Enter a number (1-5).")]
    NotANumber,
    #[error("Invalid option. Try again.")]
    OutOfRange(i64),
    #[error("Invalid amount. Enter a numeric value.")]
    InvalidAmount,
}

/// Failures that end the program.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("no initial balance was provided")]
    MissingInitialBalance,
}

pub type Result<T> = std::result::Result<T, BankError>;
