//! Domain layer: the account state machine and its value objects.

pub mod account;
