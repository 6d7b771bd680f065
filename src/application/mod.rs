//! Application layer containing the command dispatch for the account.
//!
//! This module defines the `Teller` which owns the single `Account` and turns
//! menu commands into account operations.

pub mod teller;
