//! Interactive console front end: menu rendering, validated input and the
//! session loop.

pub mod input;
pub mod menu;
pub mod session;
