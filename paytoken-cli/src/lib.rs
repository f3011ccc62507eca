//! Paytoken CLI library
//!
//! Command implementations shared by the `paytoken` binary and its tests.

pub mod commands;
pub mod ui;
