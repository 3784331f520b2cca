//! unittest-rs library
//!
//! Command implementations and the demonstration suites behind the
//! `unittest-rs` binary.

pub mod cli;
pub mod commands;
pub mod demos;
pub mod utils;
