//! Shared utilities for the unittest-rs CLI

pub mod report;
pub mod table;

pub use report::*;
pub use table::*;
