//! Command implementations

pub mod divide;
pub mod list;
pub mod run;
pub mod script;
