//! Command-line front end for `cukegen`.
//!
//! The binary reads example sentences and prints the step expression inferred
//! for each. The modules are exposed as a library so behaviour tests can drive
//! the same code paths without spawning a process.

pub mod app;
pub mod config;
pub mod definition;
pub mod error;
pub mod logging;
