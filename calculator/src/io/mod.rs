//! I/O helpers for calculator commands.

pub mod config;
pub mod script;
