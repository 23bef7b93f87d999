//! Deterministic, pure calculator logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! state and return deterministic outputs suitable for tests.

pub mod accumulator;
pub mod evaluate;
pub mod intent;
pub mod render;
pub mod types;
