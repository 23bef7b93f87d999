//! Button-driven calculator with left-to-right evaluation.
//!
//! Operands and operators are accumulated one button press at a time and
//! reduced strictly left to right, with no operator precedence. The crate is
//! split the usual way:
//!
//! - **[`core`]**: Pure, deterministic logic (accumulation, evaluation,
//!   rendering, intent mapping). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files, button scripts).
//!
//! [`controller`] ties the two together: it maps intents to accumulator
//! operations and decides what the display shows.

pub mod controller;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
