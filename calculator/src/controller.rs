//! Intent dispatch and display selection.
//!
//! [`Calculator`] owns one [`Accumulator`] and decides what the display shows
//! after each intent: the pending expression, the zero indicator, or the error
//! indicator. Evaluation failures are absorbed here and never reach callers.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::accumulator::{Accumulator, DigitOutcome};
use crate::core::intent::Intent;
use crate::io::config::CalculatorConfig;

/// Which kind of text the display currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Initial state or after clear.
    Zero,
    /// Pending expression or last result.
    Expression,
    /// Last evaluation failed.
    Error,
}

/// Serializable view of calculator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub display: String,
    pub view: View,
    pub tokens: Vec<String>,
    pub buffer: String,
    pub reset_on_digit: bool,
}

/// A calculator: accumulator plus display.
#[derive(Debug, Clone)]
pub struct Calculator {
    accumulator: Accumulator,
    zero_indicator: String,
    error_indicator: String,
    view: View,
    display: String,
}

impl Calculator {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            accumulator: Accumulator::new(config.decimal_separator),
            zero_indicator: config.zero_indicator.clone(),
            error_indicator: config.error_indicator.clone(),
            view: View::Zero,
            display: config.zero_indicator.clone(),
        }
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Apply one intent and return the resulting display text.
    pub fn dispatch(&mut self, intent: Intent) -> &str {
        match intent {
            Intent::Digit(ch) => {
                if self.accumulator.append_digit(ch) == DigitOutcome::Rejected {
                    debug!(digit = %ch, "digit rejected");
                    return &self.display;
                }
                self.show_expression();
            }
            Intent::Operator(op) => {
                // The display keeps its text until the next operand is typed.
                if !self.accumulator.set_operator(op) {
                    debug!(operator = %op, "no operand pending, operator ignored");
                }
            }
            Intent::Evaluate => match self.accumulator.evaluate() {
                Ok(Some(value)) => {
                    debug!(value, "evaluated");
                    self.show_expression();
                }
                Ok(None) => debug!("nothing to evaluate"),
                Err(err) => {
                    info!(error = %err, "evaluation failed, state reset");
                    self.view = View::Error;
                    self.display = self.error_indicator.clone();
                }
            },
            Intent::Clear => self.clear(),
        }
        &self.display
    }

    /// Map a button label to an intent and apply it.
    ///
    /// Unknown labels leave the state untouched.
    pub fn press(&mut self, label: &str) -> &str {
        match Intent::from_label(label, self.accumulator.separator()) {
            Some(intent) => self.dispatch(intent),
            None => {
                warn!(label, "unrecognized button label");
                &self.display
            }
        }
    }

    /// Press `labels` in order and return the final display text.
    pub fn press_all<S: AsRef<str>>(&mut self, labels: &[S]) -> &str {
        for label in labels {
            self.press(label.as_ref());
        }
        &self.display
    }

    /// Reset to the start-up state.
    pub fn clear(&mut self) {
        self.accumulator.clear();
        self.view = View::Zero;
        self.display = self.zero_indicator.clone();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            view: self.view,
            tokens: self
                .accumulator
                .tokens()
                .iter()
                .map(ToString::to_string)
                .collect(),
            buffer: self.accumulator.buffer().to_string(),
            reset_on_digit: self.accumulator.reset_on_digit(),
        }
    }

    fn show_expression(&mut self) {
        self.view = View::Expression;
        self.display = self.accumulator.render();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}
