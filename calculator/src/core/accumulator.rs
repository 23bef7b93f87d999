//! Expression accumulator: the calculator's whole mutable state.
//!
//! Operations mirror the calculator buttons. None of them perform I/O or pick
//! what the display shows; see [`crate::controller`] for that.

use crate::core::evaluate::fold_tokens;
use crate::core::render::{format_result, render_expression};
use crate::core::types::{CalcError, Operator, Token};

/// Result of [`Accumulator::append_digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOutcome {
    /// Buffer was extended.
    Appended,
    /// Buffer was replaced because the reset flag was set.
    Replaced,
    /// Token rejected; state unchanged.
    Rejected,
}

/// Pending tokens, the operand being typed, and the reset flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    separator: char,
    tokens: Vec<Token>,
    buffer: String,
    reset_on_digit: bool,
}

impl Accumulator {
    /// Empty accumulator whose operands use `separator` as decimal mark.
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            tokens: Vec::new(),
            buffer: String::new(),
            reset_on_digit: false,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn reset_on_digit(&self) -> bool {
        self.reset_on_digit
    }

    /// True when nothing has been typed or queued.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.buffer.is_empty()
    }

    /// Type one digit or the decimal separator into the current operand.
    ///
    /// The separator is refused when the operand is empty or already has one.
    /// Any other character is refused.
    pub fn append_digit(&mut self, token: char) -> DigitOutcome {
        if token == self.separator {
            if self.buffer.is_empty() || self.buffer.contains(self.separator) {
                return DigitOutcome::Rejected;
            }
        } else if !token.is_ascii_digit() {
            return DigitOutcome::Rejected;
        }

        if self.reset_on_digit {
            self.buffer.clear();
            self.buffer.push(token);
            self.reset_on_digit = false;
            DigitOutcome::Replaced
        } else {
            self.buffer.push(token);
            DigitOutcome::Appended
        }
    }

    /// Queue the current operand followed by `op`.
    ///
    /// Returns `false` (and keeps the previously queued operator) when no
    /// operand has been typed.
    pub fn set_operator(&mut self, op: Operator) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        let operand = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::Operand(operand));
        self.tokens.push(Token::Operator(op));
        true
    }

    /// Reduce the queued expression.
    ///
    /// `Ok(None)` when there is nothing to evaluate. On success the formatted
    /// result becomes the current operand and the next digit replaces it. On
    /// error every field is reset.
    pub fn evaluate(&mut self) -> Result<Option<f64>, CalcError> {
        if self.is_empty() {
            return Ok(None);
        }
        if !self.buffer.is_empty() {
            let operand = std::mem::take(&mut self.buffer);
            self.tokens.push(Token::Operand(operand));
        }

        match fold_tokens(&self.tokens, self.separator) {
            Ok(value) => {
                self.tokens.clear();
                self.buffer = format_result(value, self.separator);
                self.reset_on_digit = true;
                Ok(Some(value))
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Drop all pending input.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.buffer.clear();
        self.reset_on_digit = false;
    }

    /// Pending expression as display text.
    pub fn render(&self) -> String {
        render_expression(&self.tokens, &self.buffer, self.separator)
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(',')
    }
}
