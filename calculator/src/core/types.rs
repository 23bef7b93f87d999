//! Shared deterministic types for the calculator core.
//!
//! These types define the contract between the accumulator, the evaluator and
//! the renderer. They hold no I/O state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the display for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '÷',
        }
    }

    /// Map a button label to an operator.
    ///
    /// Accepts the display symbols plus the `*`, `/` and `×` aliases.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "x" | "X" | "*" | "×" => Some(Operator::Multiply),
            "÷" | "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operation to `(lhs, rhs)`. IEEE semantics: may be non-finite.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Entry in the token sequence.
///
/// Operands keep the text the user typed (with the configured decimal
/// separator) until evaluation parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Operand(String),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(text) => f.write_str(text),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Why an evaluation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Operand text did not parse to a finite number.
    UnparsableOperand(String),
    /// Running total became infinite or NaN after applying an operator.
    NonFinite(Operator),
    /// Token sequence ended with an operator.
    MissingOperand(Operator),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::UnparsableOperand(text) => write!(f, "operand '{text}' is not a number"),
            InvalidReason::NonFinite(op) => write!(f, "'{op}' produced a non-finite result"),
            InvalidReason::MissingOperand(op) => write!(f, "'{op}' has no right-hand operand"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid operation: {0}")]
    InvalidOperation(InvalidReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_operators() {
        assert_eq!(Operator::from_label("+"), Some(Operator::Add));
        assert_eq!(Operator::from_label("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_label("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_label("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_label("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_label("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_label("%"), None);
        assert_eq!(Operator::from_label("++"), None);
    }

    #[test]
    fn divide_by_zero_is_not_finite() {
        assert!(!Operator::Divide.apply(5.0, 0.0).is_finite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn error_message_names_the_operand() {
        let err = CalcError::InvalidOperation(InvalidReason::UnparsableOperand("1,2,3".into()));
        assert_eq!(
            err.to_string(),
            "invalid operation: operand '1,2,3' is not a number"
        );
    }
}
