//! Left-to-right reduction of a token sequence.
//!
//! There is no precedence: `2 + 3 x 4` is `(2 + 3) x 4`.

use crate::core::types::{CalcError, InvalidReason, Token};

/// Parse operand text typed with `separator` as its decimal mark.
///
/// Rejects anything that does not parse to a finite `f64`.
pub fn parse_operand(text: &str, separator: char) -> Result<f64, CalcError> {
    let normalized = text.replace(separator, ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidOperation(
            InvalidReason::UnparsableOperand(text.to_string()),
        )),
    }
}

/// Fold `tokens` into a single value, starting from the first operand.
///
/// Fails if any intermediate total is non-finite or the sequence does not
/// alternate operand/operator ending on an operand.
pub fn fold_tokens(tokens: &[Token], separator: char) -> Result<f64, CalcError> {
    let (first, rest) = match tokens.split_first() {
        Some((Token::Operand(text), rest)) => (text, rest),
        Some((Token::Operator(op), _)) => {
            return Err(CalcError::InvalidOperation(InvalidReason::MissingOperand(
                *op,
            )));
        }
        None => {
            return Err(CalcError::InvalidOperation(
                InvalidReason::UnparsableOperand(String::new()),
            ));
        }
    };

    let mut total = parse_operand(first, separator)?;
    for pair in rest.chunks(2) {
        let op = match &pair[0] {
            Token::Operator(op) => *op,
            // Two operands in a row: the second has nothing to combine with.
            Token::Operand(text) => {
                return Err(CalcError::InvalidOperation(
                    InvalidReason::UnparsableOperand(text.clone()),
                ));
            }
        };
        let rhs = match pair.get(1) {
            Some(Token::Operand(text)) => parse_operand(text, separator)?,
            _ => return Err(CalcError::InvalidOperation(InvalidReason::MissingOperand(op))),
        };
        total = op.apply(total, rhs);
        if !total.is_finite() {
            return Err(CalcError::InvalidOperation(InvalidReason::NonFinite(op)));
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Operator;

    fn operand(text: &str) -> Token {
        Token::Operand(text.to_string())
    }

    #[test]
    fn parse_operand_normalizes_separator() {
        assert_eq!(parse_operand("2,5", ','), Ok(2.5));
        assert_eq!(parse_operand("2.5", '.'), Ok(2.5));
        assert_eq!(parse_operand("7", ','), Ok(7.0));
    }

    #[test]
    fn parse_operand_rejects_garbage() {
        assert!(parse_operand("", ',').is_err());
        assert!(parse_operand("1,2,3", ',').is_err());
        assert!(parse_operand("inf", ',').is_err());
    }

    #[test]
    fn fold_is_left_associative() {
        let tokens = vec![
            operand("2"),
            Token::Operator(Operator::Add),
            operand("3"),
            Token::Operator(Operator::Multiply),
            operand("4"),
        ];
        assert_eq!(fold_tokens(&tokens, ','), Ok(20.0));
    }

    #[test]
    fn fold_single_operand_is_identity() {
        assert_eq!(fold_tokens(&[operand("4,25")], ','), Ok(4.25));
    }

    #[test]
    fn fold_division_by_zero_is_invalid() {
        let tokens = vec![operand("5"), Token::Operator(Operator::Divide), operand("0")];
        assert_eq!(
            fold_tokens(&tokens, ','),
            Err(CalcError::InvalidOperation(InvalidReason::NonFinite(
                Operator::Divide
            )))
        );
    }

    #[test]
    fn fold_dangling_operator_is_invalid() {
        let tokens = vec![operand("5"), Token::Operator(Operator::Subtract)];
        assert_eq!(
            fold_tokens(&tokens, ','),
            Err(CalcError::InvalidOperation(InvalidReason::MissingOperand(
                Operator::Subtract
            )))
        );
    }

    #[test]
    fn fold_overflow_is_invalid() {
        let big = "9".repeat(200);
        let tokens = vec![
            operand(&big),
            Token::Operator(Operator::Multiply),
            operand(&big),
        ];
        assert!(fold_tokens(&tokens, ',').is_err());
    }
}
