//! Display-string rendering.

use crate::core::types::Token;

/// Digits after the decimal mark in an evaluated result.
pub const RESULT_DECIMALS: usize = 2;

/// Render the pending expression: tokens joined by single spaces, followed by
/// the buffer when it is non-empty, with `.` shown as `separator`.
pub fn render_expression(tokens: &[Token], buffer: &str, separator: char) -> String {
    let mut parts: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    if !buffer.is_empty() {
        parts.push(buffer.to_string());
    }
    localize(&parts.join(" "), separator)
}

/// Format an evaluated value with exactly [`RESULT_DECIMALS`] decimals, using
/// `separator` as the decimal mark.
///
/// Values that round to zero never render with a minus sign.
pub fn format_result(value: f64, separator: char) -> String {
    let formatted = format!("{:.*}", RESULT_DECIMALS, value);
    let negative_zero = formatted.starts_with('-')
        && formatted[1..].chars().all(|c| c == '0' || c == '.');
    if negative_zero {
        return localize(&formatted[1..], separator);
    }
    localize(&formatted, separator)
}

fn localize(text: &str, separator: char) -> String {
    text.replace('.', separator.encode_utf8(&mut [0; 4]))
}
