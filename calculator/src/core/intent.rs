//! Discrete user actions and their derivation from button labels.

use crate::core::types::Operator;

/// One button press, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A digit or the decimal separator.
    Digit(char),
    Operator(Operator),
    Evaluate,
    Clear,
}

impl Intent {
    /// Map a button label to an intent.
    ///
    /// `separator` is the decimal mark accepted as a digit key. Returns `None`
    /// for labels no button carries.
    pub fn from_label(label: &str, separator: char) -> Option<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && (ch.is_ascii_digit() || ch == separator)
        {
            return Some(Intent::Digit(ch));
        }

        match label {
            "=" => Some(Intent::Evaluate),
            "C" | "c" => Some(Intent::Clear),
            other => Operator::from_label(other).map(Intent::Operator),
        }
    }
}
