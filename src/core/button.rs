//! The logical keypad vocabulary.
//!
//! A [`Button`] is one press on the calculator face. The engine consumes
//! buttons directly; the label mapping exists for scripted sessions and
//! for a presentation layer that identifies its widgets by face label.

use serde::{Deserialize, Serialize};

use crate::core::operator::Operator;
use crate::core::ButtonError;

/// One logical button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// The percent key: divides the displayed value by 100.
    Percent,
    /// The sign-toggle key: multiplies the displayed value by -1.
    Negate,
    /// One of the four binary operator keys.
    Op(Operator),
    /// The equals key: applies the pending operation.
    Equals,
    /// The clear key: resets display and trace.
    Clear,
}

impl Button {
    /// Returns the face label for this button.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Percent => "%".to_string(),
            Self::Negate => "+/-".to_string(),
            Self::Op(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
        }
    }

    /// Maps a face label back to its button.
    ///
    /// This is the only fallible surface of the crate; [`crate::core::CalculatorEngine::press`]
    /// itself is total.
    pub fn from_label(label: &str) -> Result<Self, ButtonError> {
        match label {
            "." => Ok(Self::Decimal),
            "%" => Ok(Self::Percent),
            "+/-" => Ok(Self::Negate),
            "=" => Ok(Self::Equals),
            "AC" => Ok(Self::Clear),
            "+" => Ok(Self::Op(Operator::Add)),
            "-" => Ok(Self::Op(Operator::Subtract)),
            "x" => Ok(Self::Op(Operator::Multiply)),
            "/" => Ok(Self::Op(Operator::Divide)),
            _ => label
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= 9)
                .map(Self::Digit)
                .ok_or_else(|| ButtonError::UnknownLabel(label.to_string())),
        }
    }
}
