//! Binary operator identity and arithmetic.

use serde::{Deserialize, Serialize};

/// The four binary operators, one variant each, dispatched with a single
/// `match`. The "no operator pending" state is `Option::None` at the
/// engine level rather than a fifth variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (x)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the single-character glyph shown on the display while this
    /// operator awaits its right-hand operand.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'x',
            Self::Divide => '/',
        }
    }

    /// Maps a display glyph back to its operator.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            'x' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator with IEEE-754 `f64` semantics. Division by
    /// zero yields an infinity (or NaN for `0 / 0`) instead of failing.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}
