//! The press state machine.
//!
//! [`CalculatorEngine`] owns every piece of calculator state and exposes a
//! single entry point, [`CalculatorEngine::press`], that consumes one
//! logical button press and deterministically updates the displayed value,
//! the pending operation, and the expression trace. There is no I/O and no
//! failure path: unparsable display text degrades to zero and division by
//! zero flows through IEEE-754 infinities into the normal formatting rule.

use serde::{Deserialize, Serialize};

use crate::core::button::Button;
use crate::core::operator::Operator;

/// Read-only view of the two observable output fields. A presentation
/// layer polls this after each press; it is solely responsible for layout,
/// button sizing, and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// What the numeric display shows.
    pub displayed_value: String,
    /// The scrollable history text.
    pub expression_trace: String,
}

/// Four-function calculator engine.
///
/// State breakdown:
/// - `display` is always either a valid partial/complete numeric literal
///   or exactly one operator glyph shown transiently while the next
///   operand is awaited.
/// - `pending_operand` / `pending_op` hold the left-hand side captured at
///   the moment an operator key was chosen.
/// - `awaiting_operand` is true between an operator press and the
///   evaluation it leads to; it governs whether digit input starts a fresh
///   operand.
/// - `trace` is append-only and write-only: every token entered plus every
///   result produced, for on-screen history. It is never parsed.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    trace: String,
    pending_operand: f64,
    pending_op: Option<Operator>,
    awaiting_operand: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine in the cleared state: display `"0"`, empty trace,
    /// no pending operation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            trace: String::new(),
            pending_operand: 0.0,
            pending_op: None,
            awaiting_operand: false,
        }
    }

    /// Returns the current display contents.
    #[must_use]
    pub fn displayed_value(&self) -> &str {
        &self.display
    }

    /// Returns the expression trace accumulated so far.
    #[must_use]
    pub fn expression_trace(&self) -> &str {
        &self.trace
    }

    /// Returns both observable fields as an owned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            displayed_value: self.display.clone(),
            expression_trace: self.trace.clone(),
        }
    }

    /// Handles one logical button press.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Digit(d) => self.press_digit(d.min(9)),
            Button::Decimal => self.press_decimal(),
            Button::Percent => self.press_percent(),
            Button::Negate => self.press_negate(),
            Button::Op(op) => self.press_operator(op),
            Button::Equals => self.press_equals(),
            Button::Clear => self.press_clear(),
        }
    }

    /// Handles a sequence of presses in order.
    pub fn press_all<I: IntoIterator<Item = Button>>(&mut self, buttons: I) {
        for button in buttons {
            self.press(button);
        }
    }

    fn press_operator(&mut self, op: Operator) {
        // Chained entry: `3 + 4 +` settles `3 + 4` before the next
        // addition starts. Equals itself never re-enters here.
        if self.awaiting_operand {
            self.press_equals();
        }
        self.pending_operand = self.parsed_display();
        self.pending_op = Some(op);
        self.awaiting_operand = true;
        // The chain evaluation above may already have left this glyph at
        // the end of the trace; never record it twice.
        if !self.trace.ends_with(op.glyph()) {
            self.trace.push(op.glyph());
        }
        self.display.clear();
        self.display.push(op.glyph());
    }

    fn press_equals(&mut self) {
        let rhs = self.parsed_display();
        self.awaiting_operand = false;
        if let Some(op) = self.pending_op {
            self.display = format_value(op.apply(self.pending_operand, rhs));
        }
        self.trace.push('=');
        self.trace.push_str(&self.display);
    }

    // The pending operator and operand deliberately survive a clear, so a
    // chained operation entered before "AC" still completes afterwards.
    fn press_clear(&mut self) {
        self.display.clear();
        self.display.push('0');
        self.trace.clear();
        self.awaiting_operand = false;
    }

    fn press_decimal(&mut self) {
        if self.display_is_glyph() {
            // A fresh operand starts with the point itself.
            self.display.clear();
            self.display.push('.');
            self.trace.push('.');
        } else if !self.display.contains('.') {
            self.display.push('.');
            self.trace.push('.');
        }
        // A second point within one operand is ignored outright.
    }

    fn press_percent(&mut self) {
        if self.display_is_glyph() {
            return;
        }
        self.display = format_value(self.parsed_display() / 100.0);
        self.trace.push_str("/100 = ");
        self.trace.push_str(&self.display);
    }

    fn press_negate(&mut self) {
        if self.display_is_glyph() {
            return;
        }
        self.display = format_value(self.parsed_display() * -1.0);
        self.trace.push_str("x-1 = ");
        self.trace.push_str(&self.display);
    }

    fn press_digit(&mut self, digit: u8) {
        let ch = char::from(b'0' + digit);
        // While a new operand is awaited the digit replaces a bare glyph;
        // otherwise it replaces a lone "0" or appends.
        let replace = if self.awaiting_operand {
            self.display_is_glyph()
        } else {
            self.display == "0"
        };
        if replace {
            self.display.clear();
        }
        self.display.push(ch);
        self.trace.push(ch);
    }

    /// True while the display holds a bare operator glyph.
    fn display_is_glyph(&self) -> bool {
        let mut chars = self.display.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_glyph(c).is_some(),
            _ => false,
        }
    }

    /// Parses the display as an operand; unparsable text degrades to zero.
    fn parsed_display(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

/// Shortest round-trip rendering: integral values print without a decimal
/// point, everything else in the shortest form that parses back to the
/// same value. `f64`'s `Display` implements exactly this rule, and
/// infinities and NaN take the same path instead of crashing.
fn format_value(value: f64) -> String {
    value.to_string()
}
