//! Scripted calculator sessions.
//!
//! A [`Session`] feeds labeled button presses into one engine instance, so
//! tests and demo harnesses can describe interactions the way a user taps
//! them: `"1 + 2 ="`. The `verify_*` functions are reusable behavioral
//! specifications; write the expectation once, run it against any session.

use crate::core::{Button, CalcResult, CalculatorEngine, Snapshot};

/// One calculator session driven by face labels.
#[derive(Debug, Default)]
pub struct Session {
    engine: CalculatorEngine,
}

impl Session {
    /// Creates a session with a freshly cleared engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: CalculatorEngine::new(),
        }
    }

    /// Creates a session around an existing engine.
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a mutable reference to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine {
        &mut self.engine
    }

    /// Presses one button by its face label.
    pub fn tap(&mut self, label: &str) -> CalcResult<()> {
        self.engine.press(Button::from_label(label)?);
        Ok(())
    }

    /// Presses a whitespace-separated sequence of labels, e.g. `"1 + 2 ="`.
    pub fn tap_all(&mut self, script: &str) -> CalcResult<()> {
        for label in script.split_whitespace() {
            self.tap(label)?;
        }
        Ok(())
    }

    /// Returns the current display contents.
    #[must_use]
    pub fn displayed_value(&self) -> &str {
        self.engine.displayed_value()
    }

    /// Returns the expression trace accumulated so far.
    #[must_use]
    pub fn expression_trace(&self) -> &str {
        self.engine.expression_trace()
    }

    /// Returns both observable fields as an owned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }
}

// ===== Reusable behavioral specifications =====

/// Verifies digit entry with leading-zero suppression.
pub fn verify_digit_entry(session: &mut Session) {
    session.tap_all("AC 0 0 7").unwrap();
    assert_eq!(session.displayed_value(), "7");
    assert_eq!(session.expression_trace(), "007");
}

/// Verifies the four basic operations evaluate as entered.
pub fn verify_basic_arithmetic(session: &mut Session) {
    session.tap_all("AC 1 + 2 =").unwrap();
    assert_eq!(session.displayed_value(), "3");
    assert_eq!(session.expression_trace(), "1+2=3");

    session.tap_all("AC 1 0 - 4 =").unwrap();
    assert_eq!(session.displayed_value(), "6");

    session.tap_all("AC 6 x 7 =").unwrap();
    assert_eq!(session.displayed_value(), "42");

    session.tap_all("AC 2 0 / 4 =").unwrap();
    assert_eq!(session.displayed_value(), "5");
}

/// Verifies chained operators evaluate strictly left to right.
pub fn verify_chained_operators(session: &mut Session) {
    session.tap_all("AC 3 + 4 + 5 =").unwrap();
    assert_eq!(session.displayed_value(), "12");
    assert_eq!(session.expression_trace(), "3+4=7+5=12");
}

/// Verifies division by zero renders an infinity instead of failing.
pub fn verify_division_by_zero(session: &mut Session) {
    session.tap_all("AC 4 / 0 =").unwrap();
    assert_eq!(session.displayed_value(), "inf");
}

/// Verifies a second decimal point within one operand is ignored.
pub fn verify_decimal_idempotence(session: &mut Session) {
    session.tap_all("AC 3 .").unwrap();
    let before = session.displayed_value().to_string();
    session.tap(".").unwrap();
    assert_eq!(session.displayed_value(), before);
    assert_eq!(session.displayed_value().matches('.').count(), 1);
}

/// Verifies percent and sign toggle are no-ops on a bare operator glyph.
pub fn verify_modifier_noops_on_glyph(session: &mut Session) {
    session.tap_all("AC 5 + %").unwrap();
    assert_eq!(session.displayed_value(), "+");
    session.tap("+/-").unwrap();
    assert_eq!(session.displayed_value(), "+");
    assert_eq!(session.expression_trace(), "5+");
}

/// Verifies clear restores the cleared display and empty trace.
pub fn verify_clear(session: &mut Session) {
    session.tap_all("1 2 + 3 . 4 AC").unwrap();
    assert_eq!(session.displayed_value(), "0");
    assert_eq!(session.expression_trace(), "");
}

/// Runs every specification in sequence against one session.
pub fn run_full_specification(session: &mut Session) {
    verify_digit_entry(session);
    verify_basic_arithmetic(session);
    verify_chained_operators(session);
    verify_division_by_zero(session);
    verify_decimal_idempotence(session);
    verify_modifier_noops_on_glyph(session);
    verify_clear(session);
}
