//! Property-based tests for the keypad engine.
//!
//! Random press sequences exercise the invariants the unit tests pin at
//! single points: the trace only ever grows, the display never turns into
//! garbage, and formatting round-trips.

use proptest::prelude::*;

use pocket_calculator::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn button_strategy() -> impl Strategy<Value = Button> {
    prop_oneof![
        digit_strategy().prop_map(Button::Digit),
        Just(Button::Decimal),
        Just(Button::Percent),
        Just(Button::Negate),
        operator_strategy().prop_map(Button::Op),
        Just(Button::Equals),
        Just(Button::Clear),
    ]
}

fn press_number(engine: &mut CalculatorEngine, n: u32) {
    for ch in n.to_string().chars() {
        let digit = ch.to_digit(10).unwrap() as u8;
        engine.press(Button::Digit(digit));
    }
}

/// True when `text` is a single bare operator glyph.
fn is_glyph(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if Operator::from_glyph(c).is_some()
    )
}

// ===== Button vocabulary properties =====

proptest! {
    #[test]
    fn prop_label_round_trip(button in button_strategy()) {
        prop_assert_eq!(Button::from_label(&button.label()), Ok(button));
    }

    #[test]
    fn prop_labels_are_nonempty(button in button_strategy()) {
        prop_assert!(!button.label().is_empty());
    }
}

// ===== Digit entry properties =====

proptest! {
    /// The display equals the digit concatenation with leading zeros
    /// suppressed once a non-zero digit appears.
    #[test]
    fn prop_digit_concatenation(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut engine = CalculatorEngine::new();
        let mut expected = String::new();
        for &d in &digits {
            engine.press(Button::Digit(d));
            if !(expected.is_empty() && d == 0) {
                expected.push(char::from(b'0' + d));
            }
        }
        if expected.is_empty() {
            expected.push('0');
        }
        prop_assert_eq!(engine.displayed_value(), expected.as_str());
        // The trace records every digit verbatim.
        let raw: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        prop_assert_eq!(engine.expression_trace(), raw.as_str());
    }
}

// ===== Engine invariants over arbitrary sequences =====

proptest! {
    /// The trace is append-only: every press except clear extends it.
    #[test]
    fn prop_trace_append_only(buttons in prop::collection::vec(button_strategy(), 0..40)) {
        let mut engine = CalculatorEngine::new();
        for button in buttons {
            let before = engine.expression_trace().to_string();
            engine.press(button);
            if button == Button::Clear {
                prop_assert_eq!(engine.expression_trace(), "");
            } else {
                prop_assert!(engine.expression_trace().starts_with(&before));
            }
        }
    }

    /// The display is always a bare operator glyph or numeric-ish text:
    /// parsable, a lone point, or carrying an inf/NaN token from a prior
    /// result. It never holds more than one decimal point.
    #[test]
    fn prop_display_stays_well_formed(buttons in prop::collection::vec(button_strategy(), 0..40)) {
        let mut engine = CalculatorEngine::new();
        for button in buttons {
            engine.press(button);
            let display = engine.displayed_value();
            prop_assert!(!display.is_empty());
            prop_assert!(display.matches('.').count() <= 1, "display {:?}", display);
            let numericish = display.parse::<f64>().is_ok()
                || display == "."
                || display.contains("inf")
                || display.contains("NaN");
            prop_assert!(is_glyph(display) || numericish, "display {:?}", display);
        }
    }

    /// Clear always restores the initial observable state.
    #[test]
    fn prop_clear_resets(buttons in prop::collection::vec(button_strategy(), 0..40)) {
        let mut engine = CalculatorEngine::new();
        engine.press_all(buttons);
        engine.press(Button::Clear);
        prop_assert_eq!(engine.displayed_value(), "0");
        prop_assert_eq!(engine.expression_trace(), "");
    }

    /// A second decimal point directly after a first never changes the
    /// display.
    #[test]
    fn prop_decimal_idempotent(buttons in prop::collection::vec(button_strategy(), 0..20)) {
        let mut engine = CalculatorEngine::new();
        engine.press_all(buttons);
        engine.press(Button::Decimal);
        let after_first = engine.displayed_value().to_string();
        engine.press(Button::Decimal);
        prop_assert_eq!(engine.displayed_value(), after_first.as_str());
    }
}

// ===== Formatting properties =====

proptest! {
    /// Evaluated quotients render in shortest round-trip form: parsing the
    /// display back yields exactly the IEEE-754 quotient, and integral
    /// results carry no decimal point.
    #[test]
    fn prop_quotient_round_trips(a in 0u32..10_000, b in 1u32..100) {
        let mut engine = CalculatorEngine::new();
        press_number(&mut engine, a);
        engine.press(Button::Op(Operator::Divide));
        press_number(&mut engine, b);
        engine.press(Button::Equals);

        let expected = f64::from(a) / f64::from(b);
        let display = engine.displayed_value();
        prop_assert_eq!(display.parse::<f64>().unwrap(), expected);
        if expected.fract() == 0.0 {
            prop_assert!(!display.contains('.'), "display {:?}", display);
        }
    }

    /// Sign toggle renders the exact negation of the entered number.
    #[test]
    fn prop_negate_round_trips(n in 1u32..1_000_000) {
        let mut engine = CalculatorEngine::new();
        press_number(&mut engine, n);
        engine.press(Button::Negate);
        let display = engine.displayed_value();
        prop_assert_eq!(display.parse::<f64>().unwrap(), -f64::from(n));
        prop_assert!(display.starts_with('-'));
    }
}
