//! Pocket Calculator — a four-function calculator engine.
//!
//! The engine consumes sequential digit and operator button presses,
//! maintains a running value with a single pending binary operator, and
//! renders two observable strings after every press: the displayed value
//! and a textual trace of the expression entered so far. Evaluation is
//! strictly left to right, calculator-style; there is no precedence and
//! no error state. Presentation (button grid, colors, sizing) lives
//! outside this crate and only reads the two output fields.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.press(Button::Digit(1));
//! engine.press(Button::Op(Operator::Add));
//! engine.press(Button::Digit(2));
//! engine.press(Button::Equals);
//!
//! assert_eq!(engine.displayed_value(), "3");
//! assert_eq!(engine.expression_trace(), "1+2=3");
//! ```
//!
//! Or scripted through a [`driver::Session`] by face labels:
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut session = Session::new();
//! session.tap_all("3 + 4 + 5 =")?;
//! assert_eq!(session.displayed_value(), "12");
//! # Ok::<(), ButtonError>(())
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        Button, ButtonError, CalcResult, CalculatorEngine, Operator, Snapshot,
    };
    pub use crate::driver::Session;
}
