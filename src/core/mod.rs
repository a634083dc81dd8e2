//! Core calculator module: button vocabulary, operator arithmetic, and
//! the press state machine.

pub mod button;
pub mod engine;
pub mod operator;

pub use button::Button;
pub use engine::{CalculatorEngine, Snapshot};
pub use operator::Operator;

use thiserror::Error;

/// Result type for the fallible input surface (label parsing). The engine
/// itself never fails: every press is a total state transition.
pub type CalcResult<T> = Result<T, ButtonError>;

/// Errors from mapping textual labels onto keypad buttons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ButtonError {
    /// The label does not correspond to any button on the keypad face.
    #[error("unknown button label: {0:?}")]
    UnknownLabel(String),
}
