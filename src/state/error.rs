//! Errors raised by the form engine

use super::Step;
use thiserror::Error;

/// Rejected requests against the form engine.
///
/// Field validation failures are not errors; they come back as
/// [`Step1Validation`](super::Step1Validation) values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown plan or add-on id: {0:?}")]
    UnknownIdentifier(String),
    #[error("pricing table has no entry for {0}")]
    MissingPrice(String),
    #[error("already at {0}, nothing to advance to")]
    TerminalStepReached(Step),
    #[error("cannot {action} from {from}")]
    InvalidTransition { from: Step, action: &'static str },
}
