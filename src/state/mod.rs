//! Form engine: pricing, validation, state and step navigation
//!
//! Nothing in here knows about the terminal. The UI reads the values exposed
//! by [`StepController`] and forwards user intents back into it.

// The engine exposes more than the terminal front end calls
#![allow(dead_code)]

mod controller;
mod error;
mod field;
mod form_state;
mod pricing;
mod submission;
mod summary;
mod validation;

pub use controller::{Advance, StepController};
pub use error::FormError;
pub use field::FormField;
pub use form_state::{Draft, FormState, Step};
pub use pricing::{AddonId, Cycle, Money, PlanId, PricingTable};
pub use submission::Submission;
pub use summary::SummarySnapshot;
pub use validation::{Field, PatternValidator, Step1Validation, Validator};
