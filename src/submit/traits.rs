//! Trait abstraction for the submit collaborator to enable mocking in tests

use crate::state::Submission;
use anyhow::Result;

/// Receives the final snapshot when the user confirms
#[cfg_attr(test, mockall::automock)]
pub trait Submitter {
    fn submit(&mut self, submission: &Submission) -> Result<()>;
}
