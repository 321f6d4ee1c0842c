//! Submitter that only records the signup in the log

use super::Submitter;
use crate::state::Submission;
use anyhow::{Context, Result};

/// Writes each submission to the log as JSON
#[derive(Debug, Default)]
pub struct LogSubmitter {
    submitted: usize,
}

impl LogSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions logged so far
    #[allow(dead_code)]
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl Submitter for LogSubmitter {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        let json = serde_json::to_string(submission).context("Failed to encode submission")?;
        tracing::info!(session = %submission.session_id, "Submitted data: {json}");
        self.submitted += 1;
        Ok(())
    }
}
