//! Hand-off of confirmed signups

mod log_submitter;
mod traits;

pub use log_submitter::LogSubmitter;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
