//! User interface module - rendering of pipeline results.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Mapping a finished run onto those functions

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_abort, display_deletion_banner, display_deletion_result, display_error,
    display_no_stale_branches, display_stale_table, display_status, display_success,
};

use crate::cli::PipelineOutcome;
use crate::config::Config;

/// Print the final report of a successful run.
///
/// Deletion results are printed while the batch runs, so for delete mode
/// only the summary line is left.
pub fn render_outcome(outcome: &PipelineOutcome, config: &Config) {
    match outcome {
        PipelineOutcome::NoStaleBranches => display_no_stale_branches(config.older_than_days),
        PipelineOutcome::Listed(records) => {
            display_status(&format!(
                "{} branches on '{}' with no commits in the last {} days",
                records.len(),
                config.remote,
                config.older_than_days
            ));
            display_stale_table(records);
        }
        PipelineOutcome::Deleted(results) => {
            display_success(&formatter::format_deletion_summary(results));
        }
    }
}
