//! Main workflow orchestration logic
//!
//! Sequences the stages of one run: repository and remote checks, fetch with
//! prune, metadata collection, staleness filtering and finally either the
//! report hand-off or the deletion pass. It depends only on [VcsGateway], so
//! the whole workflow can be driven programmatically without clap or git.

use crate::config::{Config, Mode};
use crate::domain::{filter_stale_at, BranchRecord};
use crate::error::Result;
use crate::git::VcsGateway;

/// Result of one remote branch deletion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionResult {
    /// Remote-qualified branch name, as collected
    pub branch_name: String,
    pub exit_code: i32,
    /// Raw output of the deletion command
    pub output: Option<String>,
}

impl DeletionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Nothing is older than the threshold; no deletion was attempted
    NoStaleBranches,
    /// Show mode: the stale branches, in collection order
    Listed(Vec<BranchRecord>),
    /// Delete mode: one result per attempted deletion, in attempt order
    Deleted(Vec<DeletionResult>),
}

/// Validate, synchronize, collect and filter.
///
/// Any failure before collection completes aborts the run; nothing on the
/// remote has been touched at that point.
pub fn collect_stale<G: VcsGateway + ?Sized>(
    gateway: &G,
    config: &Config,
    now: i64,
) -> Result<Vec<BranchRecord>> {
    gateway.validate_repo()?;
    gateway.validate_remote(&config.remote)?;

    log::info!("fetching {} with prune", config.remote);
    gateway.fetch_prune()?;

    let records = gateway.list_branch_metadata(&config.remote, &config.protected)?;
    let stale = filter_stale_at(records, config.threshold(), now);
    log::info!(
        "{} branches older than {} days",
        stale.len(),
        config.older_than_days
    );
    Ok(stale)
}

/// Delete every record on `remote`, one at a time.
///
/// A failed deletion is reported and the batch moves on; nothing is retried.
/// `on_result` sees each result as soon as its command finishes.
pub fn delete_all<G, F>(
    gateway: &G,
    remote: &str,
    records: &[BranchRecord],
    mut on_result: F,
) -> Vec<DeletionResult>
where
    G: VcsGateway + ?Sized,
    F: FnMut(&DeletionResult),
{
    let mut results = Vec::with_capacity(records.len());

    for record in records {
        let outcome = gateway.delete_branch(remote, record.bare_name(remote));

        let result = DeletionResult {
            branch_name: record.name.clone(),
            exit_code: outcome.exit_code,
            output: outcome.output,
        };
        if !result.success() {
            log::warn!(
                "deleting {} failed with exit code {}",
                result.branch_name,
                result.exit_code
            );
        }

        on_result(&result);
        results.push(result);
    }

    results
}

/// Run the whole workflow with `now` as the reference time.
pub fn run_at<G, F>(
    gateway: &G,
    config: &Config,
    now: i64,
    on_result: F,
) -> Result<PipelineOutcome>
where
    G: VcsGateway + ?Sized,
    F: FnMut(&DeletionResult),
{
    let stale = collect_stale(gateway, config, now)?;

    if stale.is_empty() {
        return Ok(PipelineOutcome::NoStaleBranches);
    }

    match config.mode {
        Mode::Show => Ok(PipelineOutcome::Listed(stale)),
        Mode::Delete => Ok(PipelineOutcome::Deleted(delete_all(
            gateway,
            &config.remote,
            &stale,
            on_result,
        ))),
    }
}

/// Run the whole workflow against the current wall clock.
///
/// The clock is read once, so every branch is measured against the same
/// instant.
pub fn run<G, F>(gateway: &G, config: &Config, on_result: F) -> Result<PipelineOutcome>
where
    G: VcsGateway + ?Sized,
    F: FnMut(&DeletionResult),
{
    run_at(gateway, config, chrono::Utc::now().timestamp(), on_result)
}
