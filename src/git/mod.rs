//! VCS gateway abstraction layer
//!
//! The pipeline talks to version control only through the [VcsGateway]
//! trait, so every stage can run against a deterministic double.
//!
//! # Implementations
//!
//! - [cli::GitCli]: shells out to the `git` executable
//! - [mock::MockGateway]: in-memory remote for tests, records every call
//!
//! ```no_run
//! # use git_stale_branches::git::{GitCli, VcsGateway};
//! # use git_stale_branches::domain::ProtectedPattern;
//! # fn example() -> git_stale_branches::Result<()> {
//! let git = GitCli::new(".");
//! git.validate_repo()?;
//! git.validate_remote("origin")?;
//! git.fetch_prune()?;
//! let branches = git.list_branch_metadata("origin", &ProtectedPattern::default())?;
//! println!("{} unprotected remote branches", branches.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::{GatewayCall, MockGateway};

use crate::domain::{BranchRecord, ProtectedPattern};
use crate::error::Result;
use crate::process::CommandOutcome;

/// Version control operations the stale branch pipeline depends on
///
/// ## Error Handling
///
/// Precondition and query methods return [crate::error::Result]; a failing
/// underlying command surfaces as [crate::error::StaleBranchError::CommandFailed]
/// carrying the tool's exit code. [VcsGateway::delete_branch] never fails:
/// its outcome is data, so one rejected deletion cannot abort a batch.
pub trait VcsGateway: Send + Sync {
    /// Confirm the working directory belongs to a repository.
    fn validate_repo(&self) -> Result<()>;

    /// Confirm a remote named `remote` is configured.
    fn validate_remote(&self, remote: &str) -> Result<()>;

    /// Fetch every remote, pruning tracking refs of branches deleted upstream.
    fn fetch_prune(&self) -> Result<()>;

    /// List remote-tracking branches of `remote` with their tip commit metadata.
    ///
    /// Branches whose bare name matches `protected` are never returned.
    /// Ordering follows the underlying tool.
    fn list_branch_metadata(
        &self,
        remote: &str,
        protected: &ProtectedPattern,
    ) -> Result<Vec<BranchRecord>>;

    /// Delete `branch` (a bare name, without remote qualifier) on `remote`.
    fn delete_branch(&self, remote: &str, branch: &str) -> CommandOutcome;
}
