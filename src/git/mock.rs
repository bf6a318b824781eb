use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::domain::{BranchRecord, ProtectedPattern};
use crate::error::{Result, StaleBranchError};
use crate::git::VcsGateway;
use crate::process::CommandOutcome;

/// A gateway operation as observed by [MockGateway]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ValidateRepo,
    ValidateRemote(String),
    FetchPrune,
    ListBranchMetadata(String),
    DeleteBranch { remote: String, branch: String },
}

/// Mock gateway for testing without an actual repository
///
/// Holds an in-memory remote whose branches disappear once deleted, so
/// repeated runs observe the effect of earlier ones.
pub struct MockGateway {
    has_repository: bool,
    remotes: Vec<String>,
    fetch_exit_code: i32,
    branches: Mutex<Vec<BranchRecord>>,
    failing_deletions: HashSet<String>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    /// Create a repository with an `origin` remote and no branches
    pub fn new() -> Self {
        MockGateway {
            has_repository: true,
            remotes: vec!["origin".to_string()],
            fetch_exit_code: 0,
            branches: Mutex::new(Vec::new()),
            failing_deletions: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Pretend the working directory is not a repository
    pub fn without_repository(mut self) -> Self {
        self.has_repository = false;
        self
    }

    /// Remove every configured remote
    pub fn without_remotes(mut self) -> Self {
        self.remotes.clear();
        self
    }

    /// Configure an additional remote
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remotes.push(remote.into());
        self
    }

    /// Make the fetch step exit with `exit_code`
    pub fn with_fetch_exit_code(mut self, exit_code: i32) -> Self {
        self.fetch_exit_code = exit_code;
        self
    }

    /// Add a remote branch, qualified name included
    pub fn with_branch(self, record: BranchRecord) -> Self {
        lock(&self.branches).push(record);
        self
    }

    /// Reject deletion of the bare branch name `branch`
    pub fn failing_deletion_of(mut self, branch: impl Into<String>) -> Self {
        self.failing_deletions.insert(branch.into());
        self
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<GatewayCall> {
        lock(&self.calls).clone()
    }

    /// Bare names passed to [VcsGateway::delete_branch], in order
    pub fn deletion_attempts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::DeleteBranch { branch, .. } => Some(branch),
                _ => None,
            })
            .collect()
    }

    /// Qualified names of the branches still present on the remote
    pub fn remaining_branches(&self) -> Vec<String> {
        lock(&self.branches)
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    fn record(&self, call: GatewayCall) {
        lock(&self.calls).push(call);
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl VcsGateway for MockGateway {
    fn validate_repo(&self) -> Result<()> {
        self.record(GatewayCall::ValidateRepo);
        if self.has_repository {
            Ok(())
        } else {
            Err(StaleBranchError::CommandFailed {
                command: "git rev-parse --git-dir".to_string(),
                exit_code: 128,
            })
        }
    }

    fn validate_remote(&self, remote: &str) -> Result<()> {
        self.record(GatewayCall::ValidateRemote(remote.to_string()));
        if self.remotes.iter().any(|r| r == remote) {
            Ok(())
        } else {
            Err(StaleBranchError::CommandFailed {
                command: format!("git remote get-url {}", remote),
                exit_code: 2,
            })
        }
    }

    fn fetch_prune(&self) -> Result<()> {
        self.record(GatewayCall::FetchPrune);
        if self.fetch_exit_code == 0 {
            Ok(())
        } else {
            Err(StaleBranchError::CommandFailed {
                command: "git fetch --all --quiet --prune".to_string(),
                exit_code: self.fetch_exit_code,
            })
        }
    }

    fn list_branch_metadata(
        &self,
        remote: &str,
        protected: &ProtectedPattern,
    ) -> Result<Vec<BranchRecord>> {
        self.record(GatewayCall::ListBranchMetadata(remote.to_string()));
        let prefix = format!("{}/", remote);
        Ok(lock(&self.branches)
            .iter()
            .filter(|record| record.name.starts_with(&prefix))
            .filter(|record| !protected.is_protected(record.bare_name(remote)))
            .cloned()
            .collect())
    }

    fn delete_branch(&self, remote: &str, branch: &str) -> CommandOutcome {
        self.record(GatewayCall::DeleteBranch {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });

        if self.failing_deletions.contains(branch) {
            return CommandOutcome {
                exit_code: 1,
                output: Some(format!(
                    "!\t:refs/heads/{}\t[remote rejected] (permission denied)\n",
                    branch
                )),
            };
        }

        let qualified = format!("{}/{}", remote, branch);
        let mut branches = lock(&self.branches);
        let before = branches.len();
        branches.retain(|record| record.name != qualified);

        if branches.len() == before {
            CommandOutcome {
                exit_code: 1,
                output: None,
            }
        } else {
            CommandOutcome {
                exit_code: 0,
                output: Some(format!("-\t:refs/heads/{}\t[deleted]\n", branch)),
            }
        }
    }
}
