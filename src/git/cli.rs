use std::path::{Path, PathBuf};

use crate::domain::{parse_branch_listing, BranchRecord, ProtectedPattern};
use crate::error::{Result, StaleBranchError};
use crate::process::{self, CommandOutcome, CommandSpec};

/// Field layout consumed by [parse_branch_listing]
const BRANCH_METADATA_FORMAT: &str = "%(refname)%00%(symref)%00%(committerdate:unix)%00\
%(committerdate:relative)%00%(authorname)%00%(committername)";

/// Gateway backed by the `git` executable found on `PATH`
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    /// Run every git command from `repo_dir`
    pub fn new<P: AsRef<Path>>(repo_dir: P) -> Self {
        GitCli {
            repo_dir: repo_dir.as_ref().to_path_buf(),
        }
    }

    fn git<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new("git", args).in_dir(&self.repo_dir)
    }
}

/// Turn a non-zero outcome into an error carrying the tool's status.
fn into_output(spec: &CommandSpec, outcome: CommandOutcome) -> Result<Option<String>> {
    if outcome.success() {
        Ok(outcome.output)
    } else {
        Err(StaleBranchError::CommandFailed {
            command: spec.to_string(),
            exit_code: outcome.exit_code,
        })
    }
}

impl super::VcsGateway for GitCli {
    fn validate_repo(&self) -> Result<()> {
        let spec = self.git(["rev-parse", "--git-dir"]);
        into_output(&spec, process::run(&spec))?;
        Ok(())
    }

    fn validate_remote(&self, remote: &str) -> Result<()> {
        let spec = self.git(["remote", "get-url", remote]);
        into_output(&spec, process::run_requiring_output(&spec))?;
        Ok(())
    }

    fn fetch_prune(&self) -> Result<()> {
        let spec = self.git(["fetch", "--all", "--quiet", "--prune"]);
        into_output(&spec, process::run(&spec))?;
        Ok(())
    }

    fn list_branch_metadata(
        &self,
        remote: &str,
        protected: &ProtectedPattern,
    ) -> Result<Vec<BranchRecord>> {
        let spec = self.git([
            "for-each-ref".to_string(),
            format!("--format={}", BRANCH_METADATA_FORMAT),
            format!("refs/remotes/{}/", remote),
        ]);
        let raw = into_output(&spec, process::run_requiring_output(&spec))?.unwrap_or_default();

        let records = parse_branch_listing(&raw, remote, protected)?;
        log::info!(
            "collected {} unprotected branches from {}",
            records.len(),
            remote
        );
        Ok(records)
    }

    fn delete_branch(&self, remote: &str, branch: &str) -> CommandOutcome {
        let spec = self.git(["push", "--porcelain", "--delete", remote, branch]);
        process::run(&spec)
    }
}
