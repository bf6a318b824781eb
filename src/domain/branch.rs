use regex::Regex;

use crate::error::{Result, StaleBranchError};

/// Branch names that are never considered for deletion unless overridden.
pub const DEFAULT_PROTECTED_PATTERN: &str = "master|release|HEAD|develop";

/// Separator between fields of one record in the batched metadata query.
pub const FIELD_SEPARATOR: char = '\0';

/// Number of fields each record of the batched metadata query carries.
pub const FIELD_COUNT: usize = 6;

const REMOTE_REF_PREFIX: &str = "refs/remotes/";

/// Metadata of one remote-tracking branch, snapshotted at collection time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    /// Remote-qualified name, e.g. `origin/feature-x`
    pub name: String,
    /// Unix epoch seconds of the tip commit's committer date
    pub last_commit_timestamp: i64,
    /// Human-readable recency such as "3 months ago"
    pub last_commit_relative: String,
    pub author_name: String,
    pub committer_name: String,
}

impl BranchRecord {
    /// The branch name with the `remote` qualifier removed.
    ///
    /// Remote names may themselves contain `/`, so only the exact
    /// `<remote>/` prefix is stripped. A name not qualified by `remote` is
    /// returned unchanged.
    ///
    /// ```
    /// # use git_stale_branches::domain::BranchRecord;
    /// let record = BranchRecord {
    ///     name: "team/origin/feature/login".to_string(),
    ///     last_commit_timestamp: 0,
    ///     last_commit_relative: String::new(),
    ///     author_name: String::new(),
    ///     committer_name: String::new(),
    /// };
    /// assert_eq!(record.bare_name("team/origin"), "feature/login");
    /// assert_eq!(record.bare_name("team"), "origin/feature/login");
    /// ```
    pub fn bare_name(&self, remote: &str) -> &str {
        self.name
            .strip_prefix(remote)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.name)
    }
}

/// Case-sensitive, unanchored regular expression over bare branch names.
#[derive(Debug, Clone)]
pub struct ProtectedPattern {
    regex: Regex,
}

impl ProtectedPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            StaleBranchError::config(format!("invalid protected pattern '{}': {}", pattern, e))
        })?;
        Ok(ProtectedPattern { regex })
    }

    pub fn is_protected(&self, bare_name: &str) -> bool {
        self.regex.is_match(bare_name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for ProtectedPattern {
    fn default() -> Self {
        ProtectedPattern {
            regex: Regex::new(DEFAULT_PROTECTED_PATTERN).expect("default pattern compiles"),
        }
    }
}

impl PartialEq for ProtectedPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Parse the output of the batched metadata query into branch records.
///
/// Each line holds [`FIELD_COUNT`] fields separated by [`FIELD_SEPARATOR`]:
/// full refname, symref target, committer unix timestamp, committer relative
/// date, author name, committer name.
///
/// Only refs under `refs/remotes/<remote>/` are kept, and the protected
/// pattern is matched against what follows that exact prefix. Records with an
/// empty name and symbolic refs (such as `origin/HEAD`) are dropped. Protected
/// branches never make it into the result. A line with the wrong number of
/// fields or an unparsable timestamp fails the whole listing.
pub fn parse_branch_listing(
    raw: &str,
    remote: &str,
    protected: &ProtectedPattern,
) -> Result<Vec<BranchRecord>> {
    let remote_prefix = format!("{}{}/", REMOTE_REF_PREFIX, remote);
    let mut records = Vec::new();

    for line in raw.lines().filter(|line| !line.is_empty()) {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(StaleBranchError::malformed(format!(
                "expected {} fields, found {} in {:?}",
                FIELD_COUNT,
                fields.len(),
                line
            )));
        }

        let refname = fields[0].trim();
        let bare = match refname.strip_prefix(remote_prefix.as_str()) {
            Some("") => {
                log::warn!("dropping record with empty branch name: {:?}", line);
                continue;
            }
            Some(bare) => bare,
            None if refname.is_empty() => {
                log::warn!("dropping record with empty branch name: {:?}", line);
                continue;
            }
            None => {
                log::debug!("skipping {} outside remote {}", refname, remote);
                continue;
            }
        };
        let name = &refname[REMOTE_REF_PREFIX.len()..];

        if !fields[1].is_empty() {
            log::debug!("skipping symbolic ref {} -> {}", name, fields[1]);
            continue;
        }

        let record = BranchRecord {
            name: name.to_string(),
            last_commit_timestamp: parse_timestamp(name, fields[2])?,
            last_commit_relative: fields[3].to_string(),
            author_name: fields[4].to_string(),
            committer_name: fields[5].to_string(),
        };

        if protected.is_protected(bare) {
            log::debug!("excluding protected branch {}", record.name);
            continue;
        }

        records.push(record);
    }

    Ok(records)
}

fn parse_timestamp(name: &str, field: &str) -> Result<i64> {
    let timestamp: i64 = field.trim().parse().map_err(|_| {
        StaleBranchError::malformed(format!(
            "branch '{}' has non-numeric commit timestamp {:?}",
            name, field
        ))
    })?;

    if timestamp < 0 {
        return Err(StaleBranchError::malformed(format!(
            "branch '{}' has negative commit timestamp {}",
            name, timestamp
        )));
    }

    Ok(timestamp)
}
