use crate::domain::BranchRecord;
use crate::error::{Result, StaleBranchError};

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Minimum age, in seconds, a branch's last commit must exceed to be stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessThreshold(i64);

impl StalenessThreshold {
    pub fn from_seconds(seconds: i64) -> Result<Self> {
        if seconds <= 0 {
            return Err(StaleBranchError::config(format!(
                "staleness threshold must be positive, got {} seconds",
                seconds
            )));
        }
        Ok(StalenessThreshold(seconds))
    }

    pub fn from_days(days: u32) -> Result<Self> {
        if days == 0 {
            return Err(StaleBranchError::config(
                "older-than parameter must be a positive integer",
            ));
        }
        Self::from_seconds(i64::from(days) * SECONDS_PER_DAY)
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }

    /// A branch sitting exactly on the threshold is still fresh.
    pub fn is_stale(&self, record: &BranchRecord, now: i64) -> bool {
        now - record.last_commit_timestamp > self.0
    }
}

/// Keep only the stale records, measured against the current wall clock.
pub fn filter_stale(
    records: Vec<BranchRecord>,
    threshold: StalenessThreshold,
) -> Vec<BranchRecord> {
    filter_stale_at(records, threshold, chrono::Utc::now().timestamp())
}

/// Keep only the records that are stale relative to `now`, preserving order.
pub fn filter_stale_at(
    records: Vec<BranchRecord>,
    threshold: StalenessThreshold,
    now: i64,
) -> Vec<BranchRecord> {
    records
        .into_iter()
        .filter(|record| threshold.is_stale(record, now))
        .collect()
}
