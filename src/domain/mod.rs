//! Domain logic - pure classification rules independent of git operations

pub mod branch;
pub mod staleness;

pub use branch::{
    parse_branch_listing, BranchRecord, ProtectedPattern, DEFAULT_PROTECTED_PATTERN,
};
pub use staleness::{filter_stale, filter_stale_at, StalenessThreshold, SECONDS_PER_DAY};
