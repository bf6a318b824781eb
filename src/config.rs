use std::fmt;

use crate::domain::{ProtectedPattern, StalenessThreshold};
use crate::error::{Result, StaleBranchError};

/// Returns the default staleness age in days.
pub fn default_older_than_days() -> u32 {
    90
}

/// Returns the default remote inspected and cleaned.
pub fn default_remote() -> String {
    "origin".to_string()
}

/// What to do with the stale branches once they are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Report stale branches without touching the remote
    #[default]
    Show,
    /// Delete stale branches from the remote
    Delete,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Show => write!(f, "show"),
            Mode::Delete => write!(f, "delete"),
        }
    }
}

/// Complete, validated configuration of one run.
///
/// Built once at startup and handed by reference to every stage; nothing
/// downstream reads command-line flags or process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub older_than_days: u32,
    pub protected: ProtectedPattern,
    pub remote: String,
    threshold: StalenessThreshold,
}

impl Config {
    /// Validates raw settings into a configuration.
    ///
    /// # Returns
    /// * `Ok(Config)` - All settings are usable
    /// * `Err(StaleBranchError::Config)` - Non-positive age, invalid pattern or empty remote
    pub fn new(
        mode: Mode,
        older_than_days: u32,
        protected_pattern: &str,
        remote: impl Into<String>,
    ) -> Result<Self> {
        let threshold = StalenessThreshold::from_days(older_than_days)?;

        let remote = remote.into();
        if remote.trim().is_empty() {
            return Err(StaleBranchError::config("remote name must not be empty"));
        }

        Ok(Config {
            mode,
            older_than_days,
            protected: ProtectedPattern::new(protected_pattern)?,
            remote,
            threshold,
        })
    }

    /// Staleness threshold validated when the configuration was built
    pub fn threshold(&self) -> StalenessThreshold {
        self.threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            older_than_days: default_older_than_days(),
            protected: ProtectedPattern::default(),
            remote: default_remote(),
            threshold: StalenessThreshold::from_days(default_older_than_days())
                .expect("default age is positive"),
        }
    }
}
