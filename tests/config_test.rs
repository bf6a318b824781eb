// tests/config_test.rs
use git_stale_branches::config::{Config, Mode};
use git_stale_branches::domain::DEFAULT_PROTECTED_PATTERN;
use git_stale_branches::StaleBranchError;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.mode, Mode::Show);
    assert_eq!(config.older_than_days, 90);
    assert_eq!(config.remote, "origin");
    assert_eq!(config.protected.as_str(), DEFAULT_PROTECTED_PATTERN);
    assert_eq!(config.threshold().seconds(), 90 * 86_400);
}

#[test]
fn test_default_protects_mainline_names() {
    let config = Config::default();
    for name in ["master", "release/2.0", "HEAD", "develop"] {
        assert!(
            config.protected.is_protected(name),
            "{} should be protected",
            name
        );
    }
    assert!(!config.protected.is_protected("feature-a"));
}

#[test]
fn test_threshold_in_seconds() {
    let config = Config::new(Mode::Delete, 30, DEFAULT_PROTECTED_PATTERN, "origin").unwrap();
    assert_eq!(config.threshold().seconds(), 30 * 86_400);
    assert_eq!(config.mode, Mode::Delete);
}

#[test]
fn test_zero_days_rejected() {
    let err = Config::new(Mode::Show, 0, DEFAULT_PROTECTED_PATTERN, "origin").unwrap_err();
    assert!(matches!(err, StaleBranchError::Config(_)));
    assert!(err.to_string().contains("positive integer"));
}

#[test]
fn test_invalid_pattern_rejected() {
    let err = Config::new(Mode::Show, 90, "[unterminated", "origin").unwrap_err();
    assert!(matches!(err, StaleBranchError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_empty_remote_rejected() {
    let err = Config::new(Mode::Show, 90, DEFAULT_PROTECTED_PATTERN, "  ").unwrap_err();
    assert!(err.to_string().contains("remote"));
}

#[test]
fn test_custom_pattern_replaces_default() {
    let config = Config::new(Mode::Show, 90, "^(main|trunk)$", "upstream").unwrap();
    assert!(config.protected.is_protected("main"));
    assert!(!config.protected.is_protected("develop"));
    assert_eq!(config.remote, "upstream");
}

#[test]
fn test_mode_display() {
    assert_eq!(Mode::Show.to_string(), "show");
    assert_eq!(Mode::Delete.to_string(), "delete");
}
