pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod process;
pub mod ui;

pub use error::{Result, StaleBranchError};
