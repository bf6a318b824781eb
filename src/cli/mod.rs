//! Workflow layer between argument parsing and the gateway

pub mod orchestration;

pub use orchestration::{run, run_at, DeletionResult, PipelineOutcome};
