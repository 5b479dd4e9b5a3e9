//! Evaluation job runner
//!
//! A placeholder evaluation job: given an input artifact, a dataset name, and
//! a split, it simulates processing with a fixed pause and writes three
//! pseudo-random scores to `<input>.out`.
//!
//! # Example
//!
//! ```rust,ignore
//! use evaljob::{JobParams, JobRunner};
//!
//! let params = JobParams {
//!     input: Some("sample".to_string()),
//!     dataset: Some("d1".to_string()),
//!     split: Some("test".to_string()),
//! };
//! let path = JobRunner::new(params).run()?;
//! ```

pub mod args;
pub mod metrics;
pub mod runner;

// Re-exports for convenience
pub use args::Cli;
pub use metrics::{ResultRecord, Score};
pub use runner::{output_path, JobConfig, JobParams, JobRunner};
