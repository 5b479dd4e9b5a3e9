//! Evaluation job runner CLI
//!
//! One-shot binary: parses the job parameters, runs the job, and exits.
//! See the crate docs in `lib.rs` for the library API.

use anyhow::Result;
use clap::Parser;

use evaljob::{Cli, JobParams, JobRunner};

fn main() -> Result<()> {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let runner = JobRunner::new(JobParams::from(cli));
    runner.run()?;
    Ok(())
}
