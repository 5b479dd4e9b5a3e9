//! Job runner for processing an input artifact
//!
//! Runs one evaluation job end to end: announce the input, pause to simulate
//! work, draw the scores, write the result file, announce the output path.

mod config;

use std::fs;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use rand::Rng;

use crate::args::Cli;
use crate::metrics::ResultRecord;

pub use config::JobConfig;

/// Suffix appended to the input identifier to derive the output file name.
pub const OUTPUT_SUFFIX: &str = ".out";

/// Placeholder printed in the progress message when `--input` was not given.
const NO_INPUT: &str = "<none>";

/// Parameters identifying one job, taken from the command line.
///
/// An omitted flag stays `None`; it is never defaulted to an empty string.
/// `dataset` and `split` are recorded with the job but do not affect the
/// output path or the result file.
#[derive(Debug, Clone, Default)]
pub struct JobParams {
    /// Input artifact identifier; names the output file.
    pub input: Option<String>,

    /// Dataset the input belongs to.
    pub dataset: Option<String>,

    /// Dataset split, e.g. "train" or "test".
    pub split: Option<String>,
}

impl From<Cli> for JobParams {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            dataset: cli.dataset,
            split: cli.split,
        }
    }
}

/// Runner for a single evaluation job.
pub struct JobRunner {
    params: JobParams,
    config: JobConfig,
}

impl JobRunner {
    /// Create a runner with the default configuration.
    pub fn new(params: JobParams) -> Self {
        Self::with_config(params, JobConfig::default())
    }

    /// Create a runner with a custom configuration.
    pub fn with_config(params: JobParams, config: JobConfig) -> Self {
        Self { params, config }
    }

    /// Run the job with an unseeded source of randomness.
    ///
    /// Results are non-reproducible across runs. Returns the output path.
    pub fn run(&self) -> Result<PathBuf> {
        self.run_with_rng(&mut rand::thread_rng())
    }

    /// Run the job, drawing scores from the given source.
    ///
    /// The sequence is strictly linear with no retries: announce, pause,
    /// generate, write, announce. A write failure propagates and may leave a
    /// partially written file behind.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PathBuf> {
        tracing::debug!(
            input = self.params.input.as_deref(),
            dataset = self.params.dataset.as_deref(),
            split = self.params.split.as_deref(),
            "starting job"
        );

        println!(
            "Processing {}...",
            self.params.input.as_deref().unwrap_or(NO_INPUT)
        );

        thread::sleep(self.config.pause);

        let record = ResultRecord::sample(rng);
        let path = output_path(self.params.input.as_deref());

        fs::write(&path, record.to_string())
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
        tracing::info!(path = %path.display(), "result written");

        println!("Output written to {}", path.display());
        Ok(path)
    }
}

/// Derive the output path from the input identifier.
///
/// Plain string concatenation of the `.out` suffix, no path normalization.
/// An absent or empty input yields the degenerate name `.out`.
pub fn output_path(input: Option<&str>) -> PathBuf {
    PathBuf::from(format!("{}{}", input.unwrap_or(""), OUTPUT_SUFFIX))
}
