//! CLI argument definitions using clap
//!
//! The runner takes three named string options:
//! - evaljob --input <path>       # artifact to process, names the output file
//! - evaljob --dataset <name>     # dataset identifier
//! - evaljob --split <name>       # dataset split, e.g. "train" or "test"

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "evaljob")]
#[command(about = "Evaluation job runner - scores an input artifact and writes a result file")]
#[command(
    long_about = r#"Evaluation job runner

USAGE:
  evaljob --input <path> --dataset <name> --split <name>

Processes the given input artifact and writes three comma-separated scores
to <input>.out. The dataset and split options are recorded with the job
but do not affect the output."#
)]
#[command(version)]
pub struct Cli {
    /// Input artifact to process; the output file is written to <input>.out
    #[arg(long)]
    pub input: Option<String>,

    /// Dataset the input belongs to
    #[arg(long)]
    pub dataset: Option<String>,

    /// Dataset split, e.g. "train" or "test"
    #[arg(long)]
    pub split: Option<String>,
}
