// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `evaluate` and `tokenize`
// and all their flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::evaluate_use_case::EvaluateRequest;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a predictor on a bracket-matching dataset
    Evaluate(EvaluateArgs),

    /// Show how a string is segmented and encoded
    Tokenize(TokenizeArgs),
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Predictor descriptor (predictor.json) or the directory holding it.
    /// Archived reports land in an evaluation_results/ folder beside it.
    #[arg(long)]
    pub model: PathBuf,

    /// JSON array of records like "input:(【,output:】)"
    #[arg(long, default_value = "components/dataset/original/test_bracket_dataset.json")]
    pub dataset: PathBuf,

    /// Evaluate at most this many samples
    #[arg(long)]
    pub samples: Option<usize>,

    /// Shuffle with this seed before taking --samples
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional EvalConfig JSON (token list, marker, report paths)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overrides the shared report path from the config
    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

impl From<&EvaluateArgs> for EvaluateRequest {
    fn from(a: &EvaluateArgs) -> Self {
        EvaluateRequest {
            model_path:   a.model.clone(),
            dataset_path: a.dataset.clone(),
            samples:      a.samples,
            seed:         a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Text to segment
    #[arg(long)]
    pub text: String,

    /// Optional EvalConfig JSON with a custom token list
    #[arg(long)]
    pub config: Option<PathBuf>,
}
