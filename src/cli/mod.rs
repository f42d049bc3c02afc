// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands each subcommand to its
// use case:
//   1. `evaluate` — score a predictor, write reports
//   2. `tokenize` — inspect the codec on one string
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EvaluateArgs, TokenizeArgs};

use crate::infra::config_store::load_config;

#[derive(Parser, Debug)]
#[command(
    name = "bracket-eval",
    version = "0.1.0",
    about = "Greedy autoregressive evaluation of bracket-matching predictors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Tokenize(args) => run_tokenize(args),
        }
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::{EvaluateRequest, EvaluateUseCase};

    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = &args.report_path {
        config.report_path = path.clone();
    }

    tracing::info!("Evaluating dataset: {}", args.dataset.display());

    let use_case = EvaluateUseCase::new(config)?;
    let summary  = use_case.execute(&EvaluateRequest::from(&args))?;

    println!("Model accuracy: {}%", summary.result.accuracy_label());
    if summary.rejected > 0 {
        println!("Malformed records skipped: {}", summary.rejected);
    }
    println!("Evaluation results saved to {}", summary.reports.shared.display());
    println!("Archived copy: {}", summary.reports.archive.display());
    Ok(())
}

fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    use crate::application::tokenize_use_case::TokenizeUseCase;

    let config = load_config(args.config.as_deref())?;
    let report = TokenizeUseCase::new(&config)?.inspect(&args.text);

    println!("Segments: {:?}", report.segments);
    println!("Ids:      {:?}", report.ids);
    println!("Decoded:  {}", report.decoded);
    Ok(())
}
