// ============================================================
// Layer 2 — Evaluate Use Case
// ============================================================
// Runs one full evaluation:
//   1. build the vocabulary from the configured token list
//   2. load the predictor descriptor, build the predictor
//   3. load raw records, split them, pick the sample subset
//   4. evaluate and write both report copies

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{
    loader::JsonDatasetLoader,
    selector::select_samples,
    splitter::{SampleSplitter, INPUT_SUFFIX, OUTPUT_MARKER},
    vocabulary::{Vocabulary, DEFAULT_TOKENS},
};
use crate::domain::{
    error::EvalError,
    sample::AggregateResult,
    traits::{Predictor, RecordSource},
};
use crate::infra::{
    predictor_store::PredictorStore,
    report::{ReportPaths, Reporter},
};
use crate::ml::{
    evaluator::Evaluator,
    reference::{ReferencePredictor, DEFAULT_PAIRS},
};

/// Everything about an evaluation run that is not per-invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Ordered token list; position i gets id i + 1
    pub tokens:           Vec<String>,
    /// (opener, closer) pairs the reference predictor closes
    pub bracket_pairs:    Vec<(String, String)>,
    pub output_marker:    String,
    pub input_suffix:     String,
    /// Shared report location, overwritten every run
    pub report_path:      PathBuf,
    /// Archive folder created next to the predictor
    pub results_dir_name: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            tokens:           DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
            bracket_pairs:    DEFAULT_PAIRS
                .iter()
                .map(|(o, c)| (o.to_string(), c.to_string()))
                .collect(),
            output_marker:    OUTPUT_MARKER.to_string(),
            input_suffix:     INPUT_SUFFIX.to_string(),
            report_path:      PathBuf::from("evaluation_result.txt"),
            results_dir_name: "evaluation_results".to_string(),
        }
    }
}

/// Per-invocation inputs, filled in from the CLI.
#[derive(Debug, Clone)]
pub struct EvaluateRequest {
    /// Predictor descriptor file or the directory holding it
    pub model_path:   PathBuf,
    pub dataset_path: PathBuf,
    pub samples:      Option<usize>,
    pub seed:         Option<u64>,
}

#[derive(Debug)]
pub struct EvaluationSummary {
    pub result:   AggregateResult,
    pub reports:  ReportPaths,
    /// Dataset entries dropped by the splitter
    pub rejected: usize,
}

pub struct EvaluateUseCase {
    config: EvalConfig,
    vocab:  Vocabulary,
}

impl EvaluateUseCase {
    pub fn new(config: EvalConfig) -> Result<Self> {
        let vocab = Vocabulary::new(config.tokens.iter().cloned())?;
        Ok(Self { config, vocab })
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Evaluate the reference predictor described at `request.model_path`.
    pub fn execute(&self, request: &EvaluateRequest) -> Result<EvaluationSummary> {
        let store = PredictorStore::new(&request.model_path);
        let caps  = store.load()?;
        tracing::info!("Model type: {}", caps.kind);

        let predictor = ReferencePredictor::new(&self.vocab, caps, &self.config.bracket_pairs)?;
        let loader    = JsonDatasetLoader::new(&request.dataset_path);

        self.run(&loader, &predictor, store.path(), request.samples, request.seed)
    }

    /// Evaluate any predictor against any record source.
    pub fn run<S, P>(
        &self,
        source:             &S,
        predictor:          &P,
        predictor_location: &Path,
        samples:            Option<usize>,
        seed:               Option<u64>,
    ) -> Result<EvaluationSummary>
    where
        S: RecordSource + ?Sized,
        P: Predictor + ?Sized,
    {
        let records = source.load_records()?;

        let splitter = SampleSplitter::new(&self.config.output_marker, &self.config.input_suffix);
        let split    = splitter.split(&records);
        if !split.rejected.is_empty() {
            tracing::warn!("Skipped {} malformed records", split.rejected.len());
        }
        if split.samples.is_empty() {
            return Err(EvalError::EmptyDataset.into());
        }

        let chosen = select_samples(split.samples, samples, seed);

        let result   = Evaluator::new(&self.vocab).evaluate(&chosen, predictor)?;
        let reporter = Reporter::new(&self.config.report_path, &self.config.results_dir_name);
        let reports  = reporter.write(&result, predictor_location)?;

        Ok(EvaluationSummary { result, reports, rejected: split.rejected.len() })
    }
}
