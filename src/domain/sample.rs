// ============================================================
// Layer 3 — Sample and Evaluation Result Types
// ============================================================
// Plain data carried between the splitter, the evaluator and
// the reporter. No behaviour beyond small derived values.
//
// Example:
//   raw record:      "(input:A,output:B)"
//   input_sequence:  "(input:A,output"
//   expected_output: "B)"

use serde::{Deserialize, Serialize};

/// One (input, expected output) pair taken from a raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Text before the output marker, with the input suffix re-appended
    pub input_sequence: String,

    /// Text after the output marker
    pub expected_output: String,
}

impl Sample {
    pub fn new(input_sequence: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input_sequence:  input_sequence.into(),
            expected_output: expected_output.into(),
        }
    }
}

/// The verdict for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    /// 1-based position in the evaluated batch
    pub index: usize,

    pub input: String,

    /// Decoded predictor output
    pub predicted: String,

    /// Expected output after the same lossy decode
    pub expected: String,

    pub correct: bool,
}

/// All verdicts of one run plus the derived accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub outcomes: Vec<EvaluationOutcome>,
}

impl AggregateResult {
    pub fn new(outcomes: Vec<EvaluationOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|o| o.correct).count()
    }

    /// Percentage of correct samples, in [0, 100].
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.total() as f64 * 100.0
    }

    /// Accuracy as it appears in reports and file names, e.g. "75.00".
    pub fn accuracy_label(&self) -> String {
        format!("{:.2}", self.accuracy())
    }
}
