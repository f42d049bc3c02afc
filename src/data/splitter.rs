// ============================================================
// Layer 4 — Record Splitter
// ============================================================
// Turns raw dataset entries into (input, expected) samples.
//
//   "(input:A,output:B)"
//          └── split on ",output:" ──┐
//   input_sequence  = "(input:A" + ",output"  = "(input:A,output"
//   expected_output = "B)"
//
// The suffix is appended so every encoded input ends with the
// ",output" token, the boundary the predictor was trained on.
//
// Bad entries (not a string, marker missing or repeated) are
// logged and dropped; the rest of the batch still goes through.

use serde_json::Value;

use crate::domain::{error::EvalError, sample::Sample};

pub const OUTPUT_MARKER: &str = ",output:";
pub const INPUT_SUFFIX: &str = ",output";

/// Samples that survived splitting plus the rejected entries.
#[derive(Debug, Default)]
pub struct SplitOutcome {
    pub samples:  Vec<Sample>,
    pub rejected: Vec<EvalError>,
}

pub struct SampleSplitter {
    output_marker: String,
    input_suffix:  String,
}

impl SampleSplitter {
    pub fn new(output_marker: impl Into<String>, input_suffix: impl Into<String>) -> Self {
        Self {
            output_marker: output_marker.into(),
            input_suffix:  input_suffix.into(),
        }
    }

    /// Split every entry, keeping input order. Never fails as a whole.
    pub fn split(&self, records: &[Value]) -> SplitOutcome {
        let mut outcome = SplitOutcome::default();

        for (index, record) in records.iter().enumerate() {
            let parsed = match record {
                Value::String(text) => self.split_record(index, text),
                other => Err(EvalError::MalformedRecord {
                    index,
                    reason: format!("invalid data format: {other}"),
                }),
            };
            match parsed {
                Ok(sample) => outcome.samples.push(sample),
                Err(e) => {
                    tracing::error!("{e}");
                    outcome.rejected.push(e);
                }
            }
        }

        tracing::debug!(
            "Split {} records: {} samples, {} rejected",
            records.len(),
            outcome.samples.len(),
            outcome.rejected.len(),
        );
        outcome
    }

    /// Split one raw string on the output marker.
    pub fn split_record(&self, index: usize, text: &str) -> Result<Sample, EvalError> {
        let (before, after) = text.split_once(self.output_marker.as_str()).ok_or_else(|| {
            EvalError::MalformedRecord {
                index,
                reason: format!("missing {:?} marker", self.output_marker),
            }
        })?;

        if after.contains(self.output_marker.as_str()) {
            return Err(EvalError::MalformedRecord {
                index,
                reason: format!("{:?} marker appears more than once", self.output_marker),
            });
        }

        Ok(Sample::new(format!("{before}{}", self.input_suffix), after))
    }
}

impl Default for SampleSplitter {
    fn default() -> Self {
        Self::new(OUTPUT_MARKER, INPUT_SUFFIX)
    }
}
