// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The harness never looks inside a model. It talks to it only
// through the Predictor trait below, and the model describes
// itself with an explicit PredictorCapabilities value:
//   - how long its input window is
//   - whether it takes one input buffer or two identical ones
//   - a free-form architecture label used for logging only
//
// Datasets come in through RecordSource, so the splitter and
// the evaluator never know whether records came from a JSON
// file or were built in memory.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::EvalError;

// ─── ModelKind ────────────────────────────────────────────────────────────────
/// Informational architecture label. Not load-bearing for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Gru,
    Lstm,
    Transformer,
    Bert,
    Gpt,
    #[default]
    Unknown,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Gru         => "gru",
            Self::Lstm        => "lstm",
            Self::Transformer => "transformer",
            Self::Bert        => "bert",
            Self::Gpt         => "gpt",
            Self::Unknown     => "unknown",
        };
        f.write_str(label)
    }
}

// ─── InputArity ───────────────────────────────────────────────────────────────
/// How many copies of the context window the predictor expects per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputArity {
    #[default]
    Single,
    /// Encoder-decoder style models fed the same buffer twice.
    Dual,
}

// ─── PredictorCapabilities ────────────────────────────────────────────────────
/// What a predictor declares about itself.
/// Persisted as `predictor.json` next to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorCapabilities {
    /// Width of the context window, in token ids
    pub max_input_length: usize,

    #[serde(default)]
    pub arity: InputArity,

    #[serde(default)]
    pub kind: ModelKind,
}

impl PredictorCapabilities {
    pub fn new(max_input_length: usize, arity: InputArity, kind: ModelKind) -> Self {
        Self { max_input_length, arity, kind }
    }

    /// A zero-width window has no last slot to roll predictions into.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == 0 {
            return Err(EvalError::InvalidCapabilities(
                "max_input_length must be at least 1".into(),
            )
            .into());
        }
        Ok(())
    }
}

// ─── PredictorInput ───────────────────────────────────────────────────────────
/// The context window shaped the way the predictor asked for it.
#[derive(Debug, Clone, Copy)]
pub enum PredictorInput<'a> {
    Single(&'a [u32]),
    Dual(&'a [u32], &'a [u32]),
}

impl<'a> PredictorInput<'a> {
    /// Wrap a window according to the declared arity.
    pub fn shaped(window: &'a [u32], arity: InputArity) -> Self {
        match arity {
            InputArity::Single => Self::Single(window),
            InputArity::Dual   => Self::Dual(window, window),
        }
    }

    /// The primary buffer. Both buffers are identical in the dual case.
    pub fn primary(&self) -> &'a [u32] {
        match *self {
            Self::Single(w)  => w,
            Self::Dual(w, _) => w,
        }
    }
}

// ─── Predictor ────────────────────────────────────────────────────────────────
/// An opaque next-token predictor.
///
/// Implementations:
///   - BurnPredictor     → any burn model behind the SequenceModel trait
///   - ReferencePredictor → deterministic stack-based bracket closer
pub trait Predictor {
    fn capabilities(&self) -> &PredictorCapabilities;

    /// Scores for the next position over the whole id space
    /// (index = token id, index 0 = padding).
    fn predict(&self, input: PredictorInput<'_>) -> Result<Vec<f32>>;
}

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can hand over raw dataset entries.
/// Entries stay untyped JSON so the splitter can reject non-strings.
pub trait RecordSource {
    fn load_records(&self) -> Result<Vec<serde_json::Value>>;
}
