// ============================================================
// Layer 3 — Evaluation Error Kinds
// ============================================================
// The failure conditions the harness distinguishes.
// Everything else travels as a plain anyhow::Error with context.
//
// Per-record kinds (MalformedRecord) are logged and the record
// is dropped. Dataset-level and file-level kinds abort the run.
//
// Tokens or ids without a vocabulary entry are NOT an error:
// the codec drops them silently.

use std::{fmt, path::PathBuf};

/// Errors raised by the evaluation harness.
///
/// Carried inside `anyhow::Error` across layer boundaries;
/// callers recover the kind with `err.downcast_ref::<EvalError>()`.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A dataset entry is not a string, or does not carry the
    /// output marker exactly once.
    MalformedRecord { index: usize, reason: String },
    /// No usable samples remain after splitting.
    EmptyDataset,
    /// An input file does not exist.
    MissingFile(PathBuf),
    /// The token list cannot form a vocabulary.
    InvalidVocabulary(String),
    /// The predictor declared capabilities the decoder cannot honour.
    InvalidCapabilities(String),
    /// The predictor returned no scores for the next position.
    EmptyScores,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { index, reason } => {
                write!(f, "malformed record #{index}: {reason}")
            }
            Self::EmptyDataset => write!(f, "no usable samples to evaluate"),
            Self::MissingFile(path) => write!(f, "file does not exist: {}", path.display()),
            Self::InvalidVocabulary(msg) => write!(f, "invalid vocabulary: {msg}"),
            Self::InvalidCapabilities(msg) => write!(f, "invalid predictor capabilities: {msg}"),
            Self::EmptyScores => write!(f, "predictor returned an empty score vector"),
        }
    }
}

impl std::error::Error for EvalError {}
