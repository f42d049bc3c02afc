// ============================================================
// Layer 2 — Tokenize Use Case
// ============================================================
// Shows how a string travels through the codec: segments,
// ids, and what survives the lossy round trip. Handy when a
// dataset scores oddly and the question is whether the
// tokenizer sees what the model was trained on.

use anyhow::Result;

use crate::application::evaluate_use_case::EvalConfig;
use crate::data::{codec::SequenceCodec, vocabulary::Vocabulary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeReport {
    pub segments: Vec<String>,
    pub ids:      Vec<u32>,
    pub decoded:  String,
}

pub struct TokenizeUseCase {
    vocab: Vocabulary,
}

impl TokenizeUseCase {
    pub fn new(config: &EvalConfig) -> Result<Self> {
        Ok(Self { vocab: Vocabulary::new(config.tokens.iter().cloned())? })
    }

    pub fn inspect(&self, text: &str) -> TokenizeReport {
        let codec = SequenceCodec::new(&self.vocab);
        let ids   = codec.encode(text);
        TokenizeReport {
            segments: codec.segment(text),
            decoded:  codec.decode(&ids),
            ids,
        }
    }
}
