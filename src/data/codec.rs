// ============================================================
// Layer 4 — Sequence Codec
// ============================================================
// Converts between strings and token id sequences.
//
//   encode: string → segments (Tokenizer) → ids (Vocabulary)
//   decode: ids → tokens (Vocabulary) → concatenated string
//
// Both directions are lossy on purpose:
//   - encode drops every segment that is not a token
//     ("input:A" vanishes, "input" survives)
//   - decode drops padding (0) and any id outside the vocabulary
//
// So decode(encode(s)) is the in-order concatenation of the
// token segments of s, not s itself. Predicted and expected
// outputs go through the same decode, which keeps the
// comparison fair.

use crate::data::{tokenizer::Tokenizer, vocabulary::Vocabulary};

pub struct SequenceCodec<'v> {
    vocab:     &'v Vocabulary,
    tokenizer: Tokenizer<'v>,
}

impl<'v> SequenceCodec<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab, tokenizer: Tokenizer::new(vocab) }
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        self.tokenizer.segment(text)
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        let segments = self.tokenizer.segment(text);
        tracing::debug!("Tokenized string: {:?}", segments);
        segments
            .iter()
            .filter_map(|seg| self.vocab.id_of(seg))
            .collect()
    }

    pub fn decode(&self, ids: &[u32]) -> String {
        let decoded: String = ids
            .iter()
            .filter_map(|&id| self.vocab.token_of(id))
            .collect();
        tracing::debug!("Decoded output: {}", decoded);
        decoded
    }
}
