// ============================================================
// Layer 4 — Boundary Tokenizer
// ============================================================
// Splits a raw string into segments, scanning left to right:
//
//   "(input,output)"
//     '('        → boundary: emitted as its own segment
//     "input"    → plain characters pile up in a pending word
//     ','        → boundary: flush "input", then emit the
//                  longest token starting here → ",output"
//     ')'        → boundary
//   = ["(", "input", ",output", ")"]
//
// A boundary is any character that is a single-character token.
// At a boundary the pending word is flushed, then the longest
// vocabulary token that starts at that position is emitted
// (at least the character itself). Everything else lands in
// the pending word, which is flushed once more at end of input.
//
// Multi-character tokens that do not start with a boundary
// character ("input") are never matched while scanning; they
// survive only because the codec looks each flushed word up
// whole.

use crate::data::vocabulary::Vocabulary;

pub struct Tokenizer<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> Tokenizer<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Segment `text`. Empty input gives no segments.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut pending  = String::new();
        let mut pos      = 0;

        while let Some(c) = text[pos..].chars().next() {
            if self.vocab.is_single_char_token(c) {
                if !pending.is_empty() {
                    segments.push(std::mem::take(&mut pending));
                }
                let token = self.longest_token_at(&text[pos..], c);
                segments.push(token.to_string());
                pos += token.len();
            } else {
                pending.push(c);
                pos += c.len_utf8();
            }
        }
        if !pending.is_empty() {
            segments.push(pending);
        }

        segments
    }

    /// Longest token that is a prefix of `rest`. `rest` starts with the
    /// single-character token `first`, so the result is never empty.
    fn longest_token_at<'a>(&self, rest: &'a str, first: char) -> &'a str {
        let len = self
            .vocab
            .iter()
            .map(|(_, token)| token)
            .filter(|token| rest.starts_with(token))
            .map(str::len)
            .max()
            .unwrap_or(first.len_utf8());
        &rest[..len]
    }
}
