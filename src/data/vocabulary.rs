// ============================================================
// Layer 4 — Closed Vocabulary
// ============================================================
// Bidirectional map between the task's symbolic tokens and
// integer ids.
//
//   tokens: ["(", ")", "【", "】", "{", "}", "input", ",output", ","]
//   ids:      1    2    3     4    5    6     7         8       9
//
// Id 0 is padding/unknown and is never assigned to a token.
// Ids follow list order, so the same list always gives the
// same ids. The value is built once at start-up and passed by
// reference to the tokenizer, the codec and the reporter.

use anyhow::Result;
use std::collections::HashMap;

use crate::domain::error::EvalError;

/// Reserved id for padding and anything unknown.
pub const PAD_ID: u32 = 0;

/// The bracket-matching token list, in id order.
pub const DEFAULT_TOKENS: [&str; 9] = ["(", ")", "【", "】", "{", "}", "input", ",output", ","];

#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// `tokens[i]` has id `i + 1`
    tokens:   Vec<String>,
    token2id: HashMap<String, u32>,
}

impl Vocabulary {
    /// Build from an ordered token list.
    /// Fails on an empty list, an empty token or a duplicate.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(EvalError::InvalidVocabulary("token list is empty".into()).into());
        }

        let mut token2id = HashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(EvalError::InvalidVocabulary(
                    format!("token at position {i} is empty"),
                )
                .into());
            }
            if token2id.insert(token.clone(), i as u32 + 1).is_some() {
                return Err(EvalError::InvalidVocabulary(
                    format!("duplicate token {token:?}"),
                )
                .into());
            }
        }

        tracing::debug!("Vocabulary built with {} tokens", tokens.len());
        Ok(Self { tokens, token2id })
    }

    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.token2id.get(token).copied()
    }

    pub fn token_of(&self, id: u32) -> Option<&str> {
        if id == PAD_ID {
            return None;
        }
        self.tokens.get(id as usize - 1).map(String::as_str)
    }

    /// True when `c` on its own is a token. The tokenizer splits on these.
    pub fn is_single_char_token(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.token2id.contains_key(c.encode_utf8(&mut buf) as &str)
    }

    /// Number of real tokens (N).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Size of the predictor's output space: N tokens plus padding.
    pub fn id_space(&self) -> usize {
        self.tokens.len() + 1
    }

    /// (id, token) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32 + 1, t.as_str()))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        let tokens: Vec<String> = DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect();
        let token2id = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32 + 1))
            .collect();
        Self { tokens, token2id }
    }
}
