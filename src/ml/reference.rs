// ============================================================
// Layer 5 — Reference Predictor
// ============================================================
// A deterministic bracket closer that needs no trained weights.
// It gives the harness a known baseline: on well-formed data
// with a wide enough window it scores 100%, so anything lower
// points at the harness or the dataset.
//
// Each call walks the real ids of the window:
//   opener            → push
//   matching closer   → pop
//   anything else     → ignored (markers, unmatched closers)
// The closer of the innermost unmatched opener gets the top
// score. With nothing open, padding (id 0) wins.
//
// Openers evicted by window roll-over are simply forgotten.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::data::vocabulary::{Vocabulary, PAD_ID};
use crate::domain::traits::{Predictor, PredictorCapabilities, PredictorInput};

/// The bracket styles of the task, opener first.
pub const DEFAULT_PAIRS: [(&str, &str); 3] = [("(", ")"), ("【", "】"), ("{", "}")];

pub struct ReferencePredictor {
    caps:     PredictorCapabilities,
    /// opener id → closer id
    closers:  HashMap<u32, u32>,
    id_space: usize,
}

impl ReferencePredictor {
    pub fn new<S: AsRef<str>>(
        vocab: &Vocabulary,
        caps:  PredictorCapabilities,
        pairs: &[(S, S)],
    ) -> Result<Self> {
        caps.validate()?;

        let mut closers = HashMap::with_capacity(pairs.len());
        for (open, close) in pairs {
            let (open, close) = (open.as_ref(), close.as_ref());
            let open_id = vocab
                .id_of(open)
                .with_context(|| format!("Bracket {open:?} is not in the vocabulary"))?;
            let close_id = vocab
                .id_of(close)
                .with_context(|| format!("Bracket {close:?} is not in the vocabulary"))?;
            closers.insert(open_id, close_id);
        }

        Ok(Self { caps, closers, id_space: vocab.id_space() })
    }

    /// Closer id for the innermost unmatched opener, if any.
    fn next_closer(&self, window: &[u32]) -> Option<u32> {
        let mut open: Vec<u32> = Vec::new();
        for &id in window.iter().filter(|&&id| id != PAD_ID) {
            if let Some(&closer) = self.closers.get(&id) {
                open.push(closer);
            } else if open.last() == Some(&id) {
                open.pop();
            }
        }
        open.last().copied()
    }
}

impl Predictor for ReferencePredictor {
    fn capabilities(&self) -> &PredictorCapabilities {
        &self.caps
    }

    fn predict(&self, input: PredictorInput<'_>) -> Result<Vec<f32>> {
        let mut scores = vec![0.0; self.id_space];
        let winner = self.next_closer(input.primary()).unwrap_or(PAD_ID);
        scores[winner as usize] = 1.0;
        Ok(scores)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::codec::SequenceCodec;
    use crate::domain::sample::Sample;
    use crate::domain::traits::{InputArity, ModelKind};
    use crate::ml::evaluator::Evaluator;

    fn reference(vocab: &Vocabulary, window: usize) -> ReferencePredictor {
        let caps = PredictorCapabilities::new(window, InputArity::Single, ModelKind::Unknown);
        ReferencePredictor::new(vocab, caps, &DEFAULT_PAIRS).unwrap()
    }

    #[test]
    fn test_closes_innermost_first() {
        let v = Vocabulary::default();
        let codec = SequenceCodec::new(&v);
        let p = reference(&v, 30);

        let window = codec.encode("input:(【{,output");
        let scores = p.predict(PredictorInput::Single(&window)).unwrap();
        assert_eq!(scores.len(), v.id_space());
        assert_eq!(scores[v.id_of("}").unwrap() as usize], 1.0);
    }

    #[test]
    fn test_nothing_open_predicts_padding() {
        let v = Vocabulary::default();
        let p = reference(&v, 30);
        let scores = p.predict(PredictorInput::Single(&[1, 2, 8, 0, 0])).unwrap();
        assert_eq!(scores[PAD_ID as usize], 1.0);
    }

    #[test]
    fn test_perfect_score_on_well_formed_data() {
        let v = Vocabulary::default();
        let samples = vec![
            Sample::new("input:(【{,output", "}】)"),
            Sample::new("input:{}(,output", ")"),
            Sample::new("input:【(【】,output", ")】"),
        ];
        let result = Evaluator::new(&v).evaluate(&samples, &reference(&v, 30)).unwrap();
        assert_eq!(result.accuracy_label(), "100.00");
    }

    #[test]
    fn test_narrow_window_forgets_evicted_openers() {
        let v = Vocabulary::default();
        // a window of 4 keeps only "(【(【"; rolling then evicts the outer openers
        let samples = vec![Sample::new("input:(【(【,output", "】)】)")];
        let result = Evaluator::new(&v).evaluate(&samples, &reference(&v, 4)).unwrap();
        assert!(!result.outcomes[0].correct);
    }

    #[test]
    fn test_unknown_bracket_rejected() {
        let v = Vocabulary::default();
        let caps = PredictorCapabilities::new(8, InputArity::Single, ModelKind::Unknown);
        assert!(ReferencePredictor::new(&v, caps, &[("<", ">")]).is_err());
    }

    #[test]
    fn test_owned_pairs_for_custom_vocabulary() {
        let v = Vocabulary::new(["(", ")", "[", "]", "input", ",output", ","]).unwrap();
        let caps = PredictorCapabilities::new(16, InputArity::Single, ModelKind::Unknown);
        let pairs = vec![("(".to_string(), ")".to_string()), ("[".to_string(), "]".to_string())];
        let p = ReferencePredictor::new(&v, caps, &pairs).unwrap();

        let samples = vec![Sample::new("input:([,output", "])")];
        let result = Evaluator::new(&v).evaluate(&samples, &p).unwrap();
        assert_eq!(result.accuracy_label(), "100.00");
    }
}
