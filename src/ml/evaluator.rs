// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores a predictor against a batch of samples.
//
// For each sample, in order:
//   1. encode the input            → initial window ids
//   2. encode the expected output  → target_steps = its length
//   3. greedy-decode target_steps ids
//   4. decode predicted AND expected ids with the same lossy
//      decode, then compare the strings exactly
//
// String equality (not id equality) is the verdict. Two id
// sequences that decode to the same string count as a match.

use anyhow::{Context, Result};

use crate::data::{codec::SequenceCodec, vocabulary::Vocabulary};
use crate::domain::{
    error::EvalError,
    sample::{AggregateResult, EvaluationOutcome, Sample},
    traits::Predictor,
};
use crate::ml::decoder;

pub struct Evaluator<'v> {
    codec: SequenceCodec<'v>,
}

impl<'v> Evaluator<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { codec: SequenceCodec::new(vocab) }
    }

    /// Evaluate every sample. An empty batch is an error, never 0%.
    pub fn evaluate<P: Predictor + ?Sized>(
        &self,
        samples:   &[Sample],
        predictor: &P,
    ) -> Result<AggregateResult> {
        if samples.is_empty() {
            return Err(EvalError::EmptyDataset.into());
        }

        let caps = predictor.capabilities();
        caps.validate()?;
        tracing::info!(
            "Evaluating {} samples (model type: {}, window: {})",
            samples.len(),
            caps.kind,
            caps.max_input_length,
        );

        let mut outcomes = Vec::with_capacity(samples.len());
        for (i, sample) in samples.iter().enumerate() {
            let outcome = self
                .evaluate_sample(i + 1, sample, predictor)
                .with_context(|| format!("Sample {} ({:?})", i + 1, sample.input_sequence))?;
            outcomes.push(outcome);
        }

        let result = AggregateResult::new(outcomes);
        tracing::info!(
            "Accuracy: {}% ({}/{})",
            result.accuracy_label(),
            result.correct(),
            result.total(),
        );
        Ok(result)
    }

    pub fn evaluate_sample<P: Predictor + ?Sized>(
        &self,
        index:     usize,
        sample:    &Sample,
        predictor: &P,
    ) -> Result<EvaluationOutcome> {
        let input_ids    = self.codec.encode(&sample.input_sequence);
        let expected_ids = self.codec.encode(&sample.expected_output);

        let predicted_ids = decoder::decode(&input_ids, predictor, expected_ids.len())?;

        let predicted = self.codec.decode(&predicted_ids);
        let expected  = self.codec.decode(&expected_ids);
        let correct   = predicted == expected;

        tracing::debug!(
            "Sample {index}: {} predicted={predicted:?} expected={expected:?}",
            if correct { "PASS" } else { "FAIL" },
        );

        Ok(EvaluationOutcome {
            index,
            input: sample.input_sequence.clone(),
            predicted,
            expected,
            correct,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::{InputArity, ModelKind, PredictorCapabilities, PredictorInput};

    /// Always predicts the same id.
    struct ConstantPredictor {
        caps: PredictorCapabilities,
        id:   usize,
    }

    impl ConstantPredictor {
        fn new(id: usize) -> Self {
            Self {
                caps: PredictorCapabilities::new(8, InputArity::Single, ModelKind::Lstm),
                id,
            }
        }
    }

    impl Predictor for ConstantPredictor {
        fn capabilities(&self) -> &PredictorCapabilities {
            &self.caps
        }

        fn predict(&self, _input: PredictorInput<'_>) -> Result<Vec<f32>> {
            let mut scores = vec![0.0; 10];
            scores[self.id] = 1.0;
            Ok(scores)
        }
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let v = Vocabulary::default();
        let err = Evaluator::new(&v)
            .evaluate(&[], &ConstantPredictor::new(2))
            .unwrap_err();
        assert_eq!(err.downcast_ref::<EvalError>(), Some(&EvalError::EmptyDataset));
    }

    #[test]
    fn test_three_of_four_correct() {
        let v = Vocabulary::default();
        // ")" has id 2
        let samples = vec![
            Sample::new("input:(,output", ")"),
            Sample::new("input:((,output", "))"),
            Sample::new("input:【,output", "】"),
            Sample::new("input:(((,output", ")))"),
        ];
        let result = Evaluator::new(&v)
            .evaluate(&samples, &ConstantPredictor::new(2))
            .unwrap();

        assert_eq!(result.total(), 4);
        assert_eq!(result.accuracy_label(), "75.00");
        assert!(!result.outcomes[2].correct);
        assert_eq!(result.outcomes[2].predicted, ")");
        assert_eq!(result.outcomes[2].expected, "】");
        assert_eq!(result.outcomes[3].index, 4);
    }

    #[test]
    fn test_comparison_uses_lossy_decode() {
        let v = Vocabulary::default();
        // Expected text carries non-token noise that decode drops,
        // and the padding prediction decodes to nothing.
        let samples = vec![
            Sample::new("input:(,output", ")noise"),
            Sample::new("input:x,output", "abc"),
        ];
        let result = Evaluator::new(&v)
            .evaluate(&samples, &ConstantPredictor::new(2))
            .unwrap();
        assert!(result.outcomes[0].correct);
        assert_eq!(result.outcomes[0].expected, ")");
        // "abc" encodes to zero ids → zero steps → "" == ""
        assert!(result.outcomes[1].correct);
        assert_eq!(result.outcomes[1].predicted, "");
    }

    #[test]
    fn test_padding_prediction_decodes_to_nothing() {
        let v = Vocabulary::default();
        let samples = vec![Sample::new("input:(,output", ")")];
        // id 0 is padding and is dropped by decode
        let result = Evaluator::new(&v)
            .evaluate(&samples, &ConstantPredictor::new(0))
            .unwrap();
        assert_eq!(result.outcomes[0].predicted, "");
        assert!(!result.outcomes[0].correct);
        assert_eq!(result.accuracy_label(), "0.00");
    }

    /// Scores one id past the vocabulary highest.
    struct BeyondVocabPredictor {
        caps: PredictorCapabilities,
    }

    impl Predictor for BeyondVocabPredictor {
        fn capabilities(&self) -> &PredictorCapabilities {
            &self.caps
        }

        fn predict(&self, _input: PredictorInput<'_>) -> Result<Vec<f32>> {
            let mut scores = vec![0.0; 12];
            scores[10] = 1.0;
            Ok(scores)
        }
    }

    #[test]
    fn test_out_of_range_prediction_decodes_to_nothing() {
        let v = Vocabulary::default();
        let samples = vec![Sample::new("input:(,output", ")")];
        let p = BeyondVocabPredictor {
            caps: PredictorCapabilities::new(8, InputArity::Single, ModelKind::Unknown),
        };
        let result = Evaluator::new(&v).evaluate(&samples, &p).unwrap();
        assert_eq!(result.outcomes[0].predicted, "");
        assert!(!result.outcomes[0].correct);
    }
}
