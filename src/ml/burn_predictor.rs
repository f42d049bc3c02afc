// ============================================================
// Layer 5 — Burn Predictor Adapter
// ============================================================
// Lets any burn model act as a Predictor.
//
// The model side only has to implement SequenceModel:
//   input:  one or two Int tensors of shape [1, window]
//   output: a Float tensor of shape [1, id_space] holding the
//           next-position scores (logits or probabilities)
//
// The adapter builds the input tensors from the context window,
// runs the forward pass and copies the scores back into a
// Vec<f32> for the decoder's arg-max. Building, training and
// loading the model are left to the caller.
//
// Reference: Burn Book §3 (Tensors), §7 (Inference)

use anyhow::Result;
use burn::prelude::*;

use crate::domain::traits::{Predictor, PredictorCapabilities, PredictorInput};

/// Model input in the shape the model was declared with.
pub enum SequenceInput<B: Backend> {
    Single(Tensor<B, 2, Int>),
    Dual(Tensor<B, 2, Int>, Tensor<B, 2, Int>),
}

/// A burn model that scores the next token of a window.
pub trait SequenceModel<B: Backend> {
    /// Returns scores of shape [1, id_space].
    fn forward(&self, input: SequenceInput<B>) -> Tensor<B, 2>;
}

pub struct BurnPredictor<B: Backend, M: SequenceModel<B>> {
    model:  M,
    caps:   PredictorCapabilities,
    device: B::Device,
}

impl<B: Backend, M: SequenceModel<B>> BurnPredictor<B, M> {
    pub fn new(model: M, caps: PredictorCapabilities, device: B::Device) -> Result<Self> {
        caps.validate()?;
        Ok(Self { model, caps, device })
    }

    fn window_tensor(&self, window: &[u32]) -> Tensor<B, 2, Int> {
        let ids: Vec<i64> = window.iter().map(|&id| id as i64).collect();
        Tensor::<B, 2, Int>::from_data(TensorData::new(ids, [1, window.len()]), &self.device)
    }
}

impl<B: Backend, M: SequenceModel<B>> Predictor for BurnPredictor<B, M> {
    fn capabilities(&self) -> &PredictorCapabilities {
        &self.caps
    }

    fn predict(&self, input: PredictorInput<'_>) -> Result<Vec<f32>> {
        let model_input = match input {
            PredictorInput::Single(w)  => SequenceInput::Single(self.window_tensor(w)),
            PredictorInput::Dual(a, b) => {
                SequenceInput::Dual(self.window_tensor(a), self.window_tensor(b))
            }
        };

        let scores = self.model.forward(model_input);
        let [batch, _] = scores.dims();
        if batch != 1 {
            anyhow::bail!("Expected scores for one window, model returned {batch}");
        }

        scores
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read model scores: {e:?}"))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    use crate::data::vocabulary::Vocabulary;
    use crate::domain::sample::Sample;
    use crate::domain::traits::{InputArity, ModelKind};
    use crate::ml::{decoder, evaluator::Evaluator};

    type B = NdArray;

    /// Scores (last real id + 1) highest.
    struct NextIdModel {
        id_space: usize,
    }

    impl SequenceModel<B> for NextIdModel {
        fn forward(&self, input: SequenceInput<B>) -> Tensor<B, 2> {
            let window = match input {
                SequenceInput::Single(w) => w,
                SequenceInput::Dual(a, b) => {
                    assert_eq!(a.dims(), b.dims());
                    a
                }
            };
            let device = window.device();
            let ids = window.into_data().convert::<i64>().to_vec::<i64>().unwrap();
            let last = ids.iter().rev().find(|&&id| id != 0).copied().unwrap_or(0) as usize;

            let mut scores = vec![0.0f32; self.id_space];
            scores[(last + 1) % self.id_space] = 1.0;
            Tensor::<B, 2>::from_data(TensorData::new(scores, [1, self.id_space]), &device)
        }
    }

    fn predictor(arity: InputArity) -> BurnPredictor<B, NextIdModel> {
        let caps = PredictorCapabilities::new(4, arity, ModelKind::Gru);
        BurnPredictor::new(NextIdModel { id_space: 10 }, caps, Default::default()).unwrap()
    }

    #[test]
    fn test_scores_cover_id_space() {
        let p = predictor(InputArity::Single);
        let scores = p.predict(PredictorInput::Single(&[1, 2, 0, 0])).unwrap();
        assert_eq!(scores.len(), 10);
        assert_eq!(decoder::argmax(&scores), Some(3));
    }

    #[test]
    fn test_decodes_through_burn_with_roll_over() {
        for arity in [InputArity::Single, InputArity::Dual] {
            let p = predictor(arity);
            let out = decoder::decode(&[1, 2], &p, 6).unwrap();
            assert_eq!(out, vec![3, 4, 5, 6, 7, 8]);
        }
    }

    #[test]
    fn test_end_to_end_evaluation() {
        let v = Vocabulary::default();
        let samples = vec![Sample::new("(input,output", ")"), Sample::new("(,output", "】")];
        let caps = PredictorCapabilities::new(6, InputArity::Single, ModelKind::Transformer);
        let p = BurnPredictor::<B, _>::new(NextIdModel { id_space: 10 }, caps, Default::default()).unwrap();

        // "(input,output" encodes to [1, 7, 8] → model predicts 9 (",")
        let result = Evaluator::new(&v).evaluate(&samples, &p).unwrap();
        assert_eq!(result.outcomes[0].predicted, ",");
        assert_eq!(result.accuracy_label(), "0.00");
    }

    #[test]
    fn test_zero_width_window_rejected() {
        let caps = PredictorCapabilities::new(0, InputArity::Single, ModelKind::Gru);
        assert!(BurnPredictor::<B, _>::new(NextIdModel { id_space: 10 }, caps, Default::default()).is_err());
    }
}
