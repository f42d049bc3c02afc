// ============================================================
// Layer 5 — Greedy Autoregressive Decoder
// ============================================================
// Rebuilds an output sequence one id at a time:
//
//   repeat target_steps times:
//     1. send the window to the predictor (one buffer or two
//        identical buffers, per its declared arity)
//     2. take the arg-max of the returned scores
//        (first maximum wins, so ties go to the lowest id)
//     3. record the id
//     4. push it into the window (fill padding, then roll)
//
// There is no stop token: the loop always runs exactly
// target_steps times, whatever the predictor returns.

use anyhow::{Context, Result};

use crate::domain::{
    error::EvalError,
    traits::{Predictor, PredictorInput},
};
use crate::ml::window::ContextWindow;

/// Run the predictor `target_steps` times starting from `initial_ids`.
/// The result always holds exactly `target_steps` ids.
pub fn decode<P: Predictor + ?Sized>(
    initial_ids:  &[u32],
    predictor:    &P,
    target_steps: usize,
) -> Result<Vec<u32>> {
    let caps = predictor.capabilities();
    caps.validate()?;

    let mut window    = ContextWindow::new(initial_ids, caps.max_input_length);
    let mut predicted = Vec::with_capacity(target_steps);

    for step in 0..target_steps {
        let input  = PredictorInput::shaped(window.as_slice(), caps.arity);
        let scores = predictor
            .predict(input)
            .with_context(|| format!("Predictor failed at decode step {step}"))?;
        let id = argmax(&scores).ok_or(EvalError::EmptyScores)?;

        predicted.push(id);
        window.push(id);
    }

    Ok(predicted)
}

/// Index of the first maximum score. NaN never wins.
pub fn argmax(scores: &[f32]) -> Option<u32> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        let s = if s.is_nan() { f32::NEG_INFINITY } else { s };
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i as u32)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::{InputArity, ModelKind, PredictorCapabilities};
    use std::cell::RefCell;

    /// Predicts (last real id + 1) and records every window it sees.
    struct CountingPredictor {
        caps:  PredictorCapabilities,
        seen:  RefCell<Vec<Vec<u32>>>,
        space: usize,
    }

    impl CountingPredictor {
        fn new(capacity: usize, arity: InputArity) -> Self {
            Self {
                caps:  PredictorCapabilities::new(capacity, arity, ModelKind::Unknown),
                seen:  RefCell::new(Vec::new()),
                space: 64,
            }
        }
    }

    impl Predictor for CountingPredictor {
        fn capabilities(&self) -> &PredictorCapabilities {
            &self.caps
        }

        fn predict(&self, input: PredictorInput<'_>) -> Result<Vec<f32>> {
            if let PredictorInput::Dual(a, b) = input {
                assert_eq!(a, b);
            }
            let window = input.primary();
            self.seen.borrow_mut().push(window.to_vec());
            let last = window.iter().rev().find(|&&id| id != 0).copied().unwrap_or(0);
            let mut scores = vec![0.0; self.space];
            scores[(last as usize + 1) % self.space] = 1.0;
            Ok(scores)
        }
    }

    struct FailingPredictor(PredictorCapabilities);

    impl Predictor for FailingPredictor {
        fn capabilities(&self) -> &PredictorCapabilities {
            &self.0
        }

        fn predict(&self, _input: PredictorInput<'_>) -> Result<Vec<f32>> {
            anyhow::bail!("device lost")
        }
    }

    #[test]
    fn test_exact_step_counts() {
        let capacity = 6;
        for steps in [0, 1, 5, capacity, capacity + 3] {
            let p = CountingPredictor::new(capacity, InputArity::Single);
            let out = decode(&[1, 2], &p, steps).unwrap();
            assert_eq!(out.len(), steps, "steps = {steps}");
            assert_eq!(p.seen.borrow().len(), steps);
        }
    }

    #[test]
    fn test_roll_over_after_capacity() {
        let p = CountingPredictor::new(4, InputArity::Single);
        let out = decode(&[1, 2], &p, 5).unwrap();
        assert_eq!(out, vec![3, 4, 5, 6, 7]);

        let seen = p.seen.borrow();
        assert_eq!(seen[0], vec![1, 2, 0, 0]);
        assert_eq!(seen[1], vec![1, 2, 3, 0]);
        assert_eq!(seen[2], vec![1, 2, 3, 4]);
        assert_eq!(seen[3], vec![2, 3, 4, 5]);
        assert_eq!(seen[4], vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_dual_arity_decodes_the_same() {
        let single = CountingPredictor::new(3, InputArity::Single);
        let dual   = CountingPredictor::new(3, InputArity::Dual);
        assert_eq!(
            decode(&[4], &single, 4).unwrap(),
            decode(&[4], &dual, 4).unwrap()
        );
    }

    #[test]
    fn test_argmax_ties_go_to_lowest_id() {
        assert_eq!(argmax(&[0.1, 0.7, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[f32::NAN, 0.2, 0.1]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_predictor_error_is_fatal() {
        let p = FailingPredictor(PredictorCapabilities::new(4, InputArity::Single, ModelKind::Gru));
        let err = decode(&[1], &p, 3).unwrap_err();
        assert!(err.to_string().contains("decode step 0"));
        // Zero steps never touch the predictor.
        assert!(decode(&[1], &p, 0).unwrap().is_empty());
    }
}
