// ============================================================
// Layer 4 — Sample Selector
// ============================================================
// Picks how many samples an evaluation run looks at.
//
//   count = None          → every sample, in file order
//   count = Some(n)       → the first n samples
//   count + seed          → Fisher-Yates shuffle with a seeded
//                           StdRng, then the first n
//
// The seed makes a shuffled subset reproducible across runs.
//
// Reference: rand crate documentation (SliceRandom, SeedableRng)

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

pub fn select_samples<T>(mut samples: Vec<T>, count: Option<usize>, seed: Option<u64>) -> Vec<T> {
    let total = samples.len();

    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        samples.shuffle(&mut rng);
    }

    if let Some(n) = count {
        samples.truncate(n);
    }

    tracing::debug!("Selected {} of {} samples", samples.len(), total);
    samples
}
