// ============================================================
// Layer 5 — ML / Decoding Layer
// ============================================================
// Everything that talks to a predictor.
//
//   window.rs         — fixed-width context buffer with roll-over
//   decoder.rs        — greedy arg-max loop, exactly N steps
//   evaluator.rs      — per-sample decode + exact string match
//   burn_predictor.rs — adapter from a burn model to Predictor
//   reference.rs      — stack-based bracket closer used as a
//                       weight-free baseline
//
// burn is only imported by burn_predictor.rs. The rest of the
// layer works against the Predictor trait and plain slices.
//
// Reference: Burn Book §3 (Building Blocks)

/// Context window buffer
pub mod window;

/// Greedy autoregressive decoding
pub mod decoder;

/// Batch evaluation and accuracy
pub mod evaluator;

/// Burn tensor adapter
pub mod burn_predictor;

/// Deterministic reference predictor
pub mod reference;
