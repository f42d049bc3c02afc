// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing what the
// harness works with: samples, verdicts, error kinds and the
// predictor contract.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only plain data and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Evaluation error kinds
pub mod error;

// Sample, EvaluationOutcome, AggregateResult
pub mod sample;

// Predictor contract and dataset source abstraction
pub mod traits;
