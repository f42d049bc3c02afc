// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the other layers together for one user-facing task.
// No decoding math and no printing here; the CLI prints, the
// ml layer decodes.

// Full evaluation run + EvalConfig
pub mod evaluate_use_case;

// Codec inspection for a single string
pub mod tokenize_use_case;
