// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns shared by the other layers:
//
//   config_store.rs    — loads EvalConfig from optional JSON
//
//   predictor_store.rs — reads/writes the predictor.json
//                        descriptor (window width, input arity,
//                        architecture label)
//
//   report.rs          — renders the evaluation report and
//                        writes the shared and archived copies
//
//   logging.rs         — builds the tracing filter from RUST_LOG
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// Evaluation config loading
pub mod config_store;

/// Predictor descriptor persistence
pub mod predictor_store;

/// Report rendering and writing
pub mod report;

/// Tracing filter setup
pub mod logging;
