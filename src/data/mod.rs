// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the dataset file and id sequences.
//
//   dataset JSON
//       │
//       ▼
//   JsonDatasetLoader → raw records (serde_json::Value)
//       │
//       ▼
//   SampleSplitter    → (input, expected) samples
//       │
//       ▼
//   select_samples    → optional count / seeded subset
//       │
//       ▼
//   SequenceCodec     → Tokenizer + Vocabulary → token ids
//
// Reference: Rust Book §8 (Collections), §13 (Iterators)

/// Fixed token list ↔ id map
pub mod vocabulary;

/// Boundary-scanning string segmenter
pub mod tokenizer;

/// Lossy string ↔ id conversion
pub mod codec;

/// Reads the dataset JSON file
pub mod loader;

/// Splits raw records into input / expected pairs
pub mod splitter;

/// Limits and optionally shuffles the evaluated samples
pub mod selector;
