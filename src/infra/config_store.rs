// ============================================================
// Layer 6 — Evaluation Config Store
// ============================================================
// Loads EvalConfig from an optional JSON file. Missing keys
// fall back to the defaults, so a file only needs the fields
// it changes:
//
//   {
//     "tokens":        ["(", ")", "[", "]", "input", ",output", ","],
//     "bracket_pairs": [["(", ")"], ["[", "]"]]
//   }
//
// No file at all means EvalConfig::default().

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::evaluate_use_case::EvalConfig;
use crate::domain::error::EvalError;

pub fn load_config(path: Option<&Path>) -> Result<EvalConfig> {
    let Some(path) = path else {
        return Ok(EvalConfig::default());
    };
    if !path.exists() {
        return Err(EvalError::MissingFile(path.to_path_buf()).into());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
    let cfg: EvalConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config '{}'", path.display()))?;

    tracing::debug!("Loaded evaluation config from '{}'", path.display());
    Ok(cfg)
}
