// ============================================================
// Layer 6 — Predictor Descriptor Store
// ============================================================
// Reads and writes the JSON descriptor a predictor leaves next
// to its weights:
//
//   models/gru/predictor.json
//   { "max_input_length": 30, "arity": "single", "kind": "gru" }
//
// The evaluator needs exactly these three facts and nothing
// else about the model. The descriptor's directory is also
// where the archived evaluation reports go.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::{error::EvalError, traits::PredictorCapabilities};

pub const DESCRIPTOR_FILE: &str = "predictor.json";

pub struct PredictorStore {
    path: PathBuf,
}

impl PredictorStore {
    /// `location` may be the descriptor file itself or the directory holding it.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        let location = location.into();
        let path = if location.is_dir() {
            location.join(DESCRIPTOR_FILE)
        } else {
            location
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PredictorCapabilities> {
        if !self.path.exists() {
            return Err(EvalError::MissingFile(self.path.clone()).into());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read predictor descriptor '{}'", self.path.display()))?;
        let caps: PredictorCapabilities = serde_json::from_str(&json)
            .with_context(|| format!("Invalid predictor descriptor '{}'", self.path.display()))?;
        caps.validate()?;

        tracing::debug!("Loaded predictor descriptor from '{}'", self.path.display());
        Ok(caps)
    }

    #[cfg(test)]
    pub fn save(&self, caps: &PredictorCapabilities) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).ok();
        }
        let json = serde_json::to_string_pretty(caps)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write predictor descriptor '{}'", self.path.display()))?;
        Ok(())
    }
}
