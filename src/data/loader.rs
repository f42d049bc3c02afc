// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads the evaluation dataset written by the external
// generator: a UTF-8 JSON array whose entries should be strings
// such as "input:(【{,output:}】)".
//
// Entries are handed over as untyped serde_json::Value so that
// the splitter can reject non-string entries one by one instead
// of failing the whole file.
//
// A missing file is an error (EvalError::MissingFile); so is a
// file that is not valid JSON or whose top level is not an array.

use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::domain::{error::EvalError, traits::RecordSource};

/// Loads raw records from a JSON array file.
pub struct JsonDatasetLoader {
    path: PathBuf,
}

impl JsonDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonDatasetLoader {
    fn load_records(&self) -> Result<Vec<Value>> {
        if !self.path.exists() {
            return Err(EvalError::MissingFile(self.path.clone()).into());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read dataset '{}'", self.path.display()))?;

        let parsed: Value = serde_json::from_str(&text)
            .with_context(|| format!("Dataset '{}' is not valid JSON", self.path.display()))?;

        match parsed {
            Value::Array(records) => {
                tracing::info!(
                    "Loaded {} records from '{}'",
                    records.len(),
                    self.path.display()
                );
                Ok(records)
            }
            other => anyhow::bail!(
                "Dataset '{}' must be a JSON array, found {}",
                self.path.display(),
                json_kind(&other)
            ),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}
