// ============================================================
// Layer 6 — Evaluation Report Writer
// ============================================================
// Renders an AggregateResult as plain text and writes it twice:
//
//   1. the shared path (default: evaluation_result.txt)
//   2. an archive copy next to the predictor:
//        <predictor dir>/evaluation_results/evaluation_result_<XX.XX>%.txt
//
// Both writes overwrite the whole file.
//
// Example output:
//   Sample 1 PASS
//   Input: input:(【,output
//   Predicted: 】)
//   Expected: 】)
//
//   Sample 2 FAIL
//   ...
//
//   Accuracy: 50.00%

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::sample::{AggregateResult, EvaluationOutcome};

/// Where the two report copies ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub shared:  PathBuf,
    pub archive: PathBuf,
}

pub struct Reporter {
    report_path:      PathBuf,
    results_dir_name: String,
}

impl Reporter {
    pub fn new(report_path: impl Into<PathBuf>, results_dir_name: impl Into<String>) -> Self {
        Self {
            report_path:      report_path.into(),
            results_dir_name: results_dir_name.into(),
        }
    }

    pub fn render(&self, result: &AggregateResult) -> String {
        let blocks: Vec<String> = result.outcomes.iter().map(render_block).collect();
        format!("{}\nAccuracy: {}%", blocks.join("\n"), result.accuracy_label())
    }

    /// Archive location for a predictor stored at `predictor_location`.
    pub fn archive_path(&self, result: &AggregateResult, predictor_location: &Path) -> PathBuf {
        let parent = predictor_location.parent().unwrap_or_else(|| Path::new(""));
        parent
            .join(&self.results_dir_name)
            .join(format!("evaluation_result_{}%.txt", result.accuracy_label()))
    }

    pub fn write(&self, result: &AggregateResult, predictor_location: &Path) -> Result<ReportPaths> {
        let text = self.render(result);

        write_file(&self.report_path, &text)?;

        let archive = self.archive_path(result, predictor_location);
        if let Some(dir) = archive.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create results directory '{}'", dir.display()))?;
        }
        write_file(&archive, &text)?;

        tracing::info!(
            "Evaluation report saved to '{}' and '{}'",
            self.report_path.display(),
            archive.display()
        );
        Ok(ReportPaths { shared: self.report_path.clone(), archive })
    }
}

fn render_block(o: &EvaluationOutcome) -> String {
    format!(
        "Sample {} {}\nInput: {}\nPredicted: {}\nExpected: {}\n",
        o.index,
        if o.correct { "PASS" } else { "FAIL" },
        o.input,
        o.predicted,
        o.expected,
    )
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Cannot write report '{}'", path.display()))
}
