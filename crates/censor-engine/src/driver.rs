use std::path::{Path, PathBuf};

use censor_core::{AggregateStats, CategorySet, CensorError, Result};
use censor_ner::{Detector, EntityRecognizer};
use censor_sources::{ensure_dir, expand_patterns};

use crate::FileProcessor;

/// A file skipped in keep-going mode
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: CensorError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub stats: AggregateStats,
    pub outputs: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Expands inputs and censors every file into one output directory
pub struct BatchDriver<R> {
    detector: Detector<R>,
    output_dir: PathBuf,
    keep_going: bool,
}

impl<R: EntityRecognizer> BatchDriver<R> {
    pub fn new(detector: Detector<R>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            detector,
            output_dir: output_dir.into(),
            keep_going: false,
        }
    }

    /// Log and skip failing files instead of aborting the batch
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Censor every file matched by `patterns`
    pub fn run<S: AsRef<str>>(&self, patterns: &[S], flags: CategorySet) -> Result<BatchSummary> {
        let files = expand_patterns(patterns)?;
        ensure_dir(&self.output_dir)?;

        tracing::info!(
            files = files.len(),
            output = %self.output_dir.display(),
            "Censoring batch"
        );

        let processor = FileProcessor::new(&self.detector, &self.output_dir);
        let mut summary = BatchSummary::default();

        for path in files {
            match processor.process(&path, flags) {
                Ok((result, output)) => {
                    summary.stats.merge(&result);
                    summary.outputs.push(output);
                }
                Err(error) if self.keep_going => {
                    tracing::warn!(path = %path.display(), error = %error, "Skipping file");
                    summary.failures.push(FileFailure { path, error });
                }
                Err(error) => return Err(error),
            }
        }

        tracing::info!(
            censored = summary.outputs.len(),
            failed = summary.failures.len(),
            findings = summary.stats.total(),
            "Batch complete"
        );

        Ok(summary)
    }
}
