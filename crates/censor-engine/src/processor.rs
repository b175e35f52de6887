use std::path::{Path, PathBuf};

use censor_core::{CategorySet, CensoredDocument, DetectionResult, Result};
use censor_ner::{Detector, EntityRecognizer};
use censor_security::Censor;
use censor_sources::{read_document, write_document};

/// Censors one file into the output directory
pub struct FileProcessor<'a, R> {
    detector: &'a Detector<R>,
    censor: Censor,
    output_dir: PathBuf,
}

impl<'a, R: EntityRecognizer> FileProcessor<'a, R> {
    pub fn new(detector: &'a Detector<R>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            detector,
            censor: Censor::new(),
            output_dir: output_dir.into(),
        }
    }

    /// Read, detect, censor and write `path`
    ///
    /// Output goes to `<output_dir>/<file name>.censored`, overwriting any
    /// existing file. Returns the findings and the path written.
    pub fn process(&self, path: &Path, flags: CategorySet) -> Result<(DetectionResult, PathBuf)> {
        let text = read_document(path)?;

        let result = self.detector.detect(&text, flags)?;
        let censored = self.censor.censor(&text, &result)?;

        let document = CensoredDocument::new(path, &self.output_dir, censored);
        write_document(&document.destination, &document.text)?;

        tracing::debug!(
            source = %path.display(),
            destination = %document.destination.display(),
            findings = result.total(),
            "Censored file"
        );

        Ok((result, document.destination))
    }
}
