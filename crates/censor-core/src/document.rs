//! Censored document model

use std::path::{Path, PathBuf};

use crate::CENSORED_SUFFIX;

/// Censored text together with where it came from and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensoredDocument {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub text: String,
}

impl CensoredDocument {
    pub fn new(source: impl Into<PathBuf>, output_dir: &Path, text: String) -> Self {
        let source = source.into();
        let destination = destination_for(&source, output_dir);
        Self {
            source,
            destination,
            text,
        }
    }
}

/// `output_dir/<file name>.censored`, flat regardless of the source's directory
pub fn destination_for(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(CENSORED_SUFFIX);
    output_dir.join(name)
}
