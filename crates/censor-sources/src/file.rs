use std::path::Path;

use censor_core::{CensorError, Result};

/// Read a whole document as UTF-8
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CensorError::io(path, e))
}

/// Write a document, replacing any existing file
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| CensorError::io(path, e))
}

/// Create a directory and its parents if missing
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| CensorError::io(path, e))
}
