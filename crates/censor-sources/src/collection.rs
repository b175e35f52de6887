use std::collections::HashSet;
use std::path::PathBuf;

use censor_core::{CensorError, Result};

/// Expand glob patterns into the combined list of input files
///
/// Matches keep the order the `glob` crate yields them, pattern by pattern.
/// A pattern matching nothing contributes nothing. A path matched by more
/// than one pattern is kept once, at its first position. Directories and
/// other non-files are skipped.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries = glob::glob(pattern).map_err(|source| CensorError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut matched = 0;
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "Skipping non-file match");
                continue;
            }
            matched += 1;
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }

        tracing::debug!(pattern, matched, "Expanded input pattern");
    }

    Ok(files)
}
