use censor_core::{BLOCK_CHAR, Category, DetectionResult, Result};
use regex::Regex;

/// Replaces detected findings with block-character runs
///
/// Replacement is by literal text, not by position: every occurrence of a
/// finding is censored, and findings are applied one after another in
/// detection order. A finding that is a substring of a later one can
/// therefore change what the later one matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Censor;

impl Censor {
    pub fn new() -> Self {
        Self
    }

    /// Censor `text` using the findings in `result`
    pub fn censor(&self, text: &str, result: &DetectionResult) -> Result<String> {
        let mut censored = text.to_string();

        for category in [Category::Names, Category::Dates, Category::Addresses] {
            for finding in result.findings(category) {
                if finding.text.is_empty() {
                    continue;
                }
                censored = censored.replace(&finding.text, &block_run(&finding.text));
            }
        }

        for finding in result.findings(Category::Phones) {
            if finding.text.is_empty() {
                continue;
            }
            // Phones only match as whole words
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&finding.text)))?;
            censored = pattern
                .replace_all(&censored, block_run(&finding.text).as_str())
                .into_owned();
        }

        Ok(censored)
    }
}

/// Block run with the same character count as `text`
pub fn block_run(text: &str) -> String {
    std::iter::repeat_n(BLOCK_CHAR, text.chars().count()).collect()
}
