//! Sensitive information detection
//!
//! Names, dates and addresses come from the entity recognizer; phone
//! numbers come from a fixed `DDD-DDD-DDDD` pattern.

use censor_core::{Category, CategorySet, DetectionResult, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::EntityRecognizer;

lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"\b\d{3}-\d{3}-\d{4}\b").unwrap();
}

/// Runs the recognizer and the phone pattern over a document
pub struct Detector<R> {
    recognizer: R,
}

impl<R: EntityRecognizer> Detector<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Collect findings for every active category
    pub fn detect(&self, text: &str, flags: CategorySet) -> Result<DetectionResult> {
        let mut result = DetectionResult::new();

        let wants_entities = flags.contains(Category::Names)
            || flags.contains(Category::Dates)
            || flags.contains(Category::Addresses);

        if wants_entities {
            for entity in self.recognizer.recognize(text)? {
                match entity.label.category() {
                    Some(category) if flags.contains(category) => {
                        result.push(category, entity.text);
                    }
                    _ => {}
                }
            }
        }

        if flags.contains(Category::Phones) {
            for m in PHONE_PATTERN.find_iter(text) {
                result.push(Category::Phones, m.as_str());
            }
        }

        Ok(result)
    }
}
