//! Lexicon-based entity recognizer
//!
//! A "model" is a JSON document with literal phrases (a gazetteer) and
//! regex patterns, each tagged with an entity label:
//!
//! ```json
//! {
//!   "name": "en_lexicon_sm",
//!   "entities": [{ "label": "GPE", "text": "Chicago" }],
//!   "patterns": [{ "label": "DATE", "regex": "\\b\\d{4}-\\d{2}-\\d{2}\\b" }]
//! }
//! ```
//!
//! Phrases match case-sensitively and only on word boundaries. Overlapping
//! candidates are resolved greedily: earliest start first, longest span on ties.

use std::path::Path;

use aho_corasick::AhoCorasick;
use censor_core::{CensorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityLabel, EntityRecognizer};

const BUILTIN_MODEL: &str = include_str!("../models/en_lexicon_sm.json");

/// On-disk model description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconModel {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub entities: Vec<PhraseEntry>,

    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub label: EntityLabel,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    pub label: EntityLabel,
    pub regex: String,
}

impl LexiconModel {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CensorError::Model(format!("Malformed model JSON: {}", e)))
    }
}

/// Compiled lexicon recognizer
pub struct LexiconRecognizer {
    name: String,
    phrases: Option<AhoCorasick>,
    phrase_labels: Vec<EntityLabel>,
    patterns: Vec<(EntityLabel, Regex)>,
}

struct Span {
    start: usize,
    end: usize,
    label: EntityLabel,
}

impl LexiconRecognizer {
    /// Compile a model
    pub fn new(model: LexiconModel) -> Result<Self> {
        if let Some(entry) = model.entities.iter().find(|e| e.text.is_empty()) {
            return Err(CensorError::Model(format!(
                "Empty phrase for label {}",
                entry.label
            )));
        }

        let phrases = if model.entities.is_empty() {
            None
        } else {
            let automaton = AhoCorasick::new(model.entities.iter().map(|e| e.text.as_str()))
                .map_err(|e| CensorError::Model(format!("Failed to build phrase matcher: {}", e)))?;
            Some(automaton)
        };
        let phrase_labels = model.entities.into_iter().map(|e| e.label).collect();

        let mut patterns = Vec::with_capacity(model.patterns.len());
        for entry in model.patterns {
            let regex = Regex::new(&entry.regex).map_err(|e| {
                CensorError::Model(format!("Invalid pattern for {}: {}", entry.label, e))
            })?;
            patterns.push((entry.label, regex));
        }

        Ok(Self {
            name: model.name,
            phrases,
            phrase_labels,
            patterns,
        })
    }

    /// Load and compile a model file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CensorError::Model(format!("Failed to read model {}: {}", path.display(), e))
        })?;
        let recognizer = Self::new(LexiconModel::from_json(&json)?)?;

        tracing::debug!(model = %recognizer.name, path = %path.display(), "Loaded recognizer model");
        Ok(recognizer)
    }

    /// The English model bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::new(LexiconModel::from_json(BUILTIN_MODEL)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn candidates(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();

        if let Some(phrases) = &self.phrases {
            for m in phrases.find_overlapping_iter(text) {
                if is_word_bounded(text, m.start(), m.end()) {
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: self.phrase_labels[m.pattern().as_usize()].clone(),
                    });
                }
            }
        }

        for (label, regex) in &self.patterns {
            for m in regex.find_iter(text) {
                if !m.is_empty() {
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: label.clone(),
                    });
                }
            }
        }

        spans
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut spans = self.candidates(text);
        // Stable sort: on identical spans, phrases win over patterns
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities = Vec::new();
        let mut last_end = 0;
        for span in spans {
            if span.start < last_end {
                continue;
            }
            last_end = span.end;
            entities.push(Entity {
                label: span.label,
                text: text[span.start..span.end].to_string(),
            });
        }

        Ok(entities)
    }
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
