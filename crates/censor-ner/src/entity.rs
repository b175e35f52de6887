//! Recognized entities

use std::fmt;
use std::str::FromStr;

use censor_core::Category;
use serde::{Deserialize, Serialize};

/// Semantic type tag attached to a recognized span
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Person,
    Date,
    /// Geopolitical entity: countries, states, cities
    Gpe,
    Other(String),
}

impl EntityLabel {
    /// Redaction category fed by this label, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            EntityLabel::Person => Some(Category::Names),
            EntityLabel::Date => Some(Category::Dates),
            EntityLabel::Gpe => Some(Category::Addresses),
            EntityLabel::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Date => "DATE",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Other(tag) => tag,
        }
    }
}

impl From<&str> for EntityLabel {
    fn from(tag: &str) -> Self {
        match tag {
            "PERSON" => EntityLabel::Person,
            "DATE" => EntityLabel::Date,
            "GPE" => EntityLabel::Gpe,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityLabel {
    fn from(tag: String) -> Self {
        EntityLabel::from(tag.as_str())
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl FromStr for EntityLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EntityLabel::from(s))
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled literal span of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
}

impl Entity {
    pub fn new(label: impl Into<EntityLabel>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(EntityLabel::from("PERSON"), EntityLabel::Person);
        assert_eq!(EntityLabel::from("GPE"), EntityLabel::Gpe);
        assert_eq!(
            EntityLabel::from("ORG"),
            EntityLabel::Other("ORG".to_string())
        );
        assert_eq!(EntityLabel::Other("ORG".to_string()).to_string(), "ORG");
    }

    #[test]
    fn test_label_categories() {
        assert_eq!(EntityLabel::Person.category(), Some(Category::Names));
        assert_eq!(EntityLabel::Date.category(), Some(Category::Dates));
        assert_eq!(EntityLabel::Gpe.category(), Some(Category::Addresses));
        assert_eq!(EntityLabel::from("LOC").category(), None);
    }

    #[test]
    fn test_label_serde() {
        let label: EntityLabel = serde_json::from_str("\"DATE\"").unwrap();
        assert_eq!(label, EntityLabel::Date);
        assert_eq!(serde_json::to_string(&EntityLabel::Gpe).unwrap(), "\"GPE\"");
    }
}
